use leptos::prelude::*;

use crate::core::content::TESTIMONIALS;
use crate::core::state::Carousel;
use crate::ui::common::{Container, SectionHeading};
use crate::ui::icon::{Icon, icons};

/// Customer quotes in a carousel with arrows and dot indicators
#[component]
pub fn Testimonials() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));
    let current = move || TESTIMONIALS.get(carousel.with(|c| c.index()));

    view! {
        <section id="testimonials" class="relative py-20 bg-gradient-to-b from-gray-50 to-white">
            <Container>
                <SectionHeading
                    title="What Our Customers Say"
                    subtitle="Join thousands of satisfied customers who have transformed their marketing with AI."
                />

                <div class="relative max-w-4xl mx-auto">
                    <div class="absolute -top-8 -left-8 text-8xl leading-none font-serif text-purple-500/20 select-none" aria-hidden="true">
                        "\u{201C}"
                    </div>

                    <div class="relative bg-white/80 backdrop-blur-sm border border-gray-200 rounded-2xl p-8 md:p-12 shadow-lg">
                        {move || current().map(|t| view! {
                            <div class="text-center landing-fade-in">
                                <div class="flex justify-center mb-6" aria-label=format!("{} out of 5 stars", t.rating)>
                                    {(0..t.rating).map(|_| view! {
                                        <Icon name=icons::STAR class="w-6 h-6 text-yellow-400" filled=true/>
                                    }).collect_view()}
                                </div>
                                <blockquote class="text-xl md:text-2xl text-gray-700 mb-8 leading-relaxed">
                                    {format!("\u{201C}{}\u{201D}", t.quote)}
                                </blockquote>
                                <div class="flex items-center justify-center gap-4">
                                    <div class="w-16 h-16 bg-gradient-to-r from-purple-500 to-blue-500 rounded-full flex items-center justify-center text-2xl">
                                        {t.avatar}
                                    </div>
                                    <div class="text-left">
                                        <div class="font-semibold text-gray-900">{t.name}</div>
                                        <div class="text-gray-600">{format!("{} at {}", t.role, t.company)}</div>
                                    </div>
                                </div>
                            </div>
                        })}
                    </div>

                    <button
                        class="absolute left-4 top-1/2 -translate-y-1/2 w-12 h-12 bg-white/80 backdrop-blur-sm border border-gray-200 rounded-full flex items-center justify-center shadow-lg hover:shadow-xl transition-all duration-300"
                        on:click=move |_| carousel.update(Carousel::prev)
                        aria-label="Previous testimonial"
                    >
                        <Icon name=icons::CHEVRON_LEFT class="w-6 h-6 text-gray-600"/>
                    </button>
                    <button
                        class="absolute right-4 top-1/2 -translate-y-1/2 w-12 h-12 bg-white/80 backdrop-blur-sm border border-gray-200 rounded-full flex items-center justify-center shadow-lg hover:shadow-xl transition-all duration-300"
                        on:click=move |_| carousel.update(Carousel::next)
                        aria-label="Next testimonial"
                    >
                        <Icon name=icons::CHEVRON_RIGHT class="w-6 h-6 text-gray-600"/>
                    </button>

                    <div class="flex justify-center mt-8 gap-2">
                        {(0..TESTIMONIALS.len()).map(|index| view! {
                            <button
                                class="w-3 h-3 rounded-full transition-all duration-300"
                                class=("bg-purple-500", move || carousel.with(|c| c.is_active(index)))
                                class=("scale-125", move || carousel.with(|c| c.is_active(index)))
                                class=("bg-gray-300", move || !carousel.with(|c| c.is_active(index)))
                                on:click=move |_| {
                                    carousel.update(|c| {
                                        c.go_to(index);
                                    })
                                }
                                aria-label=format!("Show testimonial {}", index + 1)
                            ></button>
                        }).collect_view()}
                    </div>
                </div>
            </Container>
        </section>
    }
}
