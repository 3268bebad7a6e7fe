use leptos::prelude::*;

use crate::core::content::{FAQS, FaqEntry};
use crate::core::state::Accordion;
use crate::ui::common::{Container, SectionHeading};
use crate::ui::icon::{Icon, icons};

/// FAQ section; at most one answer is expanded at a time
#[component]
pub fn Faq() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::default());

    view! {
        <section id="faq" class="py-20 bg-gradient-to-b from-white to-gray-50">
            <Container max_width="max-w-4xl">
                <SectionHeading
                    title="Frequently Asked Questions"
                    subtitle="Everything you need to know about our AI marketing suite."
                />

                <div class="space-y-4">
                    {FAQS.iter().enumerate().map(|(index, entry)| view! {
                        <FaqItem entry=*entry index=index accordion=accordion/>
                    }).collect_view()}
                </div>

                <div class="text-center mt-12 landing-scroll-animate">
                    <p class="text-gray-600 mb-4">"Still have questions?"</p>
                    <a
                        href="mailto:support@admybrand.com"
                        class="inline-block bg-gradient-to-r from-purple-500 to-blue-500 text-white px-8 py-3 rounded-xl font-semibold hover:shadow-lg transition-all duration-300"
                    >
                        "Contact Support"
                    </a>
                </div>
            </Container>
        </section>
    }
}

#[component]
fn FaqItem(entry: FaqEntry, index: usize, accordion: RwSignal<Accordion>) -> impl IntoView {
    let is_open = move || accordion.with(|a| a.is_open(index));
    let panel_id = format!("faq-answer-{}", index);

    view! {
        <div class="landing-scroll-animate bg-white/80 backdrop-blur-sm border border-gray-200 rounded-2xl overflow-hidden shadow-sm hover:shadow-md transition-shadow">
            <button
                class="w-full px-6 py-5 flex items-center justify-between gap-4 text-left hover:bg-gray-50 transition-colors"
                on:click=move |_| accordion.update(|a| a.toggle(index))
                aria-expanded=move || is_open().to_string()
                aria-controls=panel_id.clone()
            >
                <span class="font-semibold text-gray-900 text-lg">{entry.question}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 text-purple-500 flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", is_open)
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5"/>
                </div>
            </button>
            <div
                id=panel_id
                class="overflow-hidden transition-all duration-300"
                class=("max-h-0", move || !is_open())
                class=("max-h-96", is_open)
            >
                <div class="px-6 pb-5 text-gray-600 leading-relaxed">{entry.answer}</div>
            </div>
        </div>
    }
}
