use leptos::prelude::*;
use std::time::Duration;

use crate::core::content::{
    ANIMATION_SHOWCASES, AnimationKind, SHAPE_INTERVAL_MS, SHOWCASE_HIGHLIGHTS,
    SHOWCASE_INTERVAL_MS, scatter_particles,
};
use crate::core::state::Carousel;
use crate::ui::common::{Container, use_auto_advance};
use crate::ui::icon::{Icon, icons};

/// Shape classes cycled by the morphing showcase: circle, square, triangle
const SHAPE_CLASSES: [&str; 3] = ["rounded-full", "rounded-lg", "landing-triangle"];

const FLOATING_PARTICLES: usize = 20;
const SYSTEM_PARTICLES: usize = 30;

/// Showcase of decorative animations with play/pause, reset and direct jumps
#[component]
pub fn AdvancedAnimations() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(ANIMATION_SHOWCASES.len()));
    let playing = RwSignal::new(false);
    let index = Memo::new(move |_| carousel.with(|c| c.index()));

    use_auto_advance(
        playing.into(),
        Signal::derive(|| Duration::from_millis(SHOWCASE_INTERVAL_MS)),
        Callback::new(move |_| carousel.update(Carousel::next)),
    );

    view! {
        <section id="showcase" class="py-20 bg-gradient-to-br from-gray-900 via-purple-900 to-blue-900 relative overflow-hidden">
            <Container class="relative z-10">
                <div class="text-center mb-16 landing-scroll-animate">
                    <h2 class="text-5xl font-bold text-white mb-6">"Advanced Animations"</h2>
                    <p class="text-xl text-gray-300 max-w-3xl mx-auto">
                        "Experience smooth, physics-inspired motion throughout the product."
                    </p>
                </div>

                <div class="flex justify-center mb-12">
                    <div class="bg-white/10 backdrop-blur-md rounded-2xl p-4 flex items-center space-x-4">
                        <button
                            class="flex items-center space-x-2 px-4 py-2 bg-white/20 text-white rounded-lg hover:bg-white/30 transition-colors"
                            on:click=move |_| playing.update(|p| *p = !*p)
                        >
                            {move || {
                                let name = if playing.get() { icons::PAUSE } else { icons::PLAY };
                                view! { <Icon name=name class="w-4 h-4"/> }
                            }}
                            <span class="text-sm font-medium">{move || if playing.get() { "Pause" } else { "Play" }}</span>
                        </button>
                        <button
                            class="flex items-center space-x-2 px-4 py-2 bg-white/20 text-white rounded-lg hover:bg-white/30 transition-colors"
                            on:click=move |_| carousel.update(Carousel::reset)
                        >
                            <Icon name=icons::RESET class="w-4 h-4"/>
                            <span class="text-sm font-medium">"Reset"</span>
                        </button>
                        <div class="flex space-x-2">
                            {ANIMATION_SHOWCASES.iter().enumerate().map(|(i, showcase)| view! {
                                <button
                                    class="w-3 h-3 rounded-full transition-colors"
                                    class=("bg-white", move || index.get() == i)
                                    class=("bg-white/30", move || index.get() != i)
                                    on:click=move |_| {
                                        carousel.update(|c| {
                                            c.go_to(i);
                                        })
                                    }
                                    aria-label=showcase.name
                                ></button>
                            }).collect_view()}
                        </div>
                    </div>
                </div>

                <div class="bg-white/5 backdrop-blur-md rounded-3xl p-8 border border-white/10">
                    {move || {
                        let showcase = ANIMATION_SHOWCASES[index.get()];
                        view! {
                            <div class="text-center mb-6">
                                <h3 class="text-2xl font-bold text-white mb-2">{showcase.name}</h3>
                                <p class="text-gray-300">{showcase.description}</p>
                            </div>
                            <div class="h-96 relative overflow-hidden rounded-2xl bg-gradient-to-br from-white/5 to-white/10">
                                <div class="w-full h-full flex items-center justify-center landing-fade-in">
                                    {match showcase.kind {
                                        AnimationKind::FloatingElements => view! { <FloatingElements/> }.into_any(),
                                        AnimationKind::MorphingShapes => view! { <MorphingShapes/> }.into_any(),
                                        AnimationKind::ParticleSystem => view! { <ParticleSystem/> }.into_any(),
                                    }}
                                </div>
                            </div>
                        }
                    }}
                </div>

                <div class="grid md:grid-cols-3 gap-8 mt-16">
                    {SHOWCASE_HIGHLIGHTS.iter().map(|&(icon, title, description)| view! {
                        <div class="bg-white/5 backdrop-blur-md rounded-2xl p-6 border border-white/10 hover:-translate-y-1 transition-transform">
                            <div class="text-purple-400 mb-4">
                                <Icon name=icon class="w-8 h-8"/>
                            </div>
                            <h3 class="text-xl font-bold text-white mb-3">{title}</h3>
                            <p class="text-gray-300">{description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </Container>
        </section>
    }
}

#[component]
fn FloatingElements() -> impl IntoView {
    view! {
        <div class="w-full h-full relative">
            {scatter_particles(FLOATING_PARTICLES, 0).into_iter().map(|p| view! {
                <div
                    class="absolute w-2 h-2 bg-gradient-to-r from-purple-400 to-pink-400 rounded-full landing-wander hover:scale-200"
                    style:left=format!("{:.2}%", p.left)
                    style:top=format!("{:.2}%", p.top)
                    style:animation-duration=format!("{:.2}s", p.duration)
                    style:animation-delay=format!("{:.2}s", p.delay)
                ></div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn MorphingShapes() -> impl IntoView {
    let shape = RwSignal::new(Carousel::new(SHAPE_CLASSES.len()));

    use_auto_advance(
        Signal::derive(|| true),
        Signal::derive(|| Duration::from_millis(SHAPE_INTERVAL_MS)),
        Callback::new(move |_| shape.update(Carousel::next)),
    );

    view! {
        <div class="w-full h-full flex items-center justify-center">
            <div class=move || format!(
                "w-32 h-32 bg-gradient-to-r from-cyan-400 to-blue-400 transition-all duration-700 landing-morph {}",
                SHAPE_CLASSES[shape.with(|s| s.index())]
            )></div>
        </div>
    }
}

#[component]
fn ParticleSystem() -> impl IntoView {
    view! {
        <div class="w-full h-full relative">
            {scatter_particles(SYSTEM_PARTICLES, 97).into_iter().enumerate().map(|(i, p)| view! {
                <div
                    class="absolute w-1 h-1 bg-gradient-to-r from-cyan-400 to-blue-400 rounded-full landing-twinkle"
                    style:left=format!("{:.2}%", p.left)
                    style:top=format!("{:.2}%", p.top)
                    style:animation-delay=format!("{:.1}s", i as f64 * 0.1)
                ></div>
            }).collect_view()}
        </div>
    }
}
