//! Simulated product walkthrough with playback controls
//!
//! There is no real video: each step renders a small mock screen, and while
//! playing the step advances after that step's own duration.

use leptos::prelude::*;
use std::time::Duration;

use crate::core::content::{DEMO_STEPS, DemoScene, PRODUCT_NAME};
use crate::core::state::DemoPlayback;
use crate::ui::common::{Container, SectionHeading, use_auto_advance};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn DemoSection() -> impl IntoView {
    view! {
        <section id="demo" class="py-20 bg-white">
            <Container max_width="max-w-5xl">
                <SectionHeading
                    title="See It in"
                    highlight="Action"
                    subtitle="Take a quick tour through the dashboard, AI analytics, campaign builder and performance tracking."
                />
                <DemoVideo/>
            </Container>
        </section>
    }
}

#[component]
pub fn DemoVideo() -> impl IntoView {
    let playback = RwSignal::new(DemoPlayback::new(DEMO_STEPS.len()));
    let step = Memo::new(move |_| playback.with(|p| p.step()));
    let current = move || DEMO_STEPS[step.get()];

    use_auto_advance(
        Signal::derive(move || playback.with(|p| p.playing)),
        Signal::derive(move || Duration::from_millis(DEMO_STEPS[step.get()].duration_ms)),
        Callback::new(move |_| playback.update(DemoPlayback::advance)),
    );

    let playing = move || playback.with(|p| p.playing);

    view! {
        <div class="bg-white rounded-2xl shadow-xl border border-gray-100 overflow-hidden landing-scroll-animate">
            // Window chrome
            <div class="bg-gradient-to-r from-gray-900 to-gray-800 text-white p-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center space-x-3" aria-hidden="true">
                        <div class="w-3 h-3 bg-red-500 rounded-full"></div>
                        <div class="w-3 h-3 bg-yellow-500 rounded-full"></div>
                        <div class="w-3 h-3 bg-green-500 rounded-full"></div>
                    </div>
                    <div class="text-sm font-medium">{format!("{} Demo", PRODUCT_NAME)}</div>
                    <div class="flex items-center space-x-2">
                        <button
                            class="p-1 hover:bg-gray-700 rounded"
                            on:click=move |_| playback.update(DemoPlayback::toggle_mute)
                            aria-label=move || if playback.with(|p| p.muted) { "Unmute" } else { "Mute" }
                        >
                            {move || {
                                let name = if playback.with(|p| p.muted) { icons::VOLUME_OFF } else { icons::VOLUME };
                                view! { <Icon name=name class="w-4 h-4"/> }
                            }}
                        </button>
                        <button
                            class="p-1 hover:bg-gray-700 rounded"
                            on:click=move |_| playback.update(DemoPlayback::toggle_controls)
                            aria-label="Toggle overlay controls"
                        >
                            <Icon name=icons::SETTINGS class="w-4 h-4"/>
                        </button>
                    </div>
                </div>
            </div>

            // Screen
            <div class="relative bg-gray-900 aspect-video">
                <div class="w-full h-full p-6">
                    {move || view! {
                        <div class="w-full h-full landing-fade-in">
                            <DemoScreen scene=current().scene/>
                        </div>
                    }}
                </div>

                <Show when=move || playback.with(|p| p.show_controls)>
                    <div class="absolute inset-0 bg-black/20 flex items-center justify-center">
                        <button
                            class="bg-white/90 rounded-full p-4 hover:bg-white transition-all duration-200"
                            on:click=move |_| playback.update(DemoPlayback::toggle_play)
                            aria-label=move || if playing() { "Pause demo" } else { "Play demo" }
                        >
                            {move || {
                                let name = if playing() { icons::PAUSE } else { icons::PLAY };
                                view! { <Icon name=name class="w-8 h-8"/> }
                            }}
                        </button>
                    </div>
                </Show>
            </div>

            // Controls
            <div class="p-4 bg-gray-50 space-y-4">
                <div class="space-y-2">
                    <div class="flex justify-between text-sm text-gray-600">
                        <span>{move || current().title}</span>
                        <span>{move || format!("{} / {}", step.get() + 1, DEMO_STEPS.len())}</span>
                    </div>
                    <div class="w-full bg-gray-200 rounded-full h-2">
                        <div
                            class="bg-gradient-to-r from-purple-500 to-blue-500 h-2 rounded-full transition-all duration-500"
                            style:width=move || format!("{}%", playback.with(|p| p.progress_percent()))
                        ></div>
                    </div>
                </div>

                <div class="flex items-center justify-between">
                    <div class="flex items-center space-x-2">
                        <button
                            class="flex items-center space-x-2 px-4 py-2 bg-purple-500 text-white rounded-lg hover:bg-purple-600 transition-colors"
                            on:click=move |_| playback.update(DemoPlayback::toggle_play)
                        >
                            {move || {
                                let name = if playing() { icons::PAUSE } else { icons::PLAY };
                                view! { <Icon name=name class="w-4 h-4"/> }
                            }}
                            <span class="text-sm">{move || if playing() { "Pause" } else { "Play" }}</span>
                        </button>
                        <button
                            class="flex items-center space-x-2 px-4 py-2 bg-gray-200 text-gray-700 rounded-lg hover:bg-gray-300 transition-colors"
                            on:click=move |_| playback.update(DemoPlayback::reset)
                        >
                            <Icon name=icons::RESET class="w-4 h-4"/>
                            <span class="text-sm">"Reset"</span>
                        </button>
                    </div>

                    <div class="flex space-x-1">
                        {(0..DEMO_STEPS.len()).map(|index| view! {
                            <button
                                class="w-2 h-2 rounded-full transition-colors"
                                class=("bg-purple-500", move || step.get() == index)
                                class=("bg-gray-300", move || step.get() != index)
                                on:click=move |_| {
                                    playback.update(|p| {
                                        p.go_to(index);
                                    })
                                }
                                aria-label=DEMO_STEPS[index].title
                            ></button>
                        }).collect_view()}
                    </div>
                </div>

                <p class="text-center text-sm text-gray-600">{move || current().description}</p>
            </div>
        </div>
    }
}

#[component]
fn DemoScreen(scene: DemoScene) -> impl IntoView {
    match scene {
        DemoScene::Dashboard => view! {
            <div class="bg-gradient-to-br from-blue-50 to-purple-50 rounded-lg p-4 h-full">
                <div class="grid grid-cols-3 gap-3 mb-4">
                    {[("247%", "ROI Increase", "text-blue-600"), ("89%", "Engagement", "text-green-600"), ("156%", "Conversions", "text-purple-600")]
                        .into_iter()
                        .map(|(value, label, color)| view! {
                            <div class="bg-white rounded-lg p-3 shadow-sm landing-pulse-soft">
                                <div class=format!("text-2xl font-bold {}", color)>{value}</div>
                                <div class="text-xs text-gray-500">{label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="bg-white rounded-lg p-3">
                    <div class="h-20 bg-gradient-to-r from-blue-200 to-purple-200 rounded flex items-center justify-center">
                        <div class="text-blue-600 font-semibold">"Live Campaign Data"</div>
                    </div>
                </div>
            </div>
        }
        .into_any(),
        DemoScene::Analytics => view! {
            <div class="bg-gradient-to-br from-green-50 to-blue-50 rounded-lg p-4 h-full space-y-3">
                {[("AI Analysis", "75%", "from-green-400 to-blue-400"), ("Pattern Recognition", "90%", "from-blue-400 to-purple-400")]
                    .into_iter()
                    .map(|(label, width, bar)| view! {
                        <div class="bg-white rounded-lg p-3">
                            <div class="flex items-center justify-between mb-2">
                                <span class="text-sm font-medium">{label}</span>
                                <div class="w-2 h-2 bg-green-500 rounded-full animate-pulse"></div>
                            </div>
                            <div class="h-2 bg-gray-200 rounded-full overflow-hidden">
                                <div class=format!("h-full bg-gradient-to-r {} landing-grow", bar) style:width=width></div>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        DemoScene::Campaign => view! {
            <div class="bg-gradient-to-br from-purple-50 to-pink-50 rounded-lg p-4 h-full space-y-3">
                <div class="bg-white rounded-lg p-3 border-2 border-dashed border-purple-300">
                    <div class="text-sm font-medium text-purple-700 mb-2">"Campaign Builder"</div>
                    <div class="grid grid-cols-2 gap-2">
                        <div class="bg-purple-100 rounded p-2 text-xs">"Email Template"</div>
                        <div class="bg-pink-100 rounded p-2 text-xs">"Audience"</div>
                    </div>
                </div>
                <div class="bg-white rounded-lg p-3 landing-float">
                    <div class="text-sm font-medium text-gray-700 mb-2">"Preview"</div>
                    <div class="h-16 bg-gradient-to-r from-purple-200 to-pink-200 rounded flex items-center justify-center">
                        <span class="text-xs text-purple-700">"Campaign Preview"</span>
                    </div>
                </div>
            </div>
        }
        .into_any(),
        DemoScene::Performance => view! {
            <div class="bg-gradient-to-br from-orange-50 to-red-50 rounded-lg p-4 h-full space-y-3">
                <div class="bg-white rounded-lg p-3">
                    <div class="text-sm font-medium text-gray-700 mb-2">"Real-time Metrics"</div>
                    <div class="space-y-2">
                        {[("Open Rate", "24.5%", "text-green-600"), ("Click Rate", "8.2%", "text-blue-600"), ("Conversion", "3.1%", "text-purple-600")]
                            .into_iter()
                            .map(|(label, value, color)| view! {
                                <div class="flex justify-between items-center landing-blink">
                                    <span class="text-xs">{label}</span>
                                    <span class=format!("text-xs font-medium {}", color)>{value}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="bg-white rounded-lg p-3">
                    <div class="text-sm font-medium text-gray-700 mb-2">"Revenue Impact"</div>
                    <div class="text-lg font-bold text-green-600">"+$12,450"</div>
                    <div class="text-xs text-gray-500">"This month"</div>
                </div>
            </div>
        }
        .into_any(),
    }
}
