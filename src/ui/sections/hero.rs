use leptos::prelude::*;

use crate::core::content::HERO_STATS;
use crate::ui::common::{Button, ButtonSize, ButtonVariant, LinkButton};
use crate::ui::icon::{Icon, icons};
use crate::ui::sections::video_modal::VideoModal;

/// Hero section with the main headline, calls to action and stats
#[component]
pub fn Hero() -> impl IntoView {
    let video_open = RwSignal::new(false);

    view! {
        <section id="hero" class="relative min-h-screen flex items-center justify-center overflow-hidden">
            // Background
            <div class="absolute inset-0 bg-gradient-to-br from-purple-900 via-blue-900 to-purple-800">
                <div class="absolute inset-0 bg-black/20"></div>
            </div>
            <div class="absolute inset-0" aria-hidden="true">
                <div class="absolute top-20 left-10 w-72 h-72 bg-purple-500/20 rounded-full blur-3xl landing-drift"></div>
                <div class="absolute bottom-20 right-10 w-96 h-96 bg-blue-500/20 rounded-full blur-3xl landing-drift-reverse"></div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-6 text-center">
                <div class="mb-8">
                    <h1 class="text-5xl md:text-7xl font-bold text-white mb-6 landing-fade-in-up">
                        "Transform Your "
                        <span class="bg-gradient-to-r from-purple-400 to-blue-400 bg-clip-text text-transparent">
                            "Marketing"
                        </span>
                        " with AI"
                    </h1>
                    <p class="text-xl md:text-2xl text-gray-300 mb-8 max-w-3xl mx-auto landing-fade-in-up landing-delay-200">
                        "Revolutionize your brand's digital presence with AI-powered marketing tools that deliver results."
                    </p>
                </div>

                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12 landing-fade-in-up landing-delay-400">
                    <LinkButton href="#pricing" size=ButtonSize::Large icon_right=icons::ARROW_RIGHT>
                        "Start Free Trial"
                    </LinkButton>
                    <Button
                        variant=ButtonVariant::Secondary
                        size=ButtonSize::Large
                        icon=icons::PLAY
                        on_click=Callback::new(move |_| video_open.set(true))
                    >
                        "Watch Demo"
                    </Button>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-4xl mx-auto landing-fade-in-up landing-delay-600">
                    {HERO_STATS.iter().map(|stat| view! {
                        <div class="text-center">
                            <div class="flex items-center justify-center mb-2">
                                <Icon name=stat.icon class="w-6 h-6 text-purple-400 mr-2"/>
                                <span class="text-3xl font-bold text-white">{stat.value}</span>
                            </div>
                            <p class="text-gray-300">{stat.label}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>

            <VideoModal
                is_open=video_open.into()
                on_close=Callback::new(move |_| video_open.set(false))
            />
        </section>
    }
}
