use leptos::prelude::*;

use crate::core::content::FEATURES;
use crate::ui::common::{Card, Container, SectionHeading};
use crate::ui::icon::Icon;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="relative py-20 bg-gradient-to-b from-gray-50 to-white">
            <Container>
                <SectionHeading
                    title="Powerful Features for"
                    highlight="Modern Marketing"
                    subtitle="Everything you need to create, manage, and optimize your marketing campaigns with AI-powered intelligence."
                />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES.iter().map(|feature| view! {
                        <div class="group landing-scroll-animate">
                            <Card class=String::from("p-8 h-full")>
                                <div class=format!(
                                    "w-16 h-16 bg-gradient-to-r {} rounded-2xl flex items-center justify-center mb-6 group-hover:scale-110 transition-transform duration-300",
                                    feature.accent
                                )>
                                    <Icon name=feature.icon class="w-8 h-8 text-white"/>
                                </div>
                                <h3 class="text-xl font-semibold text-gray-900 mb-4">{feature.title}</h3>
                                <p class="text-gray-600 leading-relaxed">{feature.description}</p>
                            </Card>
                        </div>
                    }).collect_view()}
                </div>
            </Container>

            <div class="absolute inset-0 pointer-events-none -z-10" aria-hidden="true">
                <div class="absolute top-20 right-20 w-64 h-64 bg-purple-500/10 rounded-full blur-3xl landing-pulse-soft"></div>
                <div class="absolute bottom-20 left-20 w-80 h-80 bg-blue-500/10 rounded-full blur-3xl landing-pulse-soft"></div>
            </div>
        </section>
    }
}
