use leptos::prelude::*;

use crate::core::content::{PRICING_PLANS, PricingPlan};
use crate::ui::common::{Container, SectionHeading};
use crate::ui::icon::{Icon, icons};
use crate::ui::sections::pricing_calculator::PricingCalculator;

/// Plan cards followed by the interactive calculator
#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="relative py-20 bg-gradient-to-b from-white to-gray-50">
            <Container>
                <SectionHeading
                    title="Simple, Transparent Pricing"
                    subtitle="Choose the perfect plan for your business. All plans include a 14-day free trial."
                />

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-6xl mx-auto mb-20">
                    {PRICING_PLANS.iter().map(|plan| view! { <PlanCard plan=*plan/> }).collect_view()}
                </div>

                <PricingCalculator/>
            </Container>
        </section>
    }
}

#[component]
fn PlanCard(plan: PricingPlan) -> impl IntoView {
    let border = if plan.popular {
        "border-purple-500 shadow-purple-500/25"
    } else {
        "border-gray-200"
    };

    view! {
        <div class="relative landing-scroll-animate" class=("md:-mt-4", plan.popular)>
            {plan.popular.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2 z-10">
                    <div class="bg-gradient-to-r from-purple-500 to-pink-500 text-white px-4 py-2 rounded-full text-sm font-semibold flex items-center gap-2">
                        <Icon name=icons::STAR class="w-4 h-4"/>
                        "Most Popular"
                    </div>
                </div>
            })}

            <div class=format!(
                "bg-white/80 backdrop-blur-sm border-2 rounded-2xl p-8 h-full shadow-lg hover:shadow-xl transition-all duration-300 {}",
                border
            )>
                <div class="text-center mb-8">
                    <h3 class="text-2xl font-bold text-gray-900 mb-2">{plan.name}</h3>
                    <div class="flex items-baseline justify-center mb-4">
                        <span class="text-4xl font-bold text-gray-900">{plan.price}</span>
                        <span class="text-gray-600 ml-1">{plan.period}</span>
                    </div>
                    <p class="text-gray-600">{plan.description}</p>
                </div>

                <ul class="space-y-4 mb-8">
                    {plan.features.iter().map(|feature| view! {
                        <li class="flex items-center gap-3">
                            <div class="w-5 h-5 bg-gradient-to-r from-green-500 to-emerald-500 rounded-full flex items-center justify-center flex-shrink-0">
                                <Icon name=icons::CHECK class="w-3 h-3 text-white"/>
                            </div>
                            <span class="text-gray-700">{*feature}</span>
                        </li>
                    }).collect_view()}
                </ul>

                <button class=format!(
                    "w-full py-4 px-6 rounded-xl font-semibold text-white transition-all duration-300 bg-gradient-to-r {} hover:shadow-lg",
                    plan.accent
                )>
                    {plan.cta_label()}
                </button>
            </div>
        </div>
    }
}
