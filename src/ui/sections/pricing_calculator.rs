//! Interactive price estimate driven by the usage sliders

use leptos::logging::warn;
use leptos::prelude::*;
use std::str::FromStr;

use crate::core::{
    AnalyticsDepth, AutomationLevel, SliderBounds, UsageMetrics, estimate, format_compact,
};
use crate::ui::common::{Card, RangeField, SelectField};
use crate::ui::icon::{Icon, icons};

/// `(value, label)` pairs for a select built from an option enum
fn select_options<T: std::fmt::Display>(all: &[T], id: impl Fn(&T) -> &'static str) -> Vec<(String, String)> {
    all.iter()
        .map(|option| (id(option).to_string(), option.to_string()))
        .collect()
}

/// Parses a select value, logging and returning `None` on unknown input
fn parse_option<T>(raw: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw.parse() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("{}", err);
            None
        }
    }
}

#[component]
pub fn PricingCalculator() -> impl IntoView {
    let metrics = RwSignal::new(UsageMetrics::default());
    let quote = Memo::new(move |_| estimate(&metrics.get()));

    let compact = Callback::new(format_compact);

    view! {
        <Card hover=false class=String::from("p-8 shadow-xl max-w-5xl mx-auto landing-scroll-animate")>
            <div class="text-center mb-8">
                <div class="w-12 h-12 bg-gradient-to-r from-purple-500 to-blue-500 rounded-xl flex items-center justify-center mx-auto mb-4">
                    <Icon name=icons::CALCULATOR class="w-6 h-6 text-white"/>
                </div>
                <h3 class="text-2xl font-bold text-gray-900 mb-2">"Interactive Pricing Calculator"</h3>
                <p class="text-gray-600">"Customize your plan based on your needs"</p>
            </div>

            <div class="grid lg:grid-cols-2 gap-8">
                <div class="space-y-6">
                    <RangeField
                        label="Number of Contacts"
                        value=Signal::derive(move || metrics.with(|m| m.contacts))
                        bounds=SliderBounds::CONTACTS
                        display=compact
                        on_input=Callback::new(move |v| metrics.update(|m| m.contacts = v))
                    />
                    <RangeField
                        label="Emails per Month"
                        value=Signal::derive(move || metrics.with(|m| m.emails_per_month))
                        bounds=SliderBounds::EMAILS_PER_MONTH
                        display=compact
                        on_input=Callback::new(move |v| metrics.update(|m| m.emails_per_month = v))
                    />
                    <RangeField
                        label="Campaigns per Month"
                        value=Signal::derive(move || metrics.with(|m| m.campaigns_per_month))
                        bounds=SliderBounds::CAMPAIGNS_PER_MONTH
                        on_input=Callback::new(move |v| metrics.update(|m| m.campaigns_per_month = v))
                    />
                    <SelectField
                        label="Analytics Depth"
                        value=Signal::derive(move || metrics.with(|m| m.analytics_depth.as_str().to_string()))
                        options=select_options(&AnalyticsDepth::ALL, AnalyticsDepth::as_str)
                        on_change=Callback::new(move |raw: String| {
                            if let Some(depth) = parse_option::<AnalyticsDepth>(&raw) {
                                metrics.update(|m| m.analytics_depth = depth);
                            }
                        })
                    />
                    <SelectField
                        label="Automation Level"
                        value=Signal::derive(move || metrics.with(|m| m.automation_level.as_str().to_string()))
                        options=select_options(&AutomationLevel::ALL, AutomationLevel::as_str)
                        on_change=Callback::new(move |raw: String| {
                            if let Some(level) = parse_option::<AutomationLevel>(&raw) {
                                metrics.update(|m| m.automation_level = level);
                            }
                        })
                    />
                </div>

                <div class="bg-gradient-to-br from-purple-50 to-blue-50 rounded-xl p-6" aria-live="polite">
                    <div class="text-center mb-6">
                        <div class="text-4xl font-bold text-gray-900 mb-2">
                            {move || format!("${}", quote.with(|q| q.monthly_price))}
                            <span class="text-lg text-gray-500">"/month"</span>
                        </div>
                        <div class="text-sm text-gray-600">
                            {move || format!("Recommended Plan: {}", quote.with(|q| q.recommended_plan))}
                        </div>
                    </div>

                    <div class="space-y-3">
                        <h4 class="font-semibold text-gray-900 mb-3">"Plan Features:"</h4>
                        {move || quote.with(|q| q.features).iter().map(|feature| view! {
                            <div class="flex items-center">
                                <Icon name=icons::CHECK class="w-4 h-4 text-green-500 mr-3 flex-shrink-0"/>
                                <span class="text-sm text-gray-700">{*feature}</span>
                            </div>
                        }).collect_view()}
                    </div>

                    <button class="w-full mt-6 bg-gradient-to-r from-purple-500 to-blue-500 text-white px-6 py-3 rounded-xl font-semibold transition-all duration-300 hover:shadow-lg">
                        {move || format!("Get Started with {}", quote.with(|q| q.recommended_plan))}
                    </button>
                </div>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_options_use_ids_and_labels() {
        let options = select_options(&AutomationLevel::ALL, AutomationLevel::as_str);
        assert_eq!(
            options,
            vec![
                ("none".to_string(), "No Automation".to_string()),
                ("basic".to_string(), "Basic Automation".to_string()),
                ("advanced".to_string(), "Advanced Automation".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_option() {
        assert_eq!(parse_option::<AnalyticsDepth>("enterprise"), Some(AnalyticsDepth::Enterprise));
        assert_eq!(parse_option::<AnalyticsDepth>("deep"), None);
    }
}
