use crate::core::SliderBounds;
use crate::ui::icon::{Icon, icons};
use leptos::logging::warn;
use leptos::prelude::*;

/// Parses raw slider input and clamps it into `bounds`.
///
/// Returns `None` when the input is not a whole number.
pub fn parse_slider_value(raw: &str, bounds: SliderBounds) -> Option<u32> {
    raw.trim().parse::<u32>().ok().map(|value| bounds.clamp(value))
}

/// Text input with label and inline error
#[component]
pub fn FormField(
    /// Visually hidden when empty; the placeholder then labels the field
    #[prop(default = "")]
    label: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
    /// Classes for the input element
    #[prop(default = "w-full px-4 py-3 rounded-xl border border-gray-300 bg-white text-gray-900 focus:outline-none focus:ring-2 focus:ring-purple-500")]
    input_class: &'static str,
) -> impl IntoView {
    let has_error = move || error.as_ref().and_then(|e| e.get()).is_some();

    view! {
        <div class="space-y-1.5 w-full">
            <label class=if label.is_empty() { "sr-only" } else { "block text-sm font-medium text-gray-700" }>
                {if label.is_empty() { placeholder } else { label }}
            </label>
            <input
                type=input_type
                class=input_class
                class=("border-red-500", has_error)
                placeholder=placeholder
                aria-invalid=move || has_error().to_string()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || {
                error.as_ref().and_then(|e| e.get()).map(|err| view! {
                    <div class="flex items-center gap-1 text-sm text-red-500">
                        <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// Range slider with its label and current value
#[component]
pub fn RangeField(
    label: &'static str,
    /// Current value signal
    value: Signal<u32>,
    /// Slider limits; stored values never leave them
    bounds: SliderBounds,
    /// Formats the value shown next to the label
    #[prop(default = Callback::new(|v: u32| v.to_string()))]
    display: Callback<u32, String>,
    /// Receives the clamped value
    on_input: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <div class="flex items-center justify-between">
                <label class="text-sm font-medium text-gray-700">{label}</label>
                <span class="text-sm font-semibold text-purple-600">
                    {move || display.run(value.get())}
                </span>
            </div>
            <input
                type="range"
                class="w-full h-2 bg-gray-200 rounded-lg appearance-none cursor-pointer accent-purple-600"
                min=bounds.min.to_string()
                max=bounds.max.to_string()
                step=bounds.step.to_string()
                aria-label=label
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    match parse_slider_value(&raw, bounds) {
                        Some(v) => on_input.run(v),
                        None => warn!("ignoring slider input {:?} for {}", raw, label),
                    }
                }
            />
            <div class="flex justify-between text-xs text-gray-400">
                <span>{display.run(bounds.min)}</span>
                <span>{display.run(bounds.max)}</span>
            </div>
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    label: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label class="block text-sm font-medium text-gray-700">{label}</label>
            <select
                class="w-full px-4 py-3 rounded-xl border border-gray-300 bg-white text-gray-900 focus:outline-none focus:ring-2 focus:ring-purple-500"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options.into_iter().map(|(val, text)| {
                    view! {
                        <option value=val.clone()>{text}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slider_value_clamps() {
        let bounds = SliderBounds::CONTACTS;
        assert_eq!(parse_slider_value("2500", bounds), Some(2_500));
        assert_eq!(parse_slider_value(" 20 ", bounds), Some(100));
        assert_eq!(parse_slider_value("900000", bounds), Some(50_000));
    }

    #[test]
    fn test_parse_slider_value_ignores_garbage() {
        let bounds = SliderBounds::CAMPAIGNS_PER_MONTH;
        assert_eq!(parse_slider_value("", bounds), None);
        assert_eq!(parse_slider_value("ten", bounds), None);
        assert_eq!(parse_slider_value("-3", bounds), None);
    }
}
