use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
    Ghost,
}

/// Button size options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-gradient-to-r from-purple-600 to-blue-600 text-white shadow-lg hover:shadow-xl hover:from-purple-700 hover:to-blue-700"
            }
            ButtonVariant::Secondary => {
                "bg-white/10 text-white border border-white/20 backdrop-blur-sm hover:bg-white/20"
            }
            ButtonVariant::Outline => {
                "border-2 border-purple-500 text-purple-600 hover:bg-purple-500 hover:text-white"
            }
            ButtonVariant::Ghost => "text-gray-600 hover:text-gray-900 hover:bg-gray-100",
        }
    }
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "px-3 py-1.5 text-sm",
            ButtonSize::Medium => "px-5 py-2.5 text-base",
            ButtonSize::Large => "px-8 py-4 text-lg",
        }
    }
}

/// Full class list for a button, with any extra classes appended
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let base = format!(
        "inline-flex items-center justify-center gap-2 rounded-xl font-semibold transition-all duration-300 focus:outline-none focus:ring-2 focus:ring-purple-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
        variant.class(),
        size.class()
    );
    if extra.is_empty() {
        base
    } else {
        format!("{} {}", base, extra)
    }
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// HTML button type
    #[prop(default = "button")]
    button_type: &'static str,
    /// Whether button is disabled
    #[prop(default = false)]
    disabled: bool,
    /// Optional icon name shown before the text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Optional icon name shown after the text
    #[prop(optional)]
    icon_right: Option<&'static str>,
    /// Optional accessible label
    #[prop(optional)]
    aria_label: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
    /// Button content (text or elements)
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=button_classes(variant, size, &class)
            disabled=disabled
            aria-label=aria_label
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {icon.map(|name| view! { <Icon name=name class="w-5 h-5"/> })}
            {children()}
            {icon_right.map(|name| view! { <Icon name=name class="w-5 h-5"/> })}
        </button>
    }
}

/// Anchor styled as a button, used for in-page links
#[component]
pub fn LinkButton(
    href: &'static str,
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    #[prop(optional)]
    icon_right: Option<&'static str>,
    #[prop(default = String::new())]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=button_classes(variant, size, &class)>
            {children()}
            {icon_right.map(|name| view! { <Icon name=name class="w-5 h-5"/> })}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes_append_extra() {
        let classes = button_classes(ButtonVariant::Outline, ButtonSize::Large, "w-full");
        assert!(classes.contains("border-purple-500"));
        assert!(classes.contains("px-8 py-4"));
        assert!(classes.ends_with(" w-full"));
    }

    #[test]
    fn test_button_classes_without_extra() {
        let classes = button_classes(ButtonVariant::Ghost, ButtonSize::Small, "");
        assert!(classes.ends_with(ButtonSize::Small.class()));
    }
}
