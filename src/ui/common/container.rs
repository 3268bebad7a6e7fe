use leptos::prelude::*;

/// Centered, padded content column
#[component]
pub fn Container(
    /// Maximum width class
    #[prop(default = "max-w-7xl")]
    max_width: &'static str,
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("{} mx-auto px-4 sm:px-6 lg:px-8 {}", max_width, class)>
            {children()}
        </div>
    }
}

/// Centered heading block shared by every section
#[component]
pub fn SectionHeading(
    title: &'static str,
    /// Part of the title rendered with the brand gradient
    #[prop(optional)]
    highlight: Option<&'static str>,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16 landing-scroll-animate">
            <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-6">
                {title}
                {highlight.map(|text| view! {
                    " "
                    <span class="bg-gradient-to-r from-purple-600 to-blue-600 bg-clip-text text-transparent">
                        {text}
                    </span>
                })}
            </h2>
            <p class="text-xl text-gray-600 max-w-3xl mx-auto">{subtitle}</p>
        </div>
    }
}
