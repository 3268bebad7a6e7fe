use leptos::prelude::*;

/// Rounded white card used by the feature, pricing and blog grids
#[component]
pub fn Card(
    /// Lift the card and deepen its shadow on hover
    #[prop(default = true)]
    hover: bool,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
    children: Children,
) -> impl IntoView {
    let hover_class = if hover {
        " hover:shadow-2xl hover:-translate-y-1"
    } else {
        ""
    };

    view! {
        <div class=format!(
            "bg-white rounded-2xl shadow-lg border border-gray-100 transition-all duration-300{} {}",
            hover_class, class
        )>
            {children()}
        </div>
    }
}
