//! Fixed navigation bar with in-page anchor links and a mobile menu

use leptos::prelude::*;

use crate::core::content::{BRAND_NAME, nav_sections};
use crate::ui::common::{ButtonSize, LinkButton};
use crate::ui::icon::{Icon, icons};

/// Brand mark: gradient tile with the brain icon
#[component]
pub fn Logo(#[prop(default = "w-8 h-8")] size: &'static str) -> impl IntoView {
    view! {
        <div class=format!("{} bg-gradient-to-r from-purple-500 to-pink-500 rounded-lg flex items-center justify-center", size)>
            <Icon name=icons::BRAIN class="w-5 h-5 text-white"/>
        </div>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-white/80 backdrop-blur-md border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-6">
                <div class="flex items-center justify-between h-16">
                    <a href="#hero" class="flex items-center space-x-2">
                        <Logo/>
                        <span class="text-xl font-bold text-gray-900">{BRAND_NAME}</span>
                    </a>

                    // Desktop menu
                    <div class="hidden md:flex items-center space-x-8">
                        {nav_sections().map(|section| view! {
                            <a href=section.href() class="text-gray-600 hover:text-purple-500 transition-colors">
                                {section.label}
                            </a>
                        }).collect_view()}
                        <LinkButton href="#pricing" size=ButtonSize::Medium>
                            "Get Started"
                        </LinkButton>
                    </div>

                    <button
                        class="md:hidden p-2"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6"/> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6"/> }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <Show when=move || mobile_menu_open.get()>
                    <div class="md:hidden absolute top-full left-0 right-0 bg-white/95 backdrop-blur-md border-b border-gray-200">
                        <div class="px-6 py-4 space-y-4">
                            {nav_sections().map(|section| view! {
                                <a
                                    href=section.href()
                                    class="block text-gray-600 hover:text-purple-500 transition-colors"
                                    on:click=move |_| set_mobile_menu_open.set(false)
                                >
                                    {section.label}
                                </a>
                            }).collect_view()}
                            <LinkButton href="#pricing" class=String::from("w-full")>
                                "Get Started"
                            </LinkButton>
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
