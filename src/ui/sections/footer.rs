use leptos::prelude::*;

use crate::core::content::{
    BRAND_NAME, CONTACT_DETAILS, COPYRIGHT_YEAR, FOOTER_LINK_GROUPS, PRODUCT_NAME, SOCIAL_LINKS,
};
use crate::ui::common::Container;
use crate::ui::icon::{Icon, icons};
use crate::ui::sections::nav::Logo;
use crate::ui::sections::newsletter::Newsletter;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gradient-to-b from-gray-900 to-black text-white relative overflow-hidden">
            <div class="absolute inset-0" aria-hidden="true">
                <div class="absolute top-20 left-10 w-64 h-64 bg-purple-500/10 rounded-full blur-3xl landing-pulse-soft"></div>
                <div class="absolute bottom-20 right-10 w-80 h-80 bg-blue-500/10 rounded-full blur-3xl landing-pulse-soft landing-delay-400"></div>
            </div>

            <Container class="relative z-10 py-16">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-6 gap-8">
                    <div class="lg:col-span-2 space-y-6">
                        <div>
                            <div class="flex items-center space-x-2 mb-4">
                                <Logo size="w-10 h-10"/>
                                <span class="text-2xl font-bold">{BRAND_NAME}</span>
                            </div>
                            <p class="text-gray-400 max-w-md">
                                {format!(
                                    "Transform your marketing with AI-powered insights and automation. Join thousands of businesses that trust {}.",
                                    PRODUCT_NAME
                                )}
                            </p>
                        </div>

                        <div>
                            <h3 class="text-lg font-semibold mb-4">"Stay Updated"</h3>
                            <Newsletter dark=true/>
                        </div>

                        <div>
                            <h3 class="text-lg font-semibold mb-4">"Follow Us"</h3>
                            <div class="flex gap-4">
                                {SOCIAL_LINKS.iter().map(|social| view! {
                                    <a
                                        href=social.href
                                        aria-label=social.label
                                        class="w-10 h-10 bg-gray-800 rounded-lg flex items-center justify-center font-semibold hover:bg-purple-500 hover:-translate-y-0.5 transition-all duration-300"
                                    >
                                        {social.initial().to_string()}
                                    </a>
                                }).collect_view()}
                            </div>
                        </div>
                    </div>

                    {FOOTER_LINK_GROUPS.iter().map(|group| view! {
                        <div>
                            <h3 class="text-lg font-semibold mb-4">{group.title}</h3>
                            <ul class="space-y-3">
                                {group.links.iter().map(|link| view! {
                                    <li>
                                        <a href=link.href class="text-gray-400 hover:text-white transition-colors duration-300">
                                            {link.name}
                                        </a>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>

                <div class="mt-12 pt-8 border-t border-gray-800">
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        {CONTACT_DETAILS.iter().map(|detail| view! {
                            <div class="flex items-center gap-3">
                                <div class="w-10 h-10 bg-purple-500/20 rounded-lg flex items-center justify-center text-purple-400">
                                    <Icon name=detail.icon class="w-5 h-5"/>
                                </div>
                                <span class="text-gray-400">{detail.text}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                <div class="mt-8 pt-8 border-t border-gray-800 text-center">
                    <p class="text-gray-400">
                        {format!("© {} {}. All rights reserved. Made with ", COPYRIGHT_YEAR, PRODUCT_NAME)}
                        <Icon name=icons::HEART class="inline w-4 h-4 text-red-500" filled=true/>
                        " for marketers worldwide."
                    </p>
                </div>
            </Container>
        </footer>
    }
}
