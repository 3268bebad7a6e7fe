use leptos::prelude::*;

use crate::core::content::{MODAL_HIGHLIGHTS, MODAL_STATS, PRODUCT_NAME};
use crate::ui::common::BaseModal;
use crate::ui::icon::{Icon, icons};

/// Product demo preview opened from the hero
#[component]
pub fn VideoModal(is_open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <BaseModal is_open=is_open on_close=on_close label="Product demo">
            <div class="flex items-center justify-between p-6 pr-16 bg-gradient-to-r from-purple-500 to-blue-500">
                <h2 class="text-xl font-semibold text-white">{format!("{} Demo", PRODUCT_NAME)}</h2>
            </div>

            <div class="relative w-full aspect-video bg-gradient-to-br from-gray-900 via-purple-900 to-blue-900 overflow-hidden">
                <div class="absolute inset-0" aria-hidden="true">
                    <div class="absolute top-10 left-10 w-32 h-32 bg-purple-500/20 rounded-full blur-xl landing-drift"></div>
                    <div class="absolute bottom-10 right-10 w-40 h-40 bg-blue-500/20 rounded-full blur-xl landing-drift-reverse"></div>
                </div>

                <div class="relative z-10 h-full flex items-center justify-center p-8">
                    <div class="bg-white/10 backdrop-blur-md rounded-2xl p-8 max-w-2xl w-full">
                        <div class="text-center mb-8">
                            <div class="w-16 h-16 bg-gradient-to-r from-purple-500 to-blue-500 rounded-2xl flex items-center justify-center mx-auto mb-4 landing-spin-slow">
                                <Icon name=icons::BRAIN class="w-8 h-8 text-white"/>
                            </div>
                            <h3 class="text-2xl font-bold text-white mb-2">"AI-Powered Marketing Dashboard"</h3>
                            <p class="text-gray-300">"Real-time analytics and campaign optimization"</p>
                        </div>

                        <div class="grid grid-cols-2 gap-4">
                            {MODAL_HIGHLIGHTS.iter().map(|&(icon, title, accent)| view! {
                                <div class="bg-white/10 backdrop-blur-sm rounded-xl p-4 text-center">
                                    <div class=format!("w-10 h-10 bg-gradient-to-r {} rounded-lg flex items-center justify-center mx-auto mb-2", accent)>
                                        <Icon name=icon class="w-5 h-5 text-white"/>
                                    </div>
                                    <p class="text-white font-medium text-sm">{title}</p>
                                </div>
                            }).collect_view()}
                        </div>

                        <div class="mt-6 grid grid-cols-3 gap-4 text-center">
                            {MODAL_STATS.iter().map(|&(value, label)| view! {
                                <div>
                                    <div class="text-2xl font-bold text-white">{value}</div>
                                    <div class="text-gray-300 text-sm">{label}</div>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>

            <div class="p-6 bg-gray-50">
                <p class="text-gray-600 text-center">
                    {format!("See how {} can transform your marketing strategy with AI-powered insights and automation", PRODUCT_NAME)}
                </p>
            </div>
        </BaseModal>
    }
}
