use leptos::prelude::*;

use crate::core::newsletter::validate_email;
use crate::ui::common::FormField;
use crate::ui::icon::{Icon, icons};

/// How long the confirmation stays visible
#[cfg_attr(feature = "ssr", allow(dead_code))]
const CONFIRMATION_MS: u32 = 4_000;

/// Email signup form. Validates locally and never submits anywhere.
#[component]
pub fn Newsletter(
    /// Dark styling for the footer; the blog banner uses the light one
    #[prop(default = false)]
    dark: bool,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (confirmed, set_confirmed) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_email(&email.get_untracked()) {
            Ok(address) => {
                leptos::logging::log!("newsletter signup accepted for {}", address);
                set_error.set(None);
                set_email.set(String::new());
                set_confirmed.set(Some(address));

                #[cfg(not(feature = "ssr"))]
                {
                    use gloo_timers::future::TimeoutFuture;
                    use wasm_bindgen_futures::spawn_local;

                    spawn_local(async move {
                        TimeoutFuture::new(CONFIRMATION_MS).await;
                        set_confirmed.set(None);
                    });
                }
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    let input_class = if dark {
        "w-full px-4 py-3 bg-gray-800 border border-gray-700 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-purple-500"
    } else {
        "w-full px-4 py-3 rounded-lg text-gray-900 placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-white/50"
    };
    let button_class = if dark {
        "px-6 py-3 bg-gradient-to-r from-purple-500 to-blue-500 text-white rounded-lg font-semibold hover:shadow-lg hover:shadow-purple-500/25 transition-all duration-300"
    } else {
        "bg-white text-purple-600 px-6 py-3 rounded-lg font-semibold hover:bg-gray-100 transition-colors"
    };

    view! {
        <form class="w-full" on:submit=on_submit novalidate=true>
            <div class="flex flex-col sm:flex-row gap-2 items-start">
                <FormField
                    input_type="email"
                    placeholder="Enter your email"
                    value=email.into()
                    on_input=Callback::new(move |v: String| {
                        set_email.set(v);
                        set_error.set(None);
                    })
                    error=error.into()
                    input_class=input_class
                />
                <button type="submit" class=button_class aria-label="Subscribe">
                    {if dark {
                        view! { <Icon name=icons::SEND class="w-5 h-5"/> }.into_any()
                    } else {
                        view! { <span>"Subscribe"</span> }.into_any()
                    }}
                </button>
            </div>
            {move || confirmed.get().map(|address| view! {
                <div class="mt-3 flex items-center gap-2 text-sm landing-fade-in" role="status">
                    <Icon name=icons::CHECK_CIRCLE class="w-4 h-4 text-green-400"/>
                    <span>{format!("Thanks! {} is on the list.", address)}</span>
                </div>
            })}
        </form>
    }
}
