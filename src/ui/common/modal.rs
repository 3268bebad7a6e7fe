use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Marker class used to tell backdrop clicks from clicks inside the dialog
const BACKDROP_CLASS: &str = "modal-backdrop";

/// Toggles `overflow: hidden` on the document body.
#[cfg(not(feature = "ssr"))]
fn lock_body_scroll(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(err) = result {
        leptos::logging::warn!("could not update body overflow: {:?}", err);
    }
}

/// Full-screen modal with a dimmed backdrop.
///
/// Closes on Escape, on a backdrop click and on the close button. While open,
/// page scrolling is locked; the lock is released when it closes or unmounts.
#[component]
pub fn BaseModal(
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Accessible name of the dialog
    label: &'static str,
    /// Maximum width class (default: max-w-4xl)
    #[prop(default = "max-w-4xl")]
    max_width: &'static str,
    /// Modal content
    children: ChildrenFn,
) -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        Effect::new(move |_| lock_body_scroll(is_open.get()));

        on_cleanup(move || {
            drop(handle_keydown);
            lock_body_scroll(false);
        });
    }

    view! {
        <Show when=move || is_open.get()>
            <div
                class=format!("fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/80 backdrop-blur-sm {}", BACKDROP_CLASS)
                role="dialog"
                aria-modal="true"
                aria-label=label
                on:click=move |e| {
                    #[cfg(not(feature = "ssr"))]
                    {
                        let on_backdrop = e
                            .target()
                            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                            .is_some_and(|element| element.class_list().contains(BACKDROP_CLASS));
                        if on_backdrop {
                            on_close.run(());
                        }
                    }
                    #[cfg(feature = "ssr")]
                    {
                        let _ = e;
                    }
                }
            >
                <div class=format!("relative w-full {} bg-white rounded-2xl shadow-2xl overflow-hidden", max_width)>
                    <button
                        class="absolute top-4 right-4 z-10 w-10 h-10 rounded-full bg-black/50 text-white flex items-center justify-center hover:bg-black/70 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close modal"
                    >
                        <Icon name=icons::X class="w-5 h-5"/>
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
