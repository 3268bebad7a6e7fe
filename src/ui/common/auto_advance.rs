use leptos::prelude::*;
use std::time::Duration;

/// Runs `on_tick` every `period` while `active` is true.
///
/// The interval is re-armed whenever `active` or `period` changes and cleared
/// when the owning component unmounts. Nothing runs during server rendering.
pub fn use_auto_advance(active: Signal<bool>, period: Signal<Duration>, on_tick: Callback<()>) {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::logging::warn;

        let handle: StoredValue<Option<IntervalHandle>> = StoredValue::new(None);

        let stop = move || {
            if let Some(h) = handle.get_value() {
                h.clear();
            }
            handle.set_value(None);
        };

        Effect::new(move |_| {
            let running = active.get();
            let every = period.get();
            stop();

            if running {
                match set_interval_with_handle(move || on_tick.run(()), every) {
                    Ok(h) => handle.set_value(Some(h)),
                    Err(err) => warn!("could not start timer: {:?}", err),
                }
            }
        });

        on_cleanup(stop);
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (active, period, on_tick);
    }
}
