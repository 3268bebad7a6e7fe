use leptos::prelude::*;

/// Outline icon drawn inline on a 24x24 grid
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
    /// Fill the shape with the current color instead of stroking it
    #[prop(default = false)]
    filled: bool,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill=if filled { "currentColor" } else { "none" }
            stroke="currentColor"
            aria-hidden="true"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d=icon_path(name)
            />
        </svg>
    }
}

/// Path data for a named icon. Unknown names draw a lightning bolt.
pub fn icon_path(name: &str) -> &'static str {
    match name {
        icons::ALERT_CIRCLE => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::ARROW_RIGHT => "M17 8l4 4m0 0l-4 4m4-4H3",
        icons::BAR_CHART => {
            "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z"
        }
        icons::BOOK_OPEN => {
            "M12 6.253v13m0-13C10.832 5.477 9.246 5 7.5 5S4.168 5.477 3 6.253v13C4.168 18.477 5.754 18 7.5 18s3.332.477 4.5 1.253m0-13C13.168 5.477 14.754 5 16.5 5c1.747 0 3.332.477 4.5 1.253v13C19.832 18.477 18.247 18 16.5 18c-1.746 0-3.332.477-4.5 1.253"
        }
        icons::BRAIN => {
            "M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z"
        }
        icons::CALCULATOR => {
            "M9 7h6m0 10v-3m-3 3h.01M9 17h.01M9 14h.01M12 14h.01M15 11h.01M12 11h.01M9 11h.01M7 21h10a2 2 0 002-2V5a2 2 0 00-2-2H7a2 2 0 00-2 2v14a2 2 0 002 2z"
        }
        icons::CALENDAR => {
            "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z"
        }
        icons::CHECK => "M5 13l4 4L19 7",
        icons::CHECK_CIRCLE => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::CHEVRON_DOWN => "M19 9l-7 7-7-7",
        icons::CHEVRON_LEFT => "M15 19l-7-7 7-7",
        icons::CHEVRON_RIGHT => "M9 5l7 7-7 7",
        icons::CLOCK => "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::FILE_TEXT => {
            "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z"
        }
        icons::HEART => {
            "M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z"
        }
        icons::HEADPHONES => {
            "M18.364 5.636l-3.536 3.536m0 5.656l3.536 3.536M9.172 9.172L5.636 5.636m3.536 9.192l-3.536 3.536M21 12a9 9 0 11-18 0 9 9 0 0118 0zm-5 0a4 4 0 11-8 0 4 4 0 018 0z"
        }
        icons::HOME => {
            "M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6"
        }
        icons::MAIL => {
            "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"
        }
        icons::MAP_PIN => {
            "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0zM15 11a3 3 0 11-6 0 3 3 0 016 0z"
        }
        icons::MENU => "M4 6h16M4 12h16M4 18h16",
        icons::PAUSE => "M10 9v6m4-6v6m7-3a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::PHONE => {
            "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z"
        }
        icons::PLAY => {
            "M14.752 11.168l-3.197-2.132A1 1 0 0010 9.87v4.263a1 1 0 001.555.832l3.197-2.132a1 1 0 000-1.664zM21 12a9 9 0 11-18 0 9 9 0 0118 0z"
        }
        icons::RESET => {
            "M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15"
        }
        icons::SEND => "M12 19l9 2-9-18-9 18 9-2zm0 0v-8",
        icons::SETTINGS => {
            "M10.325 4.317c.426-1.756 2.924-1.756 3.35 0a1.724 1.724 0 002.573 1.066c1.543-.94 3.31.826 2.37 2.37a1.724 1.724 0 001.065 2.572c1.756.426 1.756 2.924 0 3.35a1.724 1.724 0 00-1.066 2.573c.94 1.543-.826 3.31-2.37 2.37a1.724 1.724 0 00-2.572 1.065c-.426 1.756-2.924 1.756-3.35 0a1.724 1.724 0 00-2.573-1.066c-1.543.94-3.31-.826-2.37-2.37a1.724 1.724 0 00-1.065-2.572c-1.756-.426-1.756-2.924 0-3.35a1.724 1.724 0 001.066-2.573c-.94-1.543.826-3.31 2.37-2.37.996.608 2.296.07 2.572-1.065zM15 12a3 3 0 11-6 0 3 3 0 016 0z"
        }
        icons::SHIELD => {
            "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z"
        }
        icons::SPARKLES => {
            "M5 3v4M3 5h4M6 17v4m-2-2h4m5-16l2.286 6.857L21 12l-5.714 2.143L13 21l-2.286-6.857L5 12l5.714-2.143L13 3z"
        }
        icons::STAR => {
            "M11.049 2.927c.3-.921 1.603-.921 1.902 0l1.519 4.674a1 1 0 00.95.69h4.915c.969 0 1.371 1.24.588 1.81l-3.976 2.888a1 1 0 00-.363 1.118l1.518 4.674c.3.922-.755 1.688-1.538 1.118l-3.976-2.888a1 1 0 00-1.176 0l-3.976 2.888c-.783.57-1.838-.197-1.538-1.118l1.518-4.674a1 1 0 00-.363-1.118l-3.976-2.888c-.784-.57-.38-1.81.588-1.81h4.914a1 1 0 00.951-.69l1.519-4.674z"
        }
        icons::TARGET => {
            "M15 15l-2 5L9 9l11 4-5 2zm0 0l5 5M7.188 2.239l.777 2.897M5.136 7.965l-2.898-.777M13.95 4.05l-2.122 2.122m-5.657 5.656l-2.12 2.122"
        }
        icons::TRENDING_UP => "M13 7h8m0 0v8m0-8l-8 8-4-4-6 6",
        icons::USER => "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z",
        icons::USERS => {
            "M12 4.354a4 4 0 110 5.292M15 21H3v-1a6 6 0 0112 0v1zm0 0h6v-1a6 6 0 00-9-5.197M13 7a4 4 0 11-8 0 4 4 0 018 0z"
        }
        icons::VIDEO => {
            "M15 10l4.553-2.276A1 1 0 0121 8.618v6.764a1 1 0 01-1.447.894L15 14M5 18h8a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v8a2 2 0 002 2z"
        }
        icons::VOLUME => {
            "M15.536 8.464a5 5 0 010 7.072m2.828-9.9a9 9 0 010 12.728M5.586 15H4a1 1 0 01-1-1v-4a1 1 0 011-1h1.586l4.707-4.707C10.923 3.663 12 4.109 12 5v14c0 .891-1.077 1.337-1.707.707L5.586 15z"
        }
        icons::VOLUME_OFF => {
            "M5.586 15H4a1 1 0 01-1-1v-4a1 1 0 011-1h1.586l4.707-4.707C10.923 3.663 12 4.109 12 5v14c0 .891-1.077 1.337-1.707.707L5.586 15zM17 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2"
        }
        icons::X => "M6 18L18 6M6 6l12 12",
        _ => icons::FALLBACK_PATH,
    }
}

/// Predefined icon names
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const BAR_CHART: &str = "bar-chart";
    pub const BOOK_OPEN: &str = "book-open";
    pub const BRAIN: &str = "brain";
    pub const CALCULATOR: &str = "calculator";
    pub const CALENDAR: &str = "calendar";
    pub const CHECK: &str = "check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CLOCK: &str = "clock";
    pub const FILE_TEXT: &str = "file-text";
    pub const HEADPHONES: &str = "headphones";
    pub const HEART: &str = "heart";
    pub const HOME: &str = "home";
    pub const MAIL: &str = "mail";
    pub const MAP_PIN: &str = "map-pin";
    pub const MENU: &str = "menu";
    pub const PAUSE: &str = "pause";
    pub const PHONE: &str = "phone";
    pub const PLAY: &str = "play";
    pub const RESET: &str = "reset";
    pub const SEND: &str = "send";
    pub const SETTINGS: &str = "settings";
    pub const SHIELD: &str = "shield";
    pub const SPARKLES: &str = "sparkles";
    pub const STAR: &str = "star";
    pub const TARGET: &str = "target";
    pub const TRENDING_UP: &str = "trending-up";
    pub const USER: &str = "user";
    pub const USERS: &str = "users";
    pub const VIDEO: &str = "video";
    pub const VOLUME: &str = "volume";
    pub const VOLUME_OFF: &str = "volume-off";
    pub const X: &str = "x";
    pub const ZAP: &str = "zap";

    pub(super) const FALLBACK_PATH: &str = "M13 10V3L4 14h7v7l9-11h-7z";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::blog::BlogCategory;
    use crate::core::content::{CONTACT_DETAILS, FEATURES, HERO_STATS, MODAL_HIGHLIGHTS, SHOWCASE_HIGHLIGHTS};

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(icon_path("no-such-icon"), icons::FALLBACK_PATH);
        assert_eq!(icon_path(icons::ZAP), icons::FALLBACK_PATH);
    }

    #[test]
    fn test_content_icons_are_drawn() {
        let names = FEATURES
            .iter()
            .map(|f| f.icon)
            .chain(HERO_STATS.iter().map(|s| s.icon))
            .chain(CONTACT_DETAILS.iter().map(|c| c.icon))
            .chain(MODAL_HIGHLIGHTS.iter().map(|h| h.0))
            .chain(SHOWCASE_HIGHLIGHTS.iter().map(|h| h.0))
            .chain(BlogCategory::ALL.iter().map(|c| c.icon()));

        for name in names {
            if name != icons::ZAP {
                assert_ne!(icon_path(name), icons::FALLBACK_PATH, "{}", name);
            }
        }
    }
}
