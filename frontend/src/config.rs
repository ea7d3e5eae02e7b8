/// Origin of the talent platform API the collections are fetched from.
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"
}

/// Release builds are served next to the API, so requests stay same-origin.
#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""
}

/// localStorage key holding the session token written by the auth flow.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Milliseconds the hero carousel waits after the last transition.
pub const HERO_AUTOPLAY_MS: u32 = 6_000;
pub const TITLE_TYPING_MS: u32 = 60;
pub const STAGGER_DELAY_MS: u32 = 40;

/// Fraction of an element that must be visible before it animates in.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.1;

pub const SHOWCASED_TALENT_COUNT: usize = 12;
pub const UPCOMING_WORKSHOP_COUNT: usize = 2;

/// Scroll offset after which the top nav switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: i32 = 600;
