//! Preference resolution: cookie, then storage, then a derived guess.
//!
//! The inline script in `app::components::theme` implements the same order in
//! JavaScript so the pre-paint class and the mounted controller agree.

use super::preference::{Mode, ThemePreference, Variant};

/// Local hours treated as daytime, half-open.
const DAY_HOURS: std::ops::Range<u32> = 6..19;

/// Ambient signals consulted only when no record is stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Signals {
    /// `prefers-color-scheme: dark`, `None` when the query is unavailable.
    pub os_dark: Option<bool>,
    /// Local wall-clock hour, 0..24.
    pub hour: u32,
}

/// Day/night bucket for a local hour.
pub fn hour_bucket(hour: u32) -> Mode {
    if DAY_HOURS.contains(&hour) {
        Mode::Day
    } else {
        Mode::Night
    }
}

/// Resolve a preference from raw stored values and ambient signals.
///
/// First parseable record wins; malformed or missing values fall through.
/// With nothing stored the guess is derived from the OS color scheme (light
/// when unknown) and the local hour.
pub fn resolve(cookie: Option<&str>, storage: Option<&str>, signals: Signals) -> ThemePreference {
    cookie
        .and_then(ThemePreference::from_stored)
        .or_else(|| storage.and_then(ThemePreference::from_stored))
        .unwrap_or_else(|| derive(signals))
}

fn derive(signals: Signals) -> ThemePreference {
    let variant = if signals.os_dark.unwrap_or(false) {
        Variant::Dark
    } else {
        Variant::Light
    };
    ThemePreference::Standard {
        mode: hour_bucket(signals.hour),
        variant,
    }
}
