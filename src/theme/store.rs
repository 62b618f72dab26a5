//! Dual persistence (cookie + localStorage) and the document-root class.
//!
//! Everything here is best-effort: a disabled storage API, blocked cookies,
//! or a missing window degrade to `None`/no-op and the caller falls through
//! the resolution order. Browser access is gated on wasm32; native builds
//! (SSR, tests) see inert fallbacks.

use super::preference::ThemePreference;
use super::resolve::{resolve, Signals};

#[cfg(any(target_arch = "wasm32", test))]
use super::preference::{CLASS_PREFIX, PREFERENCE_KEY};

/// One year, the cookie max-age.
#[cfg(target_arch = "wasm32")]
const COOKIE_MAX_AGE_SECS: u64 = 31_536_000;

/// Re-run the full resolution order against the live browser sources.
///
/// The mounted controls call this instead of trusting whatever class the
/// pre-hydration script applied.
pub fn resolve_preference() -> ThemePreference {
    resolve(
        read_cookie().as_deref(),
        read_storage().as_deref(),
        Signals {
            os_dark: os_prefers_dark(),
            hour: local_hour(),
        },
    )
}

/// Mirror the preference to both backing stores. Fire-and-forget.
pub fn persist(preference: &ThemePreference) {
    let raw = preference.to_stored();
    write_storage(&raw);
    write_cookie(&raw);
}

/// Swap the root class: drop every `theme-*` class, then add the one for
/// this preference. The single mutation point for the invariant that exactly
/// one theme class is present.
pub fn apply_root_class(preference: &ThemePreference) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let existing = (0..classes.length()).filter_map(|i| classes.item(i));
        for class in stale_classes(existing) {
            let _ = classes.remove_1(&class);
        }
        let _ = classes.add_1(preference.root_class());
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = preference;
}

/// The classes to drop before adding the next theme class: every managed
/// `theme-*` class and nothing else. Pure so the exactly-one-class invariant
/// is testable off-browser.
#[cfg(any(target_arch = "wasm32", test))]
fn stale_classes(existing: impl Iterator<Item = String>) -> Vec<String> {
    existing.filter(|c| c.starts_with(CLASS_PREFIX)).collect()
}

fn read_cookie() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let header = web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()?
            .cookie()
            .ok()?;
        cookie_value(&header, PREFERENCE_KEY)
    }
    #[cfg(not(target_arch = "wasm32"))]
    None
}

fn write_cookie(raw: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let Some(document) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        else {
            return;
        };
        let cookie = format!(
            "{}={}; max-age={}; path=/; samesite=lax",
            PREFERENCE_KEY,
            urlencoding::encode(raw),
            COOKIE_MAX_AGE_SECS,
        );
        let _ = document.set_cookie(&cookie);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = raw;
}

fn read_storage() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(PREFERENCE_KEY)
            .ok()
            .flatten()
    }
    #[cfg(not(target_arch = "wasm32"))]
    None
}

fn write_storage(raw: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(PREFERENCE_KEY, raw);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = raw;
}

fn os_prefers_dark() -> Option<bool> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map(|media| media.matches())
    }
    #[cfg(not(target_arch = "wasm32"))]
    None
}

fn local_hour() -> u32 {
    use chrono::Timelike;
    chrono::Local::now().hour()
}

/// Pull one value out of a `document.cookie` header. Pure so the parsing is
/// testable off-browser.
#[cfg(any(target_arch = "wasm32", test))]
fn cookie_value(header: &str, key: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(key)?.strip_prefix('='))
        .and_then(|encoded| urlencoding::decode(encoded).ok())
        .map(|decoded| decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Mode, Variant};

    /// The swap `apply_root_class` performs, over a plain class list.
    fn swap_class(classes: &mut Vec<String>, preference: &ThemePreference) {
        let stale = stale_classes(classes.iter().cloned());
        classes.retain(|c| !stale.contains(c));
        classes.push(preference.root_class().to_string());
    }

    #[test]
    fn test_swap_replaces_the_previous_theme_class() {
        let mut classes = vec!["theme-day-light".to_string()];
        let pref = ThemePreference::Standard {
            mode: Mode::Night,
            variant: Variant::Dark,
        };
        swap_class(&mut classes, &pref);
        assert_eq!(classes, ["theme-night-dark"]);
    }

    #[test]
    fn test_swapping_twice_leaves_exactly_one_theme_class() {
        let mut classes = vec!["hydrated".to_string(), "theme-day-light".to_string()];
        let pref = ThemePreference::Default;
        swap_class(&mut classes, &pref);
        swap_class(&mut classes, &pref);

        let themed: Vec<&String> = classes
            .iter()
            .filter(|c| c.starts_with(CLASS_PREFIX))
            .collect();
        assert_eq!(themed, ["theme-default"]);
        // Classes outside the theme family are left alone.
        assert!(classes.contains(&"hydrated".to_string()));
    }

    #[test]
    fn test_stale_classes_only_matches_the_theme_family() {
        let existing = ["container", "theme-night-light", "theming"]
            .into_iter()
            .map(String::from);
        assert_eq!(stale_classes(existing), ["theme-night-light"]);
    }

    #[test]
    fn test_cookie_value_finds_and_decodes_the_key() {
        let header = "other=1; folio-theme=%7B%22mode%22%3A%22default%22%7D; last=x";
        assert_eq!(
            cookie_value(header, PREFERENCE_KEY).as_deref(),
            Some(r#"{"mode":"default"}"#),
        );
    }

    #[test]
    fn test_cookie_value_ignores_prefix_collisions() {
        let header = "folio-theme-old=stale; folio-theme=v";
        assert_eq!(cookie_value(header, PREFERENCE_KEY).as_deref(), Some("v"));
    }

    #[test]
    fn test_cookie_value_absent_key() {
        assert_eq!(cookie_value("a=1; b=2", PREFERENCE_KEY), None);
        assert_eq!(cookie_value("", PREFERENCE_KEY), None);
    }

    #[test]
    fn test_persisted_value_parses_back_through_cookie_encoding() {
        let pref = ThemePreference::Default;
        let encoded = urlencoding::encode(&pref.to_stored()).into_owned();
        let header = format!("{PREFERENCE_KEY}={encoded}");
        let raw = cookie_value(&header, PREFERENCE_KEY).unwrap();
        assert_eq!(ThemePreference::from_stored(&raw), Some(pref));
    }
}
