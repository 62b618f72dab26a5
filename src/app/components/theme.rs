//! Theme controls: day/night, light/dark, and default toggles.

use dioxus::prelude::*;

use crate::theme::{store, Mode, ThemeState, Variant};

/// Theme toggle group rendered in the footer.
///
/// Owns the authoritative in-memory preference. On mount it re-runs the full
/// resolution order against cookie/storage/OS instead of trusting the class
/// the pre-hydration script applied, then corrects the root class and both
/// persistence mirrors. Every toggle funnels through the same sync point.
#[component]
pub fn ThemeControls() -> Element {
    let mut state = use_signal(ThemeState::default);

    // Recompute truth on mount (client only; effects don't run during SSR).
    use_effect(move || {
        let resolved = ThemeState::from_preference(store::resolve_preference());
        store::apply_root_class(&resolved.preference());
        store::persist(&resolved.preference());
        state.set(resolved);
    });

    let mut change = move |op: fn(&mut ThemeState)| {
        let mut next = state();
        op(&mut next);
        let preference = next.preference();
        store::apply_root_class(&preference);
        store::persist(&preference);
        state.set(next);
    };

    let current = state();

    rsx! {
        div { class: "theme-controls", role: "group", aria_label: "Theme",
            button {
                r#type: "button",
                aria_pressed: (current.mode() == Mode::Night).to_string(),
                disabled: current.is_default(),
                onclick: move |_| change(ThemeState::toggle_mode),
                if current.mode() == Mode::Night { "Night" } else { "Day" }
            }
            button {
                r#type: "button",
                aria_pressed: (current.variant() == Variant::Dark).to_string(),
                disabled: current.is_default(),
                onclick: move |_| change(ThemeState::toggle_variant),
                if current.variant() == Variant::Dark { "Dark" } else { "Light" }
            }
            button {
                r#type: "button",
                aria_pressed: current.is_default().to_string(),
                onclick: move |_| change(ThemeState::toggle_default),
                if current.is_default() { "Undo" } else { "Default" }
            }
        }
    }
}

/// Inline script for initial theme setup (included in head).
///
/// Runs before first paint to avoid a flash of the wrong theme. Implements
/// the same resolution order as `theme::resolve`: cookie, then localStorage,
/// then OS color scheme + local hour, with `theme-default` as the last-resort
/// class. No-op if the root already carries any class.
pub const THEME_SCRIPT: &str = r#"
(function(){
    var root = document.documentElement;
    if (root.classList.length) return;
    function fromRecord(raw) {
        if (!raw) return null;
        try {
            var rec = JSON.parse(raw);
            if (rec && rec.mode === 'default') return 'theme-default';
            if (rec && (rec.mode === 'day' || rec.mode === 'night') &&
                (rec.variant === 'light' || rec.variant === 'dark'))
                return 'theme-' + rec.mode + '-' + rec.variant;
        } catch (e) {}
        return null;
    }
    var cls = null;
    try {
        var m = document.cookie.match(/(?:^|;\s*)folio-theme=([^;]*)/);
        if (m) cls = fromRecord(decodeURIComponent(m[1]));
    } catch (e) {}
    if (!cls) {
        try { cls = fromRecord(localStorage.getItem('folio-theme')); } catch (e) {}
    }
    if (!cls) {
        try {
            var dark = false;
            try { dark = window.matchMedia('(prefers-color-scheme: dark)').matches; } catch (e) {}
            var h = new Date().getHours();
            cls = 'theme-' + (h >= 6 && h < 19 ? 'day' : 'night') + '-' + (dark ? 'dark' : 'light');
        } catch (e) {
            cls = 'theme-default';
        }
    }
    root.classList.add(cls);
})();
"#;
