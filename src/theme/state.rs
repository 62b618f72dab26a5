//! Controller state machine for the theme toggles.

use super::preference::{Mode, ThemePreference, Variant};

/// In-memory theme state owned by the mounted controls.
///
/// `mode` and `variant` stay populated while the default theme is active so
/// that undoing restores them; `saved` remembers the pair that was live when
/// the default theme was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    mode: Mode,
    variant: Variant,
    is_default: bool,
    saved: Option<(Mode, Variant)>,
}

impl Default for ThemeState {
    fn default() -> Self {
        ThemeState {
            mode: Mode::Day,
            variant: Variant::Light,
            is_default: false,
            saved: None,
        }
    }
}

impl ThemeState {
    /// State for a freshly resolved preference, as on mount or reload.
    pub fn from_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Standard { mode, variant } => ThemeState {
                mode,
                variant,
                is_default: false,
                saved: None,
            },
            // A stored default record carries no pair to return to.
            ThemePreference::Default => ThemeState {
                is_default: true,
                ..ThemeState::default()
            },
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// The preference this state persists and renders as.
    pub fn preference(&self) -> ThemePreference {
        if self.is_default {
            ThemePreference::Default
        } else {
            ThemePreference::Standard {
                mode: self.mode,
                variant: self.variant,
            }
        }
    }

    /// Flip day/night. No-op while the default theme is active.
    pub fn toggle_mode(&mut self) {
        if !self.is_default {
            self.mode = self.mode.toggled();
        }
    }

    /// Flip light/dark. No-op while the default theme is active.
    pub fn toggle_variant(&mut self) {
        if !self.is_default {
            self.variant = self.variant.toggled();
        }
    }

    /// Enter the default theme, or undo back to the saved pair.
    pub fn toggle_default(&mut self) {
        if self.is_default {
            if let Some((mode, variant)) = self.saved.take() {
                self.mode = mode;
                self.variant = variant;
            }
            self.is_default = false;
        } else {
            self.saved = Some((self.mode, self.variant));
            self.is_default = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::resolve::{resolve, Signals};

    fn night_dark() -> ThemeState {
        ThemeState::from_preference(ThemePreference::Standard {
            mode: Mode::Night,
            variant: Variant::Dark,
        })
    }

    #[test]
    fn test_toggles_cycle_the_four_standard_states() {
        let mut state = ThemeState::default();
        assert_eq!(state.preference().root_class(), "theme-day-light");
        state.toggle_mode();
        assert_eq!(state.preference().root_class(), "theme-night-light");
        state.toggle_variant();
        assert_eq!(state.preference().root_class(), "theme-night-dark");
        state.toggle_mode();
        assert_eq!(state.preference().root_class(), "theme-day-dark");
        state.toggle_variant();
        assert_eq!(state.preference().root_class(), "theme-day-light");
    }

    #[test]
    fn test_toggles_are_noops_while_default() {
        let mut state = night_dark();
        state.toggle_default();
        state.toggle_mode();
        state.toggle_variant();
        assert_eq!(state.mode(), Mode::Night);
        assert_eq!(state.variant(), Variant::Dark);
        assert_eq!(state.preference(), ThemePreference::Default);
    }

    #[test]
    fn test_undo_restores_the_saved_pair() {
        let mut state = night_dark();
        state.toggle_default();
        assert!(state.is_default());
        state.toggle_default();
        assert!(!state.is_default());
        assert_eq!(state.preference().root_class(), "theme-night-dark");
    }

    #[test]
    fn test_undo_without_snapshot_keeps_current_fields() {
        // A reload while the default theme was persisted has no snapshot.
        let mut state = ThemeState::from_preference(ThemePreference::Default);
        assert!(state.is_default());
        state.toggle_default();
        assert!(!state.is_default());
        assert_eq!(state.preference().root_class(), "theme-day-light");
    }

    #[test]
    fn test_toggle_then_reload_round_trips() {
        let mut state = ThemeState::from_preference(resolve(
            None,
            None,
            Signals {
                os_dark: Some(true),
                hour: 23,
            },
        ));
        state.toggle_mode();
        let stored = state.preference().to_stored();

        // Simulate a reload resolving from the cookie mirror alone.
        let reloaded = ThemeState::from_preference(resolve(
            Some(&stored),
            None,
            Signals::default(),
        ));
        assert_eq!(reloaded.preference(), state.preference());
        assert_eq!(reloaded.preference().root_class(), "theme-day-dark");
    }

    #[test]
    fn test_default_round_trips_through_storage() {
        let mut state = night_dark();
        state.toggle_default();
        let stored = state.preference().to_stored();

        let reloaded = resolve(None, Some(&stored), Signals::default());
        assert_eq!(reloaded, ThemePreference::Default);
    }
}
