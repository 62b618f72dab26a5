//! The persisted theme preference record and its class mapping.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage slot and cookie name shared with the inline pre-hydration script.
pub const PREFERENCE_KEY: &str = "folio-theme";

/// Prefix of every root class this crate manages.
pub const CLASS_PREFIX: &str = "theme-";

/// Day/night axis of the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Day,
    Night,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Day => Mode::Night,
            Mode::Night => Mode::Day,
        }
    }
}

/// Light/dark axis of the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Light,
    Dark,
}

impl Variant {
    pub fn toggled(self) -> Self {
        match self {
            Variant::Light => Variant::Dark,
            Variant::Dark => Variant::Light,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreferenceError {
    /// A day/night record without a variant is not applyable.
    #[error("theme record is missing a variant")]
    MissingVariant,
}

/// The one persisted entity: either a mode/variant pair or the variant-less
/// default theme.
///
/// Wire shape is `{"mode":"day","variant":"light"}` or `{"mode":"default"}`,
/// written identically to localStorage and the cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Record", into = "Record")]
pub enum ThemePreference {
    Standard { mode: Mode, variant: Variant },
    Default,
}

impl ThemePreference {
    /// The single root class for this preference. Pure; the only place class
    /// names are spelled out.
    pub fn root_class(&self) -> &'static str {
        match self {
            ThemePreference::Standard { mode: Mode::Day, variant: Variant::Light } => {
                "theme-day-light"
            }
            ThemePreference::Standard { mode: Mode::Day, variant: Variant::Dark } => {
                "theme-day-dark"
            }
            ThemePreference::Standard { mode: Mode::Night, variant: Variant::Light } => {
                "theme-night-light"
            }
            ThemePreference::Standard { mode: Mode::Night, variant: Variant::Dark } => {
                "theme-night-dark"
            }
            ThemePreference::Default => "theme-default",
        }
    }

    /// Parse a raw stored value, treating anything malformed as absent.
    pub fn from_stored(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Serialize for the storage slot and cookie value.
    pub fn to_stored(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Wire representation. `mode` carries the `default` marker in-band so the
/// inline script can parse the same record with one JSON.parse.
#[derive(Serialize, Deserialize)]
struct Record {
    mode: RecordMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    variant: Option<Variant>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RecordMode {
    Day,
    Night,
    Default,
}

impl TryFrom<Record> for ThemePreference {
    type Error = PreferenceError;

    fn try_from(record: Record) -> Result<Self, Self::Error> {
        let mode = match record.mode {
            // An explicit default marker wins over any leftover variant key.
            RecordMode::Default => return Ok(ThemePreference::Default),
            RecordMode::Day => Mode::Day,
            RecordMode::Night => Mode::Night,
        };
        let variant = record.variant.ok_or(PreferenceError::MissingVariant)?;
        Ok(ThemePreference::Standard { mode, variant })
    }
}

impl From<ThemePreference> for Record {
    fn from(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Standard { mode, variant } => Record {
                mode: match mode {
                    Mode::Day => RecordMode::Day,
                    Mode::Night => RecordMode::Night,
                },
                variant: Some(variant),
            },
            ThemePreference::Default => Record {
                mode: RecordMode::Default,
                variant: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_class_covers_every_state() {
        let night_dark = ThemePreference::Standard {
            mode: Mode::Night,
            variant: Variant::Dark,
        };
        assert_eq!(night_dark.root_class(), "theme-night-dark");
        assert_eq!(ThemePreference::Default.root_class(), "theme-default");
    }

    #[test]
    fn test_standard_record_round_trips() {
        let pref = ThemePreference::Standard {
            mode: Mode::Day,
            variant: Variant::Dark,
        };
        let raw = pref.to_stored();
        assert_eq!(raw, r#"{"mode":"day","variant":"dark"}"#);
        assert_eq!(ThemePreference::from_stored(&raw), Some(pref));
    }

    #[test]
    fn test_default_record_omits_variant() {
        assert_eq!(ThemePreference::Default.to_stored(), r#"{"mode":"default"}"#);
    }

    #[test]
    fn test_default_marker_wins_over_leftover_variant() {
        let parsed = ThemePreference::from_stored(r#"{"mode":"default","variant":"dark"}"#);
        assert_eq!(parsed, Some(ThemePreference::Default));
    }

    #[test]
    fn test_missing_variant_is_treated_as_absent() {
        assert_eq!(ThemePreference::from_stored(r#"{"mode":"night"}"#), None);
    }

    #[test]
    fn test_malformed_json_is_treated_as_absent() {
        assert_eq!(ThemePreference::from_stored("not json"), None);
        assert_eq!(ThemePreference::from_stored(r#"{"mode":"purple"}"#), None);
        assert_eq!(ThemePreference::from_stored(""), None);
    }
}
