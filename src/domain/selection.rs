//! "No override" handling for enum-or-sentinel fields.
//!
//! Presets, config files and the option catalog speak the reserved string
//! `"Maintain Original"`. Inside the crate that string becomes
//! [`Selection::Maintained`], so rendering logic matches on a variant instead
//! of comparing strings. Translation happens only at the serde boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved option value meaning "keep whatever the reference image has".
pub const MAINTAIN_ORIGINAL: &str = "Maintain Original";

/// A field that either overrides the reference or leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    Maintained,
    Override(String),
}

impl Selection {
    /// Build a selection from user-facing text, mapping the sentinel to `Maintained`.
    pub fn parse(value: &str) -> Self {
        if value == MAINTAIN_ORIGINAL { Selection::Maintained } else { Selection::Override(value.to_string()) }
    }

    pub fn is_maintained(&self) -> bool {
        matches!(self, Selection::Maintained)
    }

    /// The override value, or `None` when the reference is kept.
    pub fn value(&self) -> Option<&str> {
        match self {
            Selection::Maintained => None,
            Selection::Override(value) => Some(value),
        }
    }

    /// Text form, with the sentinel standing in for `Maintained`.
    pub fn as_str(&self) -> &str {
        self.value().unwrap_or(MAINTAIN_ORIGINAL)
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        if value == MAINTAIN_ORIGINAL { Selection::Maintained } else { Selection::Override(value) }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::parse(value)
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Maintained => MAINTAIN_ORIGINAL.to_string(),
            Selection::Override(value) => value,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
