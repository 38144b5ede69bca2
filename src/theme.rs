//! Theme value and the toggle control's appearance for each theme.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Theme` is the only value that flows between storage, the document
//! attribute, and the toggle button. Everything the page shows about the
//! current mode is derived from it here.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Labels;
use crate::error::ThemeError;

/// Icon shown while the dark theme is active (offers the switch to light).
pub const ICON_SUN: &str = "\u{2600}\u{FE0F}";
/// Icon shown while the light theme is active (offers the switch to dark).
pub const ICON_MOON: &str = "\u{1F319}";

/// Display mode applied to the whole document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// String written to the document attribute and to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Interpret a raw document attribute value.
    ///
    /// Anything other than exactly `"dark"` (including an absent attribute)
    /// counts as light, so a tampered or missing attribute still toggles to dark.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Icon and accessibility label the toggle control shows for this theme.
    pub fn appearance(self, labels: &Labels) -> ToggleAppearance<'_> {
        match self {
            Self::Dark => ToggleAppearance {
                icon: ICON_SUN,
                label: &labels.switch_to_light,
            },
            Self::Light => ToggleAppearance {
                icon: ICON_MOON,
                label: &labels.switch_to_dark,
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::InvalidTheme(other.to_owned())),
        }
    }
}

/// What the toggle control displays for a given theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleAppearance<'a> {
    pub icon: &'static str,
    pub label: &'a str,
}
