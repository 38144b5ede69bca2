//! Page-level configuration: where the theme lives and what the toggle says.
//!
//! DESIGN
//! ======
//! Every locator has a default matching the stock page markup, so most hosts
//! call `ThemeConfig::default()`. Pages that rename elements or localize the
//! labels pass a partial JSON object; omitted fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ThemeError;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle-btn";
pub const DEFAULT_ICON_SELECTOR: &str = ".theme-icon";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key of the persisted preference in `localStorage`.
    pub storage_key: String,
    /// Attribute set on the root `<html>` element.
    pub attribute: String,
    /// Element id of the toggle button.
    pub toggle_id: String,
    /// CSS selector of the icon element inside the page.
    pub icon_selector: String,
    /// Media query whose match means the system prefers dark.
    pub media_query: String,
    pub labels: Labels,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_ATTRIBUTE.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            icon_selector: DEFAULT_ICON_SELECTOR.to_owned(),
            media_query: DARK_SCHEME_QUERY.to_owned(),
            labels: Labels::default(),
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] when `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Accessibility labels for the toggle control.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Shown while dark is active.
    pub switch_to_light: String,
    /// Shown while light is active.
    pub switch_to_dark: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            switch_to_light: "Switch to light mode".to_owned(),
            switch_to_dark: "Switch to dark mode".to_owned(),
        }
    }
}
