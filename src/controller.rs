//! Theme controller: preference resolution, application, and toggle sync.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page load, toggle clicks, and system color-scheme changes all end up in
//! this type. It owns no theme state of its own: the document attribute is
//! the current theme and the store holds the explicit user choice, so every
//! method re-reads them and the controller can be shared freely between
//! event callbacks.
//!
//! TRADE-OFFS
//! ==========
//! A stored value that is not exactly `light` or `dark` is treated as absent
//! rather than written through, so a corrupted entry falls back to the system
//! signal and follows it until the user toggles again.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ThemeConfig;
use crate::host::{ColorSchemeSignal, DocumentHost, PreferenceStore};
use crate::theme::Theme;

/// Attribute carrying the toggle control's accessibility label.
const ARIA_LABEL: &str = "aria-label";

pub struct ThemeController<S, D, E> {
    config: ThemeConfig,
    store: S,
    document: D,
    signal: E,
}

impl<S, D, E> ThemeController<S, D, E>
where
    S: PreferenceStore,
    D: DocumentHost,
    E: ColorSchemeSignal,
{
    pub fn new(config: ThemeConfig, store: S, document: D, signal: E) -> Self {
        Self {
            config,
            store,
            document,
            signal,
        }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// The user's explicit choice, if one is stored and valid.
    pub fn stored_preference(&self) -> Option<Theme> {
        let raw = self.store.get(&self.config.storage_key)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(err) => {
                log::warn!("ignoring stored theme preference: {err}");
                None
            }
        }
    }

    /// Stored preference first, then the system signal, then light.
    pub fn resolve_preferred_theme(&self) -> Theme {
        self.stored_preference()
            .unwrap_or_else(|| Theme::from_prefers_dark(self.signal.prefers_dark()))
    }

    /// Theme currently shown by the document.
    pub fn current_theme(&self) -> Theme {
        let raw = self.document.root_attribute(&self.config.attribute);
        Theme::from_attribute(raw.as_deref())
    }

    /// Set the document attribute, persist the choice, and sync the toggle.
    pub fn apply_theme(&self, theme: Theme) {
        let value = theme.as_str();
        self.document.set_root_attribute(&self.config.attribute, value);
        self.store.set(&self.config.storage_key, value);
        self.sync_toggle(theme);
        log::debug!("applied theme {theme}");
    }

    /// Switch to the opposite of the document's current theme.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.current_theme().opposite();
        self.apply_theme(next);
        next
    }

    /// Resolve and apply the preferred theme. Run once when the page is ready.
    pub fn initialize(&self) -> Theme {
        let theme = self.resolve_preferred_theme();
        self.apply_theme(theme);
        theme
    }

    /// React to a system color-scheme change.
    ///
    /// Returns the applied theme, or `None` when a stored preference exists
    /// and the change is ignored.
    pub fn on_system_change(&self, prefers_dark: bool) -> Option<Theme> {
        if self.stored_preference().is_some() {
            log::debug!("system color scheme changed; keeping stored preference");
            return None;
        }
        let theme = Theme::from_prefers_dark(prefers_dark);
        self.apply_theme(theme);
        Some(theme)
    }

    fn sync_toggle(&self, theme: Theme) {
        let look = theme.appearance(&self.config.labels);
        if !self
            .document
            .set_selector_text(&self.config.icon_selector, look.icon)
        {
            log::debug!("theme icon {} not found", self.config.icon_selector);
        }
        if !self
            .document
            .set_element_attribute(&self.config.toggle_id, ARIA_LABEL, look.label)
        {
            log::debug!("theme toggle #{} not found", self.config.toggle_id);
        }
    }
}
