//! Toggle button markup for the theme controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The button is rendered with the id and icon class the controller looks
//! up, so server-rendered pages get a control that `browser::install` can
//! wire after load. The component itself is static; clicks are handled by
//! the controller, not by a Leptos signal.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::config::{DEFAULT_ICON_SELECTOR, ThemeConfig};
use crate::theme::Theme;

/// Class name for a selector of the form `.name`, if it is that simple.
pub fn class_from_selector(selector: &str) -> Option<&str> {
    let name = selector.strip_prefix('.')?;
    let plain = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    plain.then_some(name)
}

/// Icon class to render: the configured one when it is a bare class
/// selector, otherwise the stock `theme-icon`.
pub fn icon_class(config: &ThemeConfig) -> String {
    class_from_selector(&config.icon_selector)
        .or_else(|| class_from_selector(DEFAULT_ICON_SELECTOR))
        .unwrap_or_default()
        .to_owned()
}

/// Theme toggle button.
///
/// `initial` only seeds the server-rendered icon and label; the controller
/// overwrites both when it initializes in the browser.
#[component]
pub fn ThemeToggle(
    #[prop(optional)] config: Option<ThemeConfig>,
    #[prop(optional)] initial: Theme,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let look = initial.appearance(&config.labels);
    let icon = look.icon;
    let label = look.label.to_owned();
    let icon_class = icon_class(&config);

    view! {
        <button
            id=config.toggle_id.clone()
            class="theme-toggle"
            type="button"
            aria-label=label.clone()
            title=label
        >
            <span class=icon_class aria-hidden="true">{icon}</span>
        </button>
    }
}
