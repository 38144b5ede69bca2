//! # theme-toggle
//!
//! Light/dark theme controller for a web page. Resolves the preferred theme
//! from `localStorage` or the system color scheme, applies it as a
//! `data-theme` attribute on `<html>`, persists changes, and keeps the toggle
//! button's icon and `aria-label` in sync.
//!
//! The controller talks to its page only through the traits in [`host`], so
//! the core builds and tests natively against [`memory`]. With the `hydrate`
//! feature the crate compiles to WASM and [`browser`] supplies `web-sys`
//! hosts plus the event wiring.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | `Theme` value and toggle appearance |
//! | [`config`] | Storage key, element locators, labels |
//! | [`controller`] | Resolve, apply, toggle, initialize, system change |
//! | [`host`] | Store, document, and color-scheme capability traits |
//! | [`memory`] | In-process hosts |
//! | [`components`] | Leptos toggle button |
//! | `browser` | `web-sys` hosts and listeners (hydrate only) |

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod memory;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use config::{Labels, ThemeConfig};
pub use controller::ThemeController;
pub use error::ThemeError;
pub use theme::Theme;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "hydrate")]
fn init_logging() {
    console_error_panic_hook::set_once();
    // A second call (page script invoking `start` twice) keeps the first logger.
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Install the theme controller with the stock page configuration.
///
/// # Errors
///
/// Returns the setup error as a JS string.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    init_logging();
    browser::install(ThemeConfig::default()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Install the theme controller with a JSON config; omitted fields keep
/// their defaults.
///
/// # Errors
///
/// Returns a JS string for malformed config or a failed setup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn start_with_config(config_json: &str) -> Result<(), JsValue> {
    init_logging();
    ThemeConfig::from_json(config_json)
        .and_then(browser::install)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
