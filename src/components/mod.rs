//! Leptos components for pages that render the toggle server-side.

pub mod theme_toggle;
