use super::*;
use crate::host::{ColorSchemeSignal, DocumentHost, PreferenceStore};

#[test]
fn store_overwrites_and_removes() {
    let store = MemoryStore::with_entry("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    store.set("theme", "dark");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(store.remove("theme").as_deref(), Some("dark"));
    assert_eq!(store.get("theme"), None);
}

#[test]
fn document_without_elements_reports_missing() {
    let doc = MemoryDocument::new();
    assert!(!doc.set_element_attribute("theme-toggle-btn", "aria-label", "x"));
    assert!(!doc.set_selector_text(".theme-icon", "x"));
    assert_eq!(doc.element_attribute("theme-toggle-btn", "aria-label"), None);
    assert_eq!(doc.selector_text(".theme-icon"), None);
}

#[test]
fn document_with_toggle_accepts_writes() {
    let doc = MemoryDocument::with_toggle("btn", ".icon");
    assert!(doc.set_element_attribute("btn", "aria-label", "hello"));
    assert!(doc.set_selector_text(".icon", "🌙"));
    assert_eq!(doc.element_attribute("btn", "aria-label").as_deref(), Some("hello"));
    assert_eq!(doc.selector_text(".icon").as_deref(), Some("🌙"));
}

#[test]
fn root_attribute_starts_unset() {
    let doc = MemoryDocument::new();
    assert_eq!(doc.root_attribute("data-theme"), None);
    doc.set_root_attribute("data-theme", "dark");
    assert_eq!(doc.root_attribute("data-theme").as_deref(), Some("dark"));
}

#[test]
fn signal_can_be_flipped() {
    let signal = MemorySignal::new(false);
    assert!(!signal.prefers_dark());
    signal.set(true);
    assert!(signal.prefers_dark());
}
