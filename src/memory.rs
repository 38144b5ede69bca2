//! In-process host implementations.
//!
//! Used by native builds that have no DOM and by the controller tests. The
//! document models only what the controller touches: root attributes, a set
//! of elements addressable by id, and text slots addressable by selector.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::host::{ColorSchemeSignal, DocumentHost, PreferenceStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry, as if a prior session wrote it.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.set(key, value);
        store
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.entries.borrow_mut().remove(key)
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}

#[derive(Debug, Default)]
pub struct MemoryDocument {
    root: RefCell<HashMap<String, String>>,
    elements: RefCell<HashMap<String, HashMap<String, String>>>,
    texts: RefCell<HashMap<String, String>>,
}

impl MemoryDocument {
    /// Document with no toggle control at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Document containing a toggle button `toggle_id` and an icon element
    /// matched by `icon_selector`.
    pub fn with_toggle(toggle_id: &str, icon_selector: &str) -> Self {
        let doc = Self::default();
        doc.add_element(toggle_id);
        doc.add_text_slot(icon_selector);
        doc
    }

    pub fn add_element(&self, id: &str) {
        self.elements
            .borrow_mut()
            .entry(id.to_owned())
            .or_default();
    }

    pub fn add_text_slot(&self, selector: &str) {
        self.texts
            .borrow_mut()
            .entry(selector.to_owned())
            .or_default();
    }

    pub fn element_attribute(&self, id: &str, name: &str) -> Option<String> {
        self.elements
            .borrow()
            .get(id)
            .and_then(|attrs| attrs.get(name).cloned())
    }

    pub fn selector_text(&self, selector: &str) -> Option<String> {
        self.texts.borrow().get(selector).cloned()
    }
}

impl DocumentHost for MemoryDocument {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.borrow().get(name).cloned()
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        self.root
            .borrow_mut()
            .insert(name.to_owned(), value.to_owned());
    }

    fn set_element_attribute(&self, id: &str, name: &str, value: &str) -> bool {
        let mut elements = self.elements.borrow_mut();
        let Some(attrs) = elements.get_mut(id) else {
            return false;
        };
        attrs.insert(name.to_owned(), value.to_owned());
        true
    }

    fn set_selector_text(&self, selector: &str, text: &str) -> bool {
        let mut texts = self.texts.borrow_mut();
        let Some(slot) = texts.get_mut(selector) else {
            return false;
        };
        text.clone_into(slot);
        true
    }
}

/// Color-scheme signal whose value the caller flips by hand.
#[derive(Debug, Default)]
pub struct MemorySignal {
    dark: Cell<bool>,
}

impl MemorySignal {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            dark: Cell::new(prefers_dark),
        }
    }

    pub fn set(&self, prefers_dark: bool) {
        self.dark.set(prefers_dark);
    }
}

impl ColorSchemeSignal for MemorySignal {
    fn prefers_dark(&self) -> bool {
        self.dark.get()
    }
}
