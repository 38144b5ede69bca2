//! Capabilities the controller needs from its host page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches browser globals directly. It is handed a
//! preference store, a document, and a color-scheme signal. The browser
//! implementations live in `browser` (hydrate only); `memory` provides
//! in-process versions for native builds and tests.
//!
//! All methods take `&self`: hosts are shared between event callbacks, so
//! any state they keep sits behind interior mutability.

/// Persistent key-value storage (`localStorage` in the browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// The parts of the document the controller reads and writes.
pub trait DocumentHost {
    /// Attribute `name` on the root element, if set.
    fn root_attribute(&self, name: &str) -> Option<String>;

    fn set_root_attribute(&self, name: &str, value: &str);

    /// Set an attribute on the element with `id`.
    ///
    /// Returns `false` if no such element exists.
    fn set_element_attribute(&self, id: &str, name: &str, value: &str) -> bool;

    /// Replace the text of the first element matching `selector`.
    ///
    /// Returns `false` if nothing matched.
    fn set_selector_text(&self, selector: &str, text: &str) -> bool;
}

/// Read side of the system "prefers dark" media feature.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> bool;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

impl<T: DocumentHost + ?Sized> DocumentHost for &T {
    fn root_attribute(&self, name: &str) -> Option<String> {
        (**self).root_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        (**self).set_root_attribute(name, value);
    }

    fn set_element_attribute(&self, id: &str, name: &str, value: &str) -> bool {
        (**self).set_element_attribute(id, name, value)
    }

    fn set_selector_text(&self, selector: &str, text: &str) -> bool {
        (**self).set_selector_text(selector, text)
    }
}

impl<T: ColorSchemeSignal + ?Sized> ColorSchemeSignal for &T {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }
}
