//! `web-sys` hosts and DOM event wiring. Requires a browser environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! `install` builds a controller over `localStorage`, the live document, and
//! the `prefers-color-scheme` media query, then runs initialization once the
//! document is interactive: apply the preferred theme, hook the toggle
//! button's click, and follow system changes. Listener closures live for the
//! rest of the page and are leaked with `forget`.
//!
//! TRADE-OFFS
//! ==========
//! Write failures (storage quota, blocked storage, attribute exceptions) are
//! logged and dropped; the theme still applies to the current page.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Event, MediaQueryList, MediaQueryListEvent, Storage};

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::ThemeError;
use crate::host::{ColorSchemeSignal, DocumentHost, PreferenceStore};

type BrowserController = ThemeController<WebStorage, WebDocument, WebSignal>;

fn js_error(err: JsValue) -> ThemeError {
    ThemeError::Js(format!("{err:?}"))
}

/// `localStorage`, or nothing when the browser blocks it.
pub struct WebStorage {
    storage: Option<Storage>,
}

impl WebStorage {
    pub fn new(storage: Option<Storage>) -> Self {
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme choice will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("failed to persist {key}: {err:?}");
        }
    }
}

pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl DocumentHost for WebDocument {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.document.document_element()?.get_attribute(name)
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        let Some(root) = self.document.document_element() else {
            log::warn!("document has no root element");
            return;
        };
        if let Err(err) = root.set_attribute(name, value) {
            log::warn!("failed to set {name} on root: {err:?}");
        }
    }

    fn set_element_attribute(&self, id: &str, name: &str, value: &str) -> bool {
        let Some(el) = self.document.get_element_by_id(id) else {
            return false;
        };
        if let Err(err) = el.set_attribute(name, value) {
            log::warn!("failed to set {name} on #{id}: {err:?}");
        }
        true
    }

    fn set_selector_text(&self, selector: &str, text: &str) -> bool {
        match self.document.query_selector(selector) {
            Ok(Some(el)) => {
                el.set_text_content(Some(text));
                true
            }
            Ok(None) => false,
            Err(err) => {
                log::warn!("bad selector {selector}: {err:?}");
                false
            }
        }
    }
}

/// The dark-scheme media query. Absent when `matchMedia` is unsupported.
pub struct WebSignal {
    query: Option<MediaQueryList>,
}

impl WebSignal {
    pub fn new(query: Option<MediaQueryList>) -> Self {
        Self { query }
    }
}

impl ColorSchemeSignal for WebSignal {
    fn prefers_dark(&self) -> bool {
        self.query.as_ref().map_or(false, MediaQueryList::matches)
    }
}

/// Build the browser controller and run initialization when the page is ready.
///
/// # Errors
///
/// Fails when `window` or `document` is missing, or when a listener cannot
/// be registered.
pub fn install(config: ThemeConfig) -> Result<(), ThemeError> {
    let window = web_sys::window().ok_or(ThemeError::MissingGlobal("window"))?;
    let document = window
        .document()
        .ok_or(ThemeError::MissingGlobal("document"))?;
    let query = window.match_media(&config.media_query).map_err(js_error)?;

    let controller = Rc::new(ThemeController::new(
        config,
        WebStorage::new(window.local_storage().ok().flatten()),
        WebDocument::new(document.clone()),
        WebSignal::new(query.clone()),
    ));

    if document.ready_state() != "loading" {
        return wire(&controller, &document, query.as_ref());
    }

    let doc_for_cb = document.clone();
    let on_ready = Closure::once(move || {
        if let Err(err) = wire(&controller, &doc_for_cb, query.as_ref()) {
            log::error!("theme setup failed: {err}");
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(js_error)?;
    on_ready.forget();
    Ok(())
}

fn wire(
    controller: &Rc<BrowserController>,
    document: &Document,
    query: Option<&MediaQueryList>,
) -> Result<(), ThemeError> {
    let theme = controller.initialize();
    log::info!("theme initialized: {theme}");

    if let Some(button) = document.get_element_by_id(&controller.config().toggle_id) {
        let controller = Rc::clone(controller);
        let on_click = Closure::wrap(Box::new(move |_: Event| {
            controller.toggle_theme();
        }) as Box<dyn FnMut(Event)>);
        button
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(js_error)?;
        on_click.forget();
    } else {
        log::debug!("no theme toggle on this page");
    }

    if let Some(query) = query {
        let controller = Rc::clone(controller);
        let on_change = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            controller.on_system_change(event.matches());
        }) as Box<dyn FnMut(MediaQueryListEvent)>);
        query
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
            .map_err(js_error)?;
        on_change.forget();
    }

    Ok(())
}
