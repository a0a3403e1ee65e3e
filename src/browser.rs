//! `web-sys` adapters and the wasm entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches browser globals. It builds the
//! adapters, wires them into an [`App`] and forwards `DOMContentLoaded`,
//! `scroll` and toggle `click` events through a [`Dispatcher`]. Listeners
//! live for the page's lifetime, so their closures are leaked on purpose.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    CssStyleDeclaration, Document, Element, EventTarget, HtmlElement, Node, Storage, SvgElement,
    Window,
};

use crate::app::{App, wire};
use crate::config::SiteConfig;
use crate::consts;
use crate::env::{ColorScheme, Page, PreferenceStore, Rect};
use crate::error::SiteError;
use crate::events::{Dispatcher, PageEvent};

type BrowserApp = App<LocalStorage, MediaScheme, DomPage>;

fn js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

// =============================================================================
// ADAPTERS
// =============================================================================

/// `window.localStorage`, if the browser grants it.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage access denied: {}", js_error(&err));
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, SiteError> {
        self.storage
            .as_ref()
            .ok_or_else(|| SiteError::Storage("localStorage unavailable".to_owned()))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| SiteError::Storage(js_error(&err)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| SiteError::Storage(js_error(&err)))
    }
}

/// `window.matchMedia` for the dark color-scheme query.
pub struct MediaScheme {
    window: Window,
    query: String,
}

impl MediaScheme {
    #[must_use]
    pub fn new(window: Window, query: &str) -> Self {
        Self { window, query: query.to_owned() }
    }
}

impl ColorScheme for MediaScheme {
    fn prefers_dark(&self) -> bool {
        match self.window.match_media(&self.query) {
            Ok(Some(list)) => list.matches(),
            Ok(None) => false,
            Err(err) => {
                log::debug!("matchMedia({}) failed: {}", self.query, js_error(&err));
                false
            }
        }
    }
}

/// A skill bar element. HTML and SVG elements both carry an inline style.
#[derive(Clone)]
pub enum DomBar {
    Html(HtmlElement),
    Svg(SvgElement),
}

impl DomBar {
    fn from_node(node: &Node) -> Option<Self> {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            return Some(Self::Html(el.clone()));
        }
        node.dyn_ref::<SvgElement>().map(|el| Self::Svg(el.clone()))
    }

    fn element(&self) -> &Element {
        match self {
            Self::Html(el) => el,
            Self::Svg(el) => el,
        }
    }

    fn style(&self) -> CssStyleDeclaration {
        match self {
            Self::Html(el) => el.style(),
            Self::Svg(el) => el.style(),
        }
    }
}

/// The live document.
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn root(&self) -> Result<Element, SiteError> {
        self.document
            .document_element()
            .ok_or_else(|| SiteError::MissingElement("<html>".to_owned()))
    }
}

impl Page for DomPage {
    type Icon = Element;
    type Bar = DomBar;

    fn theme_icon(&self, toggle_id: &str, icon_selector: &str) -> Result<Element, SiteError> {
        let toggle = self
            .document
            .get_element_by_id(toggle_id)
            .ok_or_else(|| SiteError::MissingElement(format!("#{toggle_id}")))?;
        toggle
            .query_selector(icon_selector)
            .map_err(|err| SiteError::Dom(js_error(&err)))?
            .ok_or_else(|| SiteError::MissingElement(format!("#{toggle_id} {icon_selector}")))
    }

    fn add_root_class(&mut self, class: &str) -> Result<(), SiteError> {
        self.root()?
            .class_list()
            .add_1(class)
            .map_err(|err| SiteError::Dom(js_error(&err)))
    }

    fn toggle_root_class(&mut self, class: &str) -> Result<bool, SiteError> {
        self.root()?
            .class_list()
            .toggle(class)
            .map_err(|err| SiteError::Dom(js_error(&err)))
    }

    fn swap_icon_class(&mut self, icon: &Element, from: &str, to: &str) -> Result<(), SiteError> {
        let classes = icon.class_list();
        classes.remove_1(from).map_err(|err| SiteError::Dom(js_error(&err)))?;
        classes.add_1(to).map_err(|err| SiteError::Dom(js_error(&err)))
    }

    fn viewport_height(&self) -> f64 {
        match self.window.inner_height() {
            Ok(height) => height.as_f64().unwrap_or(0.0),
            Err(err) => {
                log::debug!("innerHeight unavailable: {}", js_error(&err));
                0.0
            }
        }
    }

    fn skill_bars(&self, selector: &str) -> Result<Vec<DomBar>, SiteError> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|err| SiteError::Dom(js_error(&err)))?;
        let matched = (0..nodes.length()).filter_map(|index| nodes.get(index)).collect::<Vec<_>>();
        let bars = matched.iter().filter_map(DomBar::from_node).collect::<Vec<_>>();
        if bars.len() < matched.len() {
            log::debug!(
                "skill bars: skipped {} match(es) for {selector} without an inline style",
                matched.len() - bars.len()
            );
        }
        Ok(bars)
    }

    fn bar_rect(&self, bar: &DomBar) -> Rect {
        let rect = bar.element().get_bounding_client_rect();
        Rect::new(rect.top(), rect.bottom())
    }

    fn bar_attribute(&self, bar: &DomBar, name: &str) -> Option<String> {
        bar.element().get_attribute(name)
    }

    fn set_bar_style(&mut self, bar: &DomBar, property: &str, value: &str) -> Result<(), SiteError> {
        bar.style()
            .set_property(property, value)
            .map_err(|err| SiteError::Dom(js_error(&err)))
    }
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn read_config(document: &Document) -> SiteConfig {
    let Some(raw) = document
        .get_element_by_id(consts::CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("#{}: {err}; using defaults", consts::CONFIG_ELEMENT_ID);
            SiteConfig::default()
        }
    }
}

fn listen(target: &EventTarget, name: &str, handler: impl FnMut() + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    if let Err(err) = target.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref()) {
        log::warn!("listening for {name} failed: {}", js_error(&err));
        return;
    }
    cb.forget();
}

fn listen_for_toggle(document: &Document, app: &Rc<RefCell<BrowserApp>>, dispatcher: &Rc<RefCell<Dispatcher>>) {
    if app.borrow().theme().is_none() {
        return;
    }
    let toggle_id = app.borrow().config.toggle_id.clone();
    let Some(toggle) = document.get_element_by_id(&toggle_id) else {
        return;
    };
    let dispatcher = Rc::clone(dispatcher);
    listen(&toggle, "click", move || {
        dispatcher
            .borrow_mut()
            .dispatch(&PageEvent::Click { target_id: toggle_id.clone() });
    });
}

fn on_loaded(document: &Document, app: &Rc<RefCell<BrowserApp>>, dispatcher: &Rc<RefCell<Dispatcher>>) {
    dispatcher.borrow_mut().dispatch(&PageEvent::Load);
    listen_for_toggle(document, app, dispatcher);
}

/// Wasm entry point: installs logging and wires the page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        log::warn!("no document; site runtime not started");
        return;
    };

    let config = read_config(&document);
    let app = Rc::new(RefCell::new(App::new(
        LocalStorage::new(&window),
        MediaScheme::new(window.clone(), &config.dark_scheme_query),
        DomPage::new(window.clone(), document.clone()),
        config,
    )));
    let dispatcher = Rc::new(RefCell::new(Dispatcher::new()));
    wire(&app, &mut dispatcher.borrow_mut());

    let scroll_dispatcher = Rc::clone(&dispatcher);
    listen(&window, "scroll", move || {
        scroll_dispatcher.borrow_mut().dispatch(&PageEvent::Scroll);
    });

    // The module may start after parsing has already finished.
    if document.ready_state() == "loading" {
        let loaded_document = document.clone();
        listen(&document, "DOMContentLoaded", move || {
            on_loaded(&loaded_document, &app, &dispatcher);
        });
    } else {
        on_loaded(&document, &app, &dispatcher);
    }
}
