//! Environment adapters for storage, color scheme and the page DOM.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme controller and skill bar animator never touch browser globals.
//! They receive these adapters, so the `browser` module supplies `web-sys`
//! implementations and tests supply in-memory ones.

use crate::error::SiteError;

/// Viewport-relative vertical bounds of an element, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    #[must_use]
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// Key/value preference storage (`localStorage` in the browser).
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` means nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] when storage is unavailable.
    fn get(&self, key: &str) -> Result<Option<String>, SiteError>;

    /// Write `value` under `key`, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] when storage is unavailable or full.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// The operating system's reported color-scheme preference.
pub trait ColorScheme {
    fn prefers_dark(&self) -> bool;
}

/// The parts of the document the runtime reads and writes.
pub trait Page {
    /// Handle to the theme toggle's glyph element.
    type Icon;
    /// Handle to one skill bar element.
    type Bar;

    /// Locate the glyph element inside the toggle.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::MissingElement`] if the toggle or its glyph is absent.
    fn theme_icon(&self, toggle_id: &str, icon_selector: &str) -> Result<Self::Icon, SiteError>;

    /// # Errors
    ///
    /// Returns [`SiteError::Dom`] if the root class list rejects the change.
    fn add_root_class(&mut self, class: &str) -> Result<(), SiteError>;

    /// Flip `class` on the root element and report whether it is now present.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Dom`] if the root class list rejects the change.
    fn toggle_root_class(&mut self, class: &str) -> Result<bool, SiteError>;

    /// Remove `from` and add `to` on the glyph element.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Dom`] if the glyph class list rejects the change.
    fn swap_icon_class(&mut self, icon: &Self::Icon, from: &str, to: &str) -> Result<(), SiteError>;

    fn viewport_height(&self) -> f64;

    /// Every element currently matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Dom`] if the selector is rejected.
    fn skill_bars(&self, selector: &str) -> Result<Vec<Self::Bar>, SiteError>;

    fn bar_rect(&self, bar: &Self::Bar) -> Rect;

    fn bar_attribute(&self, bar: &Self::Bar, name: &str) -> Option<String>;

    /// Set an inline style property on the bar.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Dom`] if the style declaration rejects the write.
    fn set_bar_style(&mut self, bar: &Self::Bar, property: &str, value: &str) -> Result<(), SiteError>;
}
