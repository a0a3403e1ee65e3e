//! In-memory adapters for native tests.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::env::{ColorScheme, Page, PreferenceStore, Rect};
use crate::error::SiteError;

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub items: HashMap<String, String>,
    pub unavailable: bool,
    pub writes: usize,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.items.insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        if self.unavailable {
            return Err(SiteError::Storage("disabled".to_owned()));
        }
        Ok(self.items.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SiteError> {
        if self.unavailable {
            return Err(SiteError::Storage("disabled".to_owned()));
        }
        self.writes += 1;
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FixedScheme(pub bool);

impl ColorScheme for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct MemoryBar {
    pub rect: Rect,
    pub attributes: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
    pub style_writes: usize,
}

/// A page with a root element, an optional toggle/glyph pair and skill bars.
#[derive(Debug)]
pub struct MemoryPage {
    pub root_classes: BTreeSet<String>,
    pub toggle_present: bool,
    pub icon_classes: Option<BTreeSet<String>>,
    pub viewport_height: f64,
    pub bars: Vec<MemoryBar>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self {
            root_classes: BTreeSet::new(),
            toggle_present: true,
            icon_classes: Some(["fas", "fa-moon"].into_iter().map(str::to_owned).collect()),
            viewport_height: 800.0,
            bars: Vec::new(),
        }
    }
}

impl MemoryPage {
    pub fn without_toggle() -> Self {
        Self { toggle_present: false, icon_classes: None, ..Self::default() }
    }

    pub fn without_icon() -> Self {
        Self { icon_classes: None, ..Self::default() }
    }

    pub fn with_bar(mut self, top: f64, bottom: f64, width: Option<&str>) -> Self {
        let mut bar = MemoryBar { rect: Rect::new(top, bottom), ..MemoryBar::default() };
        if let Some(width) = width {
            bar.attributes.insert("data-width".to_owned(), width.to_owned());
        }
        self.bars.push(bar);
        self
    }

    pub fn root_has_class(&self, class: &str) -> bool {
        self.root_classes.contains(class)
    }

    pub fn icon_has(&self, class: &str) -> bool {
        self.icon_classes.as_ref().is_some_and(|classes| classes.contains(class))
    }

    pub fn bar_style(&self, index: usize, property: &str) -> Option<&str> {
        self.bars.get(index).and_then(|bar| bar.style.get(property)).map(String::as_str)
    }
}

impl Page for MemoryPage {
    type Icon = ();
    type Bar = usize;

    fn theme_icon(&self, toggle_id: &str, icon_selector: &str) -> Result<(), SiteError> {
        if !self.toggle_present {
            return Err(SiteError::MissingElement(format!("#{toggle_id}")));
        }
        if self.icon_classes.is_none() {
            return Err(SiteError::MissingElement(format!("#{toggle_id} {icon_selector}")));
        }
        Ok(())
    }

    fn add_root_class(&mut self, class: &str) -> Result<(), SiteError> {
        self.root_classes.insert(class.to_owned());
        Ok(())
    }

    fn toggle_root_class(&mut self, class: &str) -> Result<bool, SiteError> {
        if self.root_classes.remove(class) {
            return Ok(false);
        }
        self.root_classes.insert(class.to_owned());
        Ok(true)
    }

    fn swap_icon_class(&mut self, _icon: &(), from: &str, to: &str) -> Result<(), SiteError> {
        let classes = self
            .icon_classes
            .as_mut()
            .ok_or_else(|| SiteError::MissingElement("icon".to_owned()))?;
        classes.remove(from);
        classes.insert(to.to_owned());
        Ok(())
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn skill_bars(&self, _selector: &str) -> Result<Vec<usize>, SiteError> {
        Ok((0..self.bars.len()).collect())
    }

    fn bar_rect(&self, bar: &usize) -> Rect {
        self.bars.get(*bar).map(|b| b.rect).unwrap_or_default()
    }

    fn bar_attribute(&self, bar: &usize, name: &str) -> Option<String> {
        self.bars.get(*bar).and_then(|b| b.attributes.get(name).cloned())
    }

    fn set_bar_style(&mut self, bar: &usize, property: &str, value: &str) -> Result<(), SiteError> {
        let bar = self
            .bars
            .get_mut(*bar)
            .ok_or_else(|| SiteError::Dom(format!("no bar at index {bar}")))?;
        bar.style_writes += 1;
        if value.is_empty() {
            bar.style.remove(property);
        } else {
            bar.style.insert(property.to_owned(), value.to_owned());
        }
        Ok(())
    }
}
