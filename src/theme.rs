//! Dark/light theme resolution and toggle.
//!
//! Reads the stored preference once at load, falling back to the system
//! color scheme, and marks the `<html>` element with the dark class. Toggle
//! flips that class, swaps the glyph on the toggle and writes the new
//! preference back to storage.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort: a failed read behaves like "nothing stored" and a
//! failed write still flips the page. Only missing markup or a throwing DOM
//! call is reported to the caller.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::config::SiteConfig;
use crate::env::{ColorScheme, Page, PreferenceStore};
use crate::error::SiteError;

/// Visual mode of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The literal persisted to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the initial theme.
///
/// Dark when `"dark"` is stored, or when nothing is stored and the system
/// prefers dark. Any other stored value counts as an explicit light choice.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored {
        Some("dark") => Theme::Dark,
        Some(_) => Theme::Light,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Owns the theme state for the page's lifetime.
#[derive(Debug)]
pub struct ThemeController<I> {
    icon: I,
    current: Theme,
}

impl<I> ThemeController<I> {
    /// Resolve the initial theme and apply it to the page.
    ///
    /// The light theme is the authored markup, so only dark writes anything.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::MissingElement`] when the toggle or its glyph is
    /// absent, and [`SiteError::Dom`] if applying the dark markers fails.
    pub fn init<P>(
        store: &dyn PreferenceStore,
        scheme: &dyn ColorScheme,
        page: &mut P,
        config: &SiteConfig,
    ) -> Result<Self, SiteError>
    where
        P: Page<Icon = I>,
    {
        let icon = page.theme_icon(&config.toggle_id, &config.icon_selector)?;

        let stored = match store.get(&config.storage_key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme: reading stored preference failed, using system preference: {err}");
                None
            }
        };
        let current = resolve_initial(stored.as_deref(), scheme.prefers_dark());

        if current == Theme::Dark {
            page.add_root_class(&config.dark_class)?;
            page.swap_icon_class(&icon, &config.moon_class, &config.sun_class)?;
        }
        log::debug!("theme: initial {current} (stored: {stored:?})");

        Ok(Self { icon, current })
    }

    /// Flip the theme, update the glyph and persist the new preference.
    ///
    /// The new theme is read back from the root class after the flip, so the
    /// page markup stays the source of truth.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Dom`] if the root or glyph class list rejects the
    /// change. Storage failures are logged, not returned.
    pub fn toggle<P>(
        &mut self,
        store: &mut dyn PreferenceStore,
        page: &mut P,
        config: &SiteConfig,
    ) -> Result<Theme, SiteError>
    where
        P: Page<Icon = I>,
    {
        let expected = self.current.toggled();
        let dark = page.toggle_root_class(&config.dark_class)?;
        let next = if dark {
            page.swap_icon_class(&self.icon, &config.moon_class, &config.sun_class)?;
            Theme::Dark
        } else {
            page.swap_icon_class(&self.icon, &config.sun_class, &config.moon_class)?;
            Theme::Light
        };
        if next != expected {
            log::debug!("theme: root class changed outside the toggle; now {next}");
        }
        self.current = next;

        if let Err(err) = store.set(&config.storage_key, next.as_str()) {
            log::warn!("theme: persisting {next} failed: {err}");
        }
        Ok(next)
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }
}
