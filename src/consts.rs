//! Default names for the markup contract the runtime drives.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "theme";

/// Id of the element that toggles the theme when clicked.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Selector for the glyph element inside the toggle.
pub const ICON_SELECTOR: &str = "i";

/// Class placed on `<html>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Glyph class shown while the light theme is active.
pub const MOON_CLASS: &str = "fa-moon";

/// Glyph class shown while the dark theme is active.
pub const SUN_CLASS: &str = "fa-sun";

/// Media query reporting the operating system's dark preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Skill bars ──────────────────────────────────────────────────

/// Selector matching every skill bar in the document.
pub const SKILL_BAR_SELECTOR: &str = ".skill-bar";

/// Attribute carrying a bar's target CSS width, e.g. `75%`.
pub const WIDTH_ATTRIBUTE: &str = "data-width";

/// Transition applied alongside the width so CSS animates the fill.
pub const WIDTH_TRANSITION: &str = "width 1.5s ease-in-out";

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional inline JSON element overriding [`crate::config::SiteConfig`].
pub const CONFIG_ELEMENT_ID: &str = "site-config";
