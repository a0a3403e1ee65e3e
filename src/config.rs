//! Runtime configuration for the markup contract.
//!
//! Defaults describe the portfolio markup. A page may override any field
//! with an inline `<script type="application/json" id="site-config">` block;
//! omitted fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::SiteError;

/// Names and values the theme controller and skill bar animator operate on.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub storage_key: String,
    pub toggle_id: String,
    pub icon_selector: String,
    pub dark_class: String,
    pub moon_class: String,
    pub sun_class: String,
    pub dark_scheme_query: String,
    pub skill_bar_selector: String,
    pub width_attribute: String,
    pub transition: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::STORAGE_KEY.to_owned(),
            toggle_id: consts::TOGGLE_ID.to_owned(),
            icon_selector: consts::ICON_SELECTOR.to_owned(),
            dark_class: consts::DARK_CLASS.to_owned(),
            moon_class: consts::MOON_CLASS.to_owned(),
            sun_class: consts::SUN_CLASS.to_owned(),
            dark_scheme_query: consts::DARK_SCHEME_QUERY.to_owned(),
            skill_bar_selector: consts::SKILL_BAR_SELECTOR.to_owned(),
            width_attribute: consts::WIDTH_ATTRIBUTE.to_owned(),
            transition: consts::WIDTH_TRANSITION.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse an override block. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] when the text is not a JSON object of
    /// string fields.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}
