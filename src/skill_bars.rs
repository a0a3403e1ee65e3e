//! Scroll-triggered fill for skill bars.
//!
//! Each visible bar gets its `data-width` copied into the inline `width`
//! style together with a width transition; CSS performs the animation.
//! Runs on load and on every scroll with no de-duplication, so repeated
//! triggers rewrite the same values.

#[cfg(test)]
#[path = "skill_bars_test.rs"]
mod skill_bars_test;

use crate::config::SiteConfig;
use crate::env::{Page, Rect};
use crate::error::SiteError;

/// Counts from one animation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimateReport {
    /// Bars found in the document.
    pub scanned: usize,
    /// Visible bars whose styles were written.
    pub applied: usize,
    /// Visible bars without a target width; their inline width was cleared.
    pub missing_width: usize,
}

/// Whether any part of `rect` lies within a viewport `viewport_height` tall.
///
/// A bar whose top sits exactly on the bottom edge is excluded; one whose
/// bottom sits exactly on the top edge is included.
#[must_use]
pub fn is_in_viewport(rect: Rect, viewport_height: f64) -> bool {
    rect.top < viewport_height && rect.bottom >= 0.0
}

/// Apply target widths to every visible skill bar.
///
/// # Errors
///
/// Returns [`SiteError::Dom`] if the bar query or a style write fails.
pub fn animate<P: Page>(page: &mut P, config: &SiteConfig) -> Result<AnimateReport, SiteError> {
    let bars = page.skill_bars(&config.skill_bar_selector)?;
    let viewport_height = page.viewport_height();
    let mut report = AnimateReport { scanned: bars.len(), ..AnimateReport::default() };

    for bar in &bars {
        if !is_in_viewport(page.bar_rect(bar), viewport_height) {
            continue;
        }
        let width = page.bar_attribute(bar, &config.width_attribute).unwrap_or_default();
        if width.is_empty() {
            report.missing_width += 1;
        }
        page.set_bar_style(bar, "width", &width)?;
        page.set_bar_style(bar, "transition", &config.transition)?;
        report.applied += 1;
    }

    if report.missing_width > 0 {
        log::debug!(
            "skill bars: {} visible bar(s) have no {}",
            report.missing_width,
            config.width_attribute
        );
    }
    Ok(report)
}
