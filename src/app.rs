//! Page-level wiring of the theme controller and skill bar animator.
//!
//! ARCHITECTURE
//! ============
//! [`App`] owns the adapters and reacts to [`PageEvent`]s. [`wire`] registers
//! it on a [`Dispatcher`] so the browser glue and tests drive it the same way.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SiteConfig;
use crate::env::{ColorScheme, Page, PreferenceStore};
use crate::events::{Dispatcher, EventKind, PageEvent};
use crate::skill_bars::{self, AnimateReport};
use crate::theme::{Theme, ThemeController};

/// Page runtime state.
pub struct App<S, C, P: Page> {
    pub store: S,
    pub scheme: C,
    pub page: P,
    pub config: SiteConfig,
    theme: Option<ThemeController<P::Icon>>,
}

impl<S, C, P> App<S, C, P>
where
    S: PreferenceStore,
    C: ColorScheme,
    P: Page,
{
    pub fn new(store: S, scheme: C, page: P, config: SiteConfig) -> Self {
        Self { store, scheme, page, config, theme: None }
    }

    /// Set up the theme once, then fill visible skill bars.
    ///
    /// Missing toggle markup skips theme wiring; the bars still animate.
    pub fn on_load(&mut self) -> AnimateReport {
        if self.theme.is_none() {
            match ThemeController::init(&self.store, &self.scheme, &mut self.page, &self.config) {
                Ok(controller) => self.theme = Some(controller),
                Err(err) => log::warn!("theme: toggle disabled: {err}"),
            }
        }
        self.animate_bars()
    }

    pub fn on_scroll(&mut self) -> AnimateReport {
        self.animate_bars()
    }

    /// Toggle the theme when the click hit the toggle. Returns the new theme.
    pub fn on_click(&mut self, target_id: &str) -> Option<Theme> {
        if target_id != self.config.toggle_id {
            return None;
        }
        let controller = self.theme.as_mut()?;
        match controller.toggle(&mut self.store, &mut self.page, &self.config) {
            Ok(theme) => Some(theme),
            Err(err) => {
                log::warn!("theme: toggle failed: {err}");
                None
            }
        }
    }

    pub fn handle(&mut self, event: &PageEvent) {
        match event {
            PageEvent::Load => {
                self.on_load();
            }
            PageEvent::Scroll => {
                self.on_scroll();
            }
            PageEvent::Click { target_id } => {
                self.on_click(target_id);
            }
        }
    }

    /// The active theme, or `None` while theme wiring is disabled.
    #[must_use]
    pub fn theme(&self) -> Option<Theme> {
        self.theme.as_ref().map(ThemeController::current)
    }

    fn animate_bars(&mut self) -> AnimateReport {
        match skill_bars::animate(&mut self.page, &self.config) {
            Ok(report) => {
                log::debug!("skill bars: applied {} of {}", report.applied, report.scanned);
                report
            }
            Err(err) => {
                log::warn!("skill bars: {err}");
                AnimateReport::default()
            }
        }
    }
}

/// Subscribe `app` to load, scroll and click events.
pub fn wire<S, C, P>(app: &Rc<RefCell<App<S, C, P>>>, dispatcher: &mut Dispatcher)
where
    S: PreferenceStore + 'static,
    C: ColorScheme + 'static,
    P: Page + 'static,
{
    for kind in [EventKind::Load, EventKind::Scroll, EventKind::Click] {
        let app = Rc::clone(app);
        dispatcher.subscribe(kind, move |event| app.borrow_mut().handle(event));
    }
}
