//! Client-side runtime for the portfolio site.
//!
//! Compiled to WebAssembly with the `browser` feature, this crate drives the
//! static markup: it resolves and toggles the dark/light theme, persisting the
//! choice in `localStorage`, and fills skill bars as they scroll into view.
//! All page logic runs against the adapter traits in [`env`], so it is tested
//! natively without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Wires the components to load / scroll / click events |
//! | [`theme`] | Theme resolution and toggle |
//! | [`skill_bars`] | Viewport test and width fill for skill bars |
//! | [`events`] | Synchronous event dispatcher |
//! | [`env`] | Storage, color-scheme and page adapter traits |
//! | [`config`] | Markup names and transition, overridable per page |
//! | [`content`] | Tailwind content scan globs |
//! | [`error`] | [`error::SiteError`] |
//! | [`consts`] | Default names for the markup contract |
//! | `browser` | `web-sys` adapters and the wasm entry point (feature `browser`) |

pub mod app;
pub mod config;
pub mod consts;
pub mod content;
pub mod env;
pub mod error;
pub mod events;
pub mod skill_bars;
pub mod theme;

#[cfg(feature = "browser")]
pub mod browser;

#[cfg(test)]
mod fakes;
