//! Error taxonomy for the site runtime.
//!
//! Every variant is local and non-fatal: callers log and degrade rather than
//! abort the page.

/// Failures surfaced by the adapters and components.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A required element is absent from the markup.
    #[error("required element not found: {0}")]
    MissingElement(String),
    /// `localStorage` is unavailable or rejected the operation.
    #[error("storage unavailable: {0}")]
    Storage(String),
    /// A DOM call threw.
    #[error("dom operation failed: {0}")]
    Dom(String),
    /// The inline config block is not valid JSON for [`crate::config::SiteConfig`].
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    /// A content glob is not of the `<root>/**/*.<ext>` shape.
    #[error("unsupported content glob: {0}")]
    InvalidGlob(String),
}
