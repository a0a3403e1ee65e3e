//! Content globs the Tailwind build scans for utility class names.
//!
//! `tailwind.config.js` at the repository root is the file the build tool
//! reads; this module holds the same list for tooling and tests. Only the
//! `<root>/**/*.<ext>` shape is supported: brace sets, character classes and
//! `?` wildcards are rejected rather than matched literally.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::Deserialize;

use crate::error::SiteError;

/// Default scan list: Django templates and scripts, plus the wasm glue.
pub const DEFAULT_CONTENT: [&str; 5] = [
    "./templates/**/*.html",
    "./static/js/**/*.js",
    "./website/templates/**/*.html",
    "./website/static/js/**/*.js",
    "./pkg/**/*.js",
];

/// One `<root>/**/*.<ext>` pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentGlob {
    pub root: String,
    pub extension: String,
}

impl ContentGlob {
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidGlob`] for any other pattern shape.
    pub fn parse(pattern: &str) -> Result<Self, SiteError> {
        let invalid = || SiteError::InvalidGlob(pattern.to_owned());
        let trimmed = pattern.strip_prefix("./").unwrap_or(pattern);
        let (root, file) = trimmed.split_once("/**/").ok_or_else(invalid)?;
        let extension = file.strip_prefix("*.").ok_or_else(invalid)?;

        let bad_segment =
            |s: &str| s.is_empty() || s.starts_with('/') || s.contains(['*', '?', '{', '}', ',', '[', ']']);
        if bad_segment(root) || bad_segment(extension) || extension.contains('/') {
            return Err(invalid());
        }
        Ok(Self { root: root.to_owned(), extension: extension.to_owned() })
    }

    /// Whether a `/`-separated path relative to the project root matches.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let path = path.strip_prefix("./").unwrap_or(path);
        let Some(rest) = path.strip_prefix(self.root.as_str()).and_then(|r| r.strip_prefix('/')) else {
            return false;
        };
        let file = rest.rsplit('/').next().unwrap_or(rest);
        file.strip_suffix(self.extension.as_str())
            .and_then(|stem| stem.strip_suffix('.'))
            .is_some_and(|stem| !stem.is_empty())
    }
}

/// The `content` list of the Tailwind config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContentScan {
    pub content: Vec<String>,
}

impl Default for ContentScan {
    fn default() -> Self {
        Self { content: DEFAULT_CONTENT.iter().map(|s| (*s).to_owned()).collect() }
    }
}

impl ContentScan {
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] if `raw` is not a JSON `{ "content": [...] }` object.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// # Errors
    ///
    /// Returns [`SiteError::InvalidGlob`] for the first unsupported pattern.
    pub fn globs(&self) -> Result<Vec<ContentGlob>, SiteError> {
        self.content.iter().map(|pattern| ContentGlob::parse(pattern)).collect()
    }

    /// Whether any pattern matches `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidGlob`] for the first unsupported pattern.
    pub fn matches(&self, path: &str) -> Result<bool, SiteError> {
        Ok(self.globs()?.iter().any(|glob| glob.matches(path)))
    }
}
