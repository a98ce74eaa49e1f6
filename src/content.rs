//! Technical report content loading.

use std::fmt;
use std::path::Path;

/// State of the report content panel.
///
/// The three states are mutually exclusive: a panel is either waiting
/// for content, holding the full document text, or holding a failure
/// message. There is no partial content and a failed load is never
/// retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentState {
    /// Content not yet available; the loading panel renders.
    Loading,
    /// Full document (or rendered HTML) ready for display.
    Loaded(String),
    /// Load failed with a human-readable reason.
    Failed(String),
}

impl ContentState {
    /// True when content is ready for display.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

impl fmt::Display for ContentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Loaded(_) => write!(f, "loaded"),
            Self::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Loads the technical report document from its fixed content path.
///
/// A single read-only fetch: success yields the raw markdown text,
/// failure yields the error state carrying a readable reason. The only
/// side effect of a failure is a diagnostic log line; the caller
/// renders the error state instead of any partial content.
///
/// # Arguments
///
/// * `path`: Path to the report markdown file
///
/// # Returns
///
/// Loaded document text or the failure state
pub fn load_report(path: impl AsRef<Path>) -> ContentState {
    let path = path.as_ref();

    match std::fs::read_to_string(path) {
        Ok(text) => ContentState::Loaded(text),
        Err(e) => {
            let reason = format!("Failed to load {}: {}", path.display(), e);
            eprintln!("Warning: {}", reason);
            ContentState::Failed(reason)
        }
    }
}
