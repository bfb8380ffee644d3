//! Error types for dictionary reconstruction.
//!
//! Heuristic misses (partial entries, orphan continuation lines, blank pages)
//! are never errors. Only faults of the token provider, malformed inputs and
//! I/O surface here.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reconstructing a dictionary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The token provider could not produce tokens for a page
    #[error("Token provider failed on page {page}: {reason}")]
    Provider {
        /// Zero-based page index
        page: usize,
        /// Reason reported by the provider
        reason: String,
    },

    /// Requested page does not exist in the source
    #[error("Page {page} out of range (document has {page_count} pages)")]
    PageOutOfRange {
        /// Zero-based page index that was requested
        page: usize,
        /// Number of pages available
        page_count: usize,
    },

    /// Token dump is structurally valid JSON but not a usable dump
    #[error("Invalid token dump: {0}")]
    InvalidTokenDump(String),

    /// Configuration value out of its accepted domain
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a provider failure for `page`.
    pub fn provider(page: usize, reason: impl Into<String>) -> Self {
        Error::Provider {
            page,
            reason: reason.into(),
        }
    }

    /// Whether this error originates from the token provider.
    ///
    /// The document pipeline only applies its skip policy to these.
    pub fn is_provider_failure(&self) -> bool {
        matches!(self, Error::Provider { .. } | Error::PageOutOfRange { .. })
    }
}
