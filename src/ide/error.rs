//! Error types for the listing cache.

use std::sync::Arc;

use thiserror::Error;

/// Reasons a parse result is not cached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    /// The document is not registered as listing content.
    #[error("{uri} is not a listing (language id {language_id})")]
    NotAListing {
        uri: Arc<str>,
        language_id: Arc<str>,
    },

    /// The document changed while it was being parsed.
    #[error("{uri} changed during parsing (version {started} -> {finished})")]
    StaleVersion {
        uri: Arc<str>,
        started: i32,
        finished: i32,
    },
}

pub type Result<T> = std::result::Result<T, ListingError>;
