//! Error types for landing-links.

use thiserror::Error;

/// Result type for link resolution.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building resolvers or resolving links.
#[derive(Error, Debug)]
pub enum Error {
    /// Required setup context was missing when a resolver was constructed.
    #[error("Landing page configuration error: {0}")]
    Configuration(String),

    /// A link id (or the value behind it) could not be found.
    #[error("{0}")]
    UnknownReference(String),

    /// No resolver is registered for the link type.
    #[error("{0}")]
    UnknownLinkType(String),

    /// Listing store has no record for the requested id.
    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error means a link could not be resolved within a known type.
    pub fn is_unknown_reference(&self) -> bool {
        matches!(self, Error::UnknownReference(_))
    }
}
