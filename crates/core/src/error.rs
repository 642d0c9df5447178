//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog ports.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error raised by catalog collaborators (repository, location lookup).
///
/// "Not found" is deliberately absent: a missed lookup is reported as `None`,
/// not as an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A value failed validation (e.g. negative price, blank name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A write collided with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The backing store failed.
    #[error("storage failure: {0}")]
    Storage(String),

    /// A remote collaborator could not be reached.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// A collaborator gave up waiting.
    #[error("timed out: {0}")]
    Timeout(String),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        assert_eq!(
            CatalogError::validation("price must not be negative").to_string(),
            "validation failed: price must not be negative"
        );
        assert_eq!(
            CatalogError::unavailable("location service").to_string(),
            "service unavailable: location service"
        );
    }
}
