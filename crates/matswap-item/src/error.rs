//! Error types for the item model

/// Errors while parsing item identifiers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    /// Identifier was empty
    #[error("empty resource location")]
    Empty,

    /// Namespace part is empty or holds invalid characters
    #[error("invalid namespace in resource location '{0}'")]
    InvalidNamespace(String),

    /// Path part is empty or holds invalid characters
    #[error("invalid path in resource location '{0}'")]
    InvalidPath(String),
}
