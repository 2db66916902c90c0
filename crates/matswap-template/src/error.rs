//! Error types for the Template Registry

use matswap_item::ItemError;

/// Errors while reading or writing recipe templates
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Serialized recipe has no string `"type"` field
    #[error("recipe has no \"type\" field")]
    MissingKind,

    /// `"type"` is not a valid resource location
    #[error("invalid recipe type '{value}': {source}")]
    InvalidKind {
        /// Offending type string
        value: String,
        /// Parse failure
        #[source]
        source: ItemError,
    },

    /// No factory registered for the recipe type
    #[error("unsupported recipe type: {0}")]
    UnsupportedKind(String),

    /// Factory could not deserialize the recipe
    #[error("malformed {kind} recipe: {source}")]
    Malformed {
        /// Recipe type being read
        kind: String,
        /// Deserialization failure
        #[source]
        source: serde_json::Error,
    },

    /// Template could not be written to JSON
    #[error("failed to serialize recipe: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl TemplateError {
    /// Create malformed-recipe error
    pub fn malformed(kind: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Malformed {
            kind: kind.into(),
            source,
        }
    }
}
