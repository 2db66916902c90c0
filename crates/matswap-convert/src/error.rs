//! Error types for the Recipe Rewriter

use matswap_item::ResourceLocation;
use matswap_template::TemplateError;
use std::fmt;

/// Record and material pairing a conversion failed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSite {
    /// Description of the record being converted
    pub recipe: String,
    /// Source material
    pub from: ResourceLocation,
    /// Destination material
    pub to: ResourceLocation,
}

impl fmt::Display for ConversionSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {} to {}", self.recipe, self.from, self.to)
    }
}

/// Conversion failures
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The record declares no field that could hold a substitutable value
    #[error("nothing to convert in {site}")]
    NothingToConvert {
        /// Where it failed
        site: Box<ConversionSite>,
    },

    /// A sequence or mapping field had nothing to substitute
    #[error("no value in field '{field}' of {site}")]
    ZeroProgress {
        /// Field name
        field: &'static str,
        /// Where it failed
        site: Box<ConversionSite>,
    },

    /// A single-value field had no analogue in the destination material
    #[error("cannot convert {value} in field '{field}' of {site}")]
    ScalarSubstitution {
        /// The value that did not convert
        value: String,
        /// Field name
        field: &'static str,
        /// Where it failed
        site: Box<ConversionSite>,
    },

    /// A shape declares a field the record does not expose as declared
    #[error("shape {shape} declares field '{field}' but the record has no matching slot")]
    ShapeMismatch {
        /// Declaring shape
        shape: &'static str,
        /// Field name
        field: &'static str,
    },

    /// The working copy could not be made
    #[error("failed to copy recipe: {0}")]
    Template(#[from] TemplateError),
}

impl ConvertError {
    /// Record and materials involved, if the failure happened while rewriting
    #[must_use]
    pub fn site(&self) -> Option<&ConversionSite> {
        match self {
            Self::NothingToConvert { site }
            | Self::ZeroProgress { site, .. }
            | Self::ScalarSubstitution { site, .. } => Some(site),
            Self::ShapeMismatch { .. } | Self::Template(_) => None,
        }
    }
}
