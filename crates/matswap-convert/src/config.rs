//! Converter configuration

use matswap_item::Item;
use serde::{Deserialize, Serialize};

/// Converter settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Ingredient alternative that is never substituted
    pub placeholder: Item,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            placeholder: Item::barrier(),
        }
    }
}

impl ConverterConfig {
    /// Set placeholder item
    #[inline]
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: Item) -> Self {
        self.placeholder = placeholder;
        self
    }
}
