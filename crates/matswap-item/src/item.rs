//! Items and item stacks

use crate::error::ItemError;
use crate::location::ResourceLocation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single item kind
///
/// Serialized as its identifier string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(ResourceLocation);

impl Item {
    /// Identifier of the "no item" placeholder
    pub const BARRIER_ID: &'static str = "minecraft:barrier";

    /// Create from identifier
    #[inline]
    #[must_use]
    pub fn new(id: ResourceLocation) -> Self {
        Self(id)
    }

    /// Parse from identifier string
    ///
    /// # Errors
    /// Returns error if the identifier is malformed
    #[inline]
    pub fn parse(id: &str) -> Result<Self, ItemError> {
        id.parse().map(Self)
    }

    /// The "no item" placeholder
    #[must_use]
    pub fn barrier() -> Self {
        Self(ResourceLocation::from_static("minecraft", "barrier"))
    }

    /// Item identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ResourceLocation {
        &self.0
    }

    /// Whether this is the "no item" placeholder
    #[inline]
    #[must_use]
    pub fn is_barrier(&self) -> bool {
        self.0.namespace() == "minecraft" && self.0.path() == "barrier"
    }

    /// Default stack of this item (count 1)
    #[inline]
    #[must_use]
    pub fn default_instance(&self) -> ItemStack {
        ItemStack::new(self.clone(), 1)
    }
}

impl From<ResourceLocation> for Item {
    fn from(id: ResourceLocation) -> Self {
        Self(id)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// An item with a count
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    item: Item,
    #[serde(default = "default_count")]
    count: u32,
}

fn default_count() -> u32 {
    1
}

impl ItemStack {
    /// Create stack
    #[inline]
    #[must_use]
    pub fn new(item: Item, count: u32) -> Self {
        Self { item, count }
    }

    /// Stacked item
    #[inline]
    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Stack count
    #[inline]
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Same stack with a different count
    #[inline]
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.item)
    }
}
