//! The recipe template contract and shared recipe metadata

use crate::error::TemplateError;
use matswap_item::{Item, ResourceLocation};
use matswap_shape::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Advancement criterion that unlocks a recipe once the player holds `item`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockCriterion {
    /// Item that unlocks the recipe
    pub item: Item,
}

/// Metadata carried by every template and never substituted
///
/// Serialized flattened into the recipe object, so `kind` lands on the
/// `"type"` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeMeta {
    /// Recipe kind, as registered with the template registry
    #[serde(rename = "type")]
    pub kind: ResourceLocation,

    /// Identity of the produced recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceLocation>,

    /// Recipe-book group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Unlock criterion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_by: Option<UnlockCriterion>,
}

impl RecipeMeta {
    /// Metadata for a recipe of `kind`
    #[must_use]
    pub fn new(kind: ResourceLocation) -> Self {
        Self {
            kind,
            id: None,
            group: None,
            unlocked_by: None,
        }
    }

    /// Set group
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set unlock item
    #[must_use]
    pub fn with_unlocked_by(mut self, item: Item) -> Self {
        self.unlocked_by = Some(UnlockCriterion { item });
        self
    }
}

/// A serializable recipe that the converter can rewrite
///
/// Every template is a [`Record`], so its convertible fields are found from
/// its shape. Metadata accessors are provided on top of [`meta`](Self::meta).
pub trait RecipeTemplate: Record + Send + Sync {
    /// Shared metadata
    fn meta(&self) -> &RecipeMeta;

    /// Shared metadata, mutably
    fn meta_mut(&mut self) -> &mut RecipeMeta;

    /// This template as a plain record
    fn as_record(&self) -> &dyn Record;

    /// This template as a plain mutable record
    fn as_record_mut(&mut self) -> &mut dyn Record;

    /// Serialize to the form accepted by
    /// [`TemplateRegistry::read`](crate::TemplateRegistry::read)
    ///
    /// # Errors
    /// Returns [`TemplateError::Serialize`] if a field cannot be serialized.
    fn to_json(&self) -> Result<Value, TemplateError>;

    /// Recipe kind
    fn kind(&self) -> &ResourceLocation {
        &self.meta().kind
    }

    /// Recipe identity, if stamped
    fn id(&self) -> Option<&ResourceLocation> {
        self.meta().id.as_ref()
    }

    /// Stamp recipe identity
    fn set_id(&mut self, id: ResourceLocation) {
        self.meta_mut().id = Some(id);
    }

    /// Item that unlocks the recipe
    fn unlocked_by(&self) -> Option<&Item> {
        self.meta().unlocked_by.as_ref().map(|c| &c.item)
    }

    /// Replace the unlock criterion
    fn set_unlocked_by(&mut self, item: Item) {
        self.meta_mut().unlocked_by = Some(UnlockCriterion { item });
    }
}
