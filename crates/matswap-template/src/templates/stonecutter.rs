//! Stonecutter recipes

use crate::error::TemplateError;
use crate::template::{RecipeMeta, RecipeTemplate};
use matswap_item::{Ingredient, Item, ResourceLocation};
use matswap_shape::{DeclaredType, FieldDecl, FieldSlot, LeafKind, Record, Shape};
use serde::{Deserialize, Serialize};
use serde_json::Value;

static STONECUTTER_SHAPE: Shape = Shape::new(
    "StonecutterRecipeTemplate",
    &[
        FieldDecl::new("meta", DeclaredType::Opaque),
        FieldDecl::new("ingredient", DeclaredType::Leaf(LeafKind::Ingredient)),
        FieldDecl::new("result", DeclaredType::Leaf(LeafKind::Item)),
        FieldDecl::new("count", DeclaredType::Opaque),
    ],
);

fn default_count() -> u32 {
    1
}

/// Single-input recipe: one ingredient cut into `count` of `result`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StonecutterRecipeTemplate {
    /// Recipe metadata
    #[serde(flatten)]
    pub meta: RecipeMeta,
    /// Input
    pub ingredient: Ingredient,
    /// Output item
    pub result: Item,
    /// Output count
    #[serde(default = "default_count")]
    pub count: u32,
}

impl StonecutterRecipeTemplate {
    /// Registered kind
    pub const KIND: &'static str = "minecraft:stonecutting";

    /// Create recipe
    #[must_use]
    pub fn new(ingredient: Ingredient, result: Item, count: u32) -> Self {
        Self {
            meta: RecipeMeta::new(ResourceLocation::minecraft("stonecutting")),
            ingredient,
            result,
            count,
        }
    }
}

impl Record for StonecutterRecipeTemplate {
    fn shape(&self) -> &'static Shape {
        &STONECUTTER_SHAPE
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldSlot<'_>> {
        match name {
            "ingredient" => Some(FieldSlot::scalar(&mut self.ingredient)),
            "result" => Some(FieldSlot::scalar(&mut self.result)),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        format!("stonecutting {} -> {} {}", self.ingredient, self.count, self.result)
    }
}

impl RecipeTemplate for StonecutterRecipeTemplate {
    fn meta(&self) -> &RecipeMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecipeMeta {
        &mut self.meta
    }

    fn as_record(&self) -> &dyn Record {
        self
    }

    fn as_record_mut(&mut self) -> &mut dyn Record {
        self
    }

    fn to_json(&self) -> Result<Value, TemplateError> {
        serde_json::to_value(self).map_err(TemplateError::Serialize)
    }
}
