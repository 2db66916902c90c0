//! Crafting-table recipes
//!
//! Shaped and shapeless recipes share [`CraftingBase`], which holds their
//! metadata and result stack. It is embedded as the parent record, so the
//! result is converted through the parent shape.

use crate::error::TemplateError;
use crate::template::{RecipeMeta, RecipeTemplate};
use indexmap::IndexMap;
use matswap_item::{Ingredient, ItemStack, ResourceLocation};
use matswap_shape::{DeclaredType, FieldDecl, FieldSlot, LeafKind, Record, Shape, TypeKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

static CRAFTING_BASE_SHAPE: Shape = Shape::new(
    "CraftingBase",
    &[
        FieldDecl::new("meta", DeclaredType::Opaque),
        FieldDecl::new("result", DeclaredType::Leaf(LeafKind::ItemStack)),
    ],
);

static SHAPED_SHAPE: Shape = Shape::new(
    "ShapedRecipeTemplate",
    &[
        FieldDecl::new("pattern", DeclaredType::Sequence(TypeKind::Opaque)),
        FieldDecl::new(
            "keys",
            DeclaredType::Mapping(TypeKind::Opaque, TypeKind::Leaf(LeafKind::Ingredient)),
        ),
    ],
)
.with_parent(&CRAFTING_BASE_SHAPE);

static SHAPELESS_SHAPE: Shape = Shape::new(
    "ShapelessRecipeTemplate",
    &[FieldDecl::new(
        "ingredients",
        DeclaredType::Sequence(TypeKind::Leaf(LeafKind::Ingredient)),
    )],
)
.with_parent(&CRAFTING_BASE_SHAPE);

/// Metadata and result shared by crafting-table recipes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftingBase {
    /// Recipe metadata
    #[serde(flatten)]
    pub meta: RecipeMeta,
    /// Crafted stack
    pub result: ItemStack,
}

impl CraftingBase {
    /// Base for a recipe of `kind` producing `result`
    #[must_use]
    pub fn new(kind: ResourceLocation, result: ItemStack) -> Self {
        Self {
            meta: RecipeMeta::new(kind),
            result,
        }
    }
}

impl Record for CraftingBase {
    fn shape(&self) -> &'static Shape {
        &CRAFTING_BASE_SHAPE
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldSlot<'_>> {
        match name {
            "result" => Some(FieldSlot::scalar(&mut self.result)),
            _ => None,
        }
    }
}

/// Grid recipe with a pattern and a symbol-to-ingredient key
///
/// ```json
/// {
///   "type": "minecraft:crafting_shaped",
///   "pattern": ["##", "##"],
///   "key": {"#": {"item": "minecraft:oak_planks"}},
///   "result": {"item": "minecraft:crafting_table", "count": 1}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapedRecipeTemplate {
    /// Metadata and result
    #[serde(flatten)]
    pub base: CraftingBase,
    /// Grid rows; each character is a key symbol or a space
    pub pattern: Vec<String>,
    /// Ingredient for each pattern symbol
    #[serde(rename = "key")]
    pub keys: IndexMap<String, Ingredient>,
}

impl ShapedRecipeTemplate {
    /// Registered kind
    pub const KIND: &'static str = "minecraft:crafting_shaped";

    /// Empty shaped recipe producing `result`
    #[must_use]
    pub fn new(result: ItemStack) -> Self {
        Self {
            base: CraftingBase::new(ResourceLocation::minecraft("crafting_shaped"), result),
            pattern: Vec::new(),
            keys: IndexMap::new(),
        }
    }

    /// Append a pattern row
    #[must_use]
    pub fn row(mut self, row: impl Into<String>) -> Self {
        self.pattern.push(row.into());
        self
    }

    /// Bind a pattern symbol
    #[must_use]
    pub fn key(mut self, symbol: char, ingredient: Ingredient) -> Self {
        self.keys.insert(symbol.to_string(), ingredient);
        self
    }
}

impl Record for ShapedRecipeTemplate {
    fn shape(&self) -> &'static Shape {
        &SHAPED_SHAPE
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldSlot<'_>> {
        match name {
            "keys" => Some(FieldSlot::mapping(&mut self.keys)),
            _ => None,
        }
    }

    fn parent_mut(&mut self) -> Option<&mut dyn Record> {
        Some(&mut self.base)
    }

    fn describe(&self) -> String {
        format!("shaped recipe for {}", self.base.result)
    }
}

impl RecipeTemplate for ShapedRecipeTemplate {
    fn meta(&self) -> &RecipeMeta {
        &self.base.meta
    }

    fn meta_mut(&mut self) -> &mut RecipeMeta {
        &mut self.base.meta
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

/// Crafting recipe with an unordered ingredient list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapelessRecipeTemplate {
    /// Metadata and result
    #[serde(flatten)]
    pub base: CraftingBase,
    /// Ingredients, one per crafting slot used
    pub ingredients: Vec<Ingredient>,
}

impl ShapelessRecipeTemplate {
    /// Registered kind
    pub const KIND: &'static str = "minecraft:crafting_shapeless";

    /// Empty shapeless recipe producing `result`
    #[must_use]
    pub fn new(result: ItemStack) -> Self {
        Self {
            base: CraftingBase::new(ResourceLocation::minecraft("crafting_shapeless"), result),
            ingredients: Vec::new(),
        }
    }

    /// Append an ingredient
    #[must_use]
    pub fn ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }
}

impl Record for ShapelessRecipeTemplate {
    fn shape(&self) -> &'static Shape {
        &SHAPELESS_SHAPE
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldSlot<'_>> {
        match name {
            "ingredients" => Some(FieldSlot::sequence(&mut self.ingredients)),
            _ => None,
        }
    }

    fn parent_mut(&mut self) -> Option<&mut dyn Record> {
        Some(&mut self.base)
    }

    fn describe(&self) -> String {
        format!("shapeless recipe for {}", self.base.result)
    }
}

impl RecipeTemplate for ShapelessRecipeTemplate {
    fn meta(&self) -> &RecipeMeta {
        &self.base.meta
    }

    fn meta_mut(&mut self) -> &mut RecipeMeta {
        &mut self.base.meta
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
