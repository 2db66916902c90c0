//! Built-in recipe templates

mod crafting;
mod stonecutter;

pub use crafting::{CraftingBase, ShapedRecipeTemplate, ShapelessRecipeTemplate};
pub use stonecutter::StonecutterRecipeTemplate;
