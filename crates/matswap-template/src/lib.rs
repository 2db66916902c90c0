//! matswap Template Registry
//!
//! Strongly-typed recipe templates and the registry that rebuilds them from
//! their JSON form.
//!
//! # Core Concepts
//!
//! - [`RecipeTemplate`]: A recipe that is a [`Record`](matswap_shape::Record)
//!   and can write itself back to JSON
//! - [`TemplateRegistry`]: Maps a recipe kind (`"type"`) to a factory
//! - [`ShapedRecipeTemplate`], [`ShapelessRecipeTemplate`],
//!   [`StonecutterRecipeTemplate`]: Built-in templates
//!
//! # Example
//!
//! ```rust
//! use matswap_template::TemplateRegistry;
//! use serde_json::json;
//!
//! let registry = TemplateRegistry::with_defaults();
//! let recipe = registry
//!     .read(&json!({
//!         "type": "minecraft:stonecutting",
//!         "ingredient": {"item": "minecraft:oak_planks"},
//!         "result": "minecraft:oak_slab",
//!         "count": 2
//!     }))
//!     .unwrap();
//! assert_eq!(recipe.kind().to_string(), "minecraft:stonecutting");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod registry;
pub mod template;
pub mod templates;

pub use error::TemplateError;
pub use registry::{deserialize_template, TemplateFactory, TemplateRegistry};
pub use template::{RecipeMeta, RecipeTemplate, UnlockCriterion};
pub use templates::{
    CraftingBase, ShapedRecipeTemplate, ShapelessRecipeTemplate, StonecutterRecipeTemplate,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
