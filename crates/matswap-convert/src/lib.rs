//! matswap Recipe Rewriter
//!
//! Turns a recipe written for one material family into the equivalent recipe
//! for another, e.g. an oak door recipe into a birch door recipe.
//!
//! # Core Concepts
//!
//! - [`RecipeConverter`]: Copies a template and converts the copy
//! - [`Rewriter`]: Walks a record's convertible-field plan in place
//! - [`Substitution`]: Maps one leaf value from the source material
//!   onto the destination material
//!
//! # Example
//!
//! ```rust
//! use matswap_convert::RecipeConverter;
//! use matswap_item::{BlockType, Ingredient, Item};
//! use matswap_template::{RecipeTemplate, StonecutterRecipeTemplate};
//!
//! let item = |id: &str| Item::parse(id).unwrap();
//! let oak = BlockType::new("oak".parse().unwrap())
//!     .with_child("planks", item("oak_planks"))
//!     .with_child("slab", item("oak_slab"));
//! let birch = BlockType::new("birch".parse().unwrap())
//!     .with_child("planks", item("birch_planks"))
//!     .with_child("slab", item("birch_slab"));
//!
//! let recipe =
//!     StonecutterRecipeTemplate::new(Ingredient::of(item("oak_planks")), item("oak_slab"), 2);
//! let birch_recipe = RecipeConverter::new()
//!     .create_similar(&recipe, &oak, &birch, &item("birch_planks"), None)
//!     .unwrap();
//!
//! assert_eq!(birch_recipe.to_json().unwrap()["result"], "minecraft:birch_slab");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod converter;
pub mod error;
pub mod rewriter;
pub mod substitution;

pub use config::ConverterConfig;
pub use converter::RecipeConverter;
pub use error::{ConversionSite, ConvertError};
pub use rewriter::Rewriter;
pub use substitution::Substitution;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
