//! matswap Item Model
//!
//! Host-side value types that material substitution operates on.
//!
//! # Core Concepts
//!
//! - [`ResourceLocation`]: Namespaced identifier (`namespace:path`)
//! - [`Item`]: A single item kind, identified by its location
//! - [`ItemStack`]: An item with a count
//! - [`Ingredient`]: Disjunctive match over acceptable items
//! - [`Material`]: An item family that can map its items onto another family
//! - [`BlockType`]: Table-backed [`Material`] loaded from configuration
//!
//! # Example
//!
//! ```rust
//! use matswap_item::{BlockType, Item, Material};
//!
//! let oak = BlockType::new("minecraft:oak".parse().unwrap())
//!     .with_child("planks", Item::parse("minecraft:oak_planks").unwrap());
//! let birch = BlockType::new("minecraft:birch".parse().unwrap())
//!     .with_child("planks", Item::parse("minecraft:birch_planks").unwrap());
//!
//! let planks = Item::parse("minecraft:oak_planks").unwrap();
//! let converted = oak.change_item_type(&planks, &birch).unwrap();
//! assert_eq!(converted.to_string(), "minecraft:birch_planks");
//! ```

#![warn(unreachable_pub)]

mod error;
mod ingredient;
mod item;
mod location;
mod material;

pub use error::ItemError;
pub use ingredient::Ingredient;
pub use item::{Item, ItemStack};
pub use location::ResourceLocation;
pub use material::{BlockType, Material};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
