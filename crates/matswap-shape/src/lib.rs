//! matswap Field Locator
//!
//! Finds the fields of a record that may need material substitution.
//!
//! # Core Concepts
//!
//! - [`Record`]: A value whose fields are reachable through a declared [`Shape`]
//! - [`Shape`]: Static descriptor listing a record type's fields and parent
//! - [`FieldSlot`]: Mutable, category-tagged view of one field
//! - [`ConvertiblePlan`]: Ordered [`FieldRef`]s of every convertible field,
//!   including those declared on ancestor shapes
//! - [`PlanCache`]: Process-wide, build-once cache of plans by [`ShapeId`]
//!
//! # Example
//!
//! ```rust
//! use matswap_item::Item;
//! use matswap_shape::{DeclaredType, FieldDecl, FieldSlot, LeafKind, PlanCache, Record, Shape};
//!
//! #[derive(Debug)]
//! struct Smelting {
//!     input: Item,
//!     experience: u32,
//! }
//!
//! static SMELTING: Shape = Shape::new(
//!     "Smelting",
//!     &[
//!         FieldDecl::new("input", DeclaredType::Leaf(LeafKind::Item)),
//!         FieldDecl::new("experience", DeclaredType::Opaque),
//!     ],
//! );
//!
//! impl Record for Smelting {
//!     fn shape(&self) -> &'static Shape {
//!         &SMELTING
//!     }
//!
//!     fn field_mut(&mut self, name: &str) -> Option<FieldSlot<'_>> {
//!         match name {
//!             "input" => Some(FieldSlot::scalar(&mut self.input)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let recipe = Smelting { input: Item::parse("oak_log").unwrap(), experience: 1 };
//! let plan = PlanCache::global().plan_for(&recipe);
//! assert_eq!(plan.len(), 1);
//! assert_eq!(plan.fields()[0].name(), "input");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod cache;
mod leaf;
mod plan;
mod record;
mod slot;

pub use cache::PlanCache;
pub use leaf::{Convertible, LeafKind, LeafRef, LeafValue};
pub use plan::{build_plan, ConvertiblePlan, FieldCategory, FieldRef};
pub use record::{DeclaredType, FieldDecl, Record, Shape, ShapeId, TypeKind};
pub use slot::{EntryRewrite, FieldSlot, LeafCell, LeafMap, LeafSeq, OptionalSlot};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
