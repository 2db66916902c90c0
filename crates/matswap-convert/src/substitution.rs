//! Leaf substitution
//!
//! Maps a single item, stack or ingredient from the source material onto the
//! destination material.

use crate::config::ConverterConfig;
use matswap_item::{Ingredient, Item, Material};
use matswap_shape::{LeafRef, LeafValue};

/// One source-to-destination material pairing
#[derive(Debug, Clone, Copy)]
pub struct Substitution<'a> {
    from: &'a dyn Material,
    to: &'a dyn Material,
    placeholder: &'a Item,
}

impl<'a> Substitution<'a> {
    /// Pair `from` with `to`, skipping `config.placeholder` in ingredients
    #[must_use]
    pub fn new(from: &'a dyn Material, to: &'a dyn Material, config: &'a ConverterConfig) -> Self {
        Self {
            from,
            to,
            placeholder: &config.placeholder,
        }
    }

    /// Source material
    #[inline]
    #[must_use]
    pub fn source(&self) -> &'a dyn Material {
        self.from
    }

    /// Destination material
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &'a dyn Material {
        self.to
    }

    /// Replacement for `value`, or `None` if it has no analogue
    ///
    /// - a stack becomes a count-1 stack of the new item
    /// - an ingredient narrows to its first alternative that converts,
    ///   ignoring the placeholder
    #[must_use]
    pub fn apply(&self, value: LeafRef<'_>) -> Option<LeafValue> {
        match value {
            LeafRef::Stack(stack) => self
                .item(stack.item())
                .map(|item| LeafValue::Stack(item.default_instance())),
            LeafRef::Item(item) => self.item(item).map(LeafValue::Item),
            LeafRef::Ingredient(ingredient) => ingredient
                .items()
                .iter()
                .filter(|item| *item != self.placeholder)
                .find_map(|item| self.item(item))
                .map(|item| LeafValue::Ingredient(Ingredient::of(item))),
            LeafRef::Other => None,
        }
    }

    fn item(&self, item: &Item) -> Option<Item> {
        self.from.change_item_type(item, self.to)
    }
}
