//! Leaf substitutable values
//!
//! The three value kinds material substitution applies to, as a closed union.

use matswap_item::{Ingredient, Item, ItemStack};
use std::fmt;

/// Declared kind of a leaf field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    /// [`Item`]
    Item,
    /// [`ItemStack`]
    ItemStack,
    /// [`Ingredient`]
    Ingredient,
}

/// Borrowed view of a runtime value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafRef<'a> {
    /// Item stack
    Stack(&'a ItemStack),
    /// Direct item reference
    Item(&'a Item),
    /// Ingredient
    Ingredient(&'a Ingredient),
    /// Not substitutable (map keys such as pattern symbols, plain strings)
    Other,
}

impl LeafRef<'_> {
    /// Whether this is a substitutable value
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl fmt::Display for LeafRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stack(stack) => write!(f, "{stack}"),
            Self::Item(item) => write!(f, "{item}"),
            Self::Ingredient(ingredient) => write!(f, "{ingredient}"),
            Self::Other => f.write_str("<opaque>"),
        }
    }
}

/// Owned replacement value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafValue {
    /// Item stack
    Stack(ItemStack),
    /// Direct item reference
    Item(Item),
    /// Ingredient
    Ingredient(Ingredient),
}

impl LeafValue {
    /// Borrow as a [`LeafRef`]
    #[inline]
    #[must_use]
    pub fn as_leaf_ref(&self) -> LeafRef<'_> {
        match self {
            Self::Stack(stack) => LeafRef::Stack(stack),
            Self::Item(item) => LeafRef::Item(item),
            Self::Ingredient(ingredient) => LeafRef::Ingredient(ingredient),
        }
    }
}

/// A value that can sit in a convertible field or container
///
/// Implemented by the three leaf types, and by opaque element types
/// (`String`, `char`, integers) that only ever report [`LeafRef::Other`].
pub trait Convertible: Clone {
    /// Borrow as a [`LeafRef`]
    fn as_leaf(&self) -> LeafRef<'_>;

    /// Accept a replacement of the matching kind
    fn from_leaf(value: LeafValue) -> Option<Self>;
}

impl Convertible for Item {
    fn as_leaf(&self) -> LeafRef<'_> {
        LeafRef::Item(self)
    }

    fn from_leaf(value: LeafValue) -> Option<Self> {
        match value {
            LeafValue::Item(item) => Some(item),
            _ => None,
        }
    }
}

impl Convertible for ItemStack {
    fn as_leaf(&self) -> LeafRef<'_> {
        LeafRef::Stack(self)
    }

    fn from_leaf(value: LeafValue) -> Option<Self> {
        match value {
            LeafValue::Stack(stack) => Some(stack),
            _ => None,
        }
    }
}

impl Convertible for Ingredient {
    fn as_leaf(&self) -> LeafRef<'_> {
        LeafRef::Ingredient(self)
    }

    fn from_leaf(value: LeafValue) -> Option<Self> {
        match value {
            LeafValue::Ingredient(ingredient) => Some(ingredient),
            _ => None,
        }
    }
}

macro_rules! opaque_convertible {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Convertible for $ty {
                fn as_leaf(&self) -> LeafRef<'_> {
                    LeafRef::Other
                }

                fn from_leaf(_value: LeafValue) -> Option<Self> {
                    None
                }
            }
        )*
    };
}

opaque_convertible!(String, char, bool, u8, u16, u32, u64, i32, i64);
