//! Ingredients
//!
//! An [`Ingredient`] is a disjunctive match: any one of its items satisfies it.
//! JSON form is a single `{"item": id}` object or an array of them.

use crate::item::Item;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Disjunctive match over acceptable items
///
/// Alternatives keep their declared order and are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "IngredientRepr", into = "IngredientRepr")]
pub struct Ingredient {
    items: Vec<Item>,
}

impl Ingredient {
    /// Ingredient matching only `item`
    #[inline]
    #[must_use]
    pub fn of(item: Item) -> Self {
        Self { items: vec![item] }
    }

    /// Ingredient matching any of `items`, in order
    #[inline]
    #[must_use]
    pub fn any_of(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Ingredient that matches nothing
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Alternatives in declared order
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Whether `item` satisfies this ingredient
    #[inline]
    #[must_use]
    pub fn test(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    /// Whether there are no alternatives
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

#[derive(Serialize, Deserialize)]
struct IngredientEntry {
    item: Item,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum IngredientRepr {
    Single(IngredientEntry),
    Many(Vec<IngredientEntry>),
}

impl From<IngredientRepr> for Ingredient {
    fn from(repr: IngredientRepr) -> Self {
        match repr {
            IngredientRepr::Single(entry) => Self::of(entry.item),
            IngredientRepr::Many(entries) => Self::any_of(entries.into_iter().map(|e| e.item)),
        }
    }
}

impl From<Ingredient> for IngredientRepr {
    fn from(ingredient: Ingredient) -> Self {
        let mut items = ingredient.items;
        if items.len() == 1 {
            if let Some(item) = items.pop() {
                return Self::Single(IngredientEntry { item });
            }
        }
        Self::Many(items.into_iter().map(|item| IngredientEntry { item }).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(id: &str) -> Item {
        Item::parse(id).unwrap()
    }

    #[test]
    fn single_entry_json() {
        let ing: Ingredient = serde_json::from_value(json!({"item": "minecraft:oak_planks"})).unwrap();
        assert_eq!(ing.items(), &[item("minecraft:oak_planks")]);
        assert_eq!(
            serde_json::to_value(&ing).unwrap(),
            json!({"item": "minecraft:oak_planks"})
        );
    }

    #[test]
    fn array_json_keeps_order() {
        let ing: Ingredient = serde_json::from_value(json!([
            {"item": "minecraft:spruce_planks"},
            {"item": "minecraft:oak_planks"}
        ]))
        .unwrap();
        assert_eq!(
            ing.items(),
            &[item("minecraft:spruce_planks"), item("minecraft:oak_planks")]
        );
        assert!(serde_json::to_value(&ing).unwrap().is_array());
    }

    #[test]
    fn test_matches_alternatives() {
        let ing = Ingredient::any_of([item("oak_planks"), item("birch_planks")]);
        assert!(ing.test(&item("birch_planks")));
        assert!(!ing.test(&item("spruce_planks")));
    }

    #[test]
    fn empty_ingredient() {
        let ing = Ingredient::empty();
        assert!(ing.is_empty());
        assert_eq!(serde_json::to_value(&ing).unwrap(), json!([]));
    }

    #[test]
    fn display_lists_alternatives() {
        let ing = Ingredient::any_of([item("oak_planks"), item("birch_planks")]);
        assert_eq!(
            ing.to_string(),
            "[minecraft:oak_planks | minecraft:birch_planks]"
        );
    }
}
