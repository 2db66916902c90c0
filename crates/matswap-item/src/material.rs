//! Material families
//!
//! A [`Material`] is an item family (e.g. "oak") whose items are registered
//! under role keys (`"planks"`, `"stairs"`, ...). Substitution maps an item to
//! the item holding the same role in another family.

use crate::item::Item;
use crate::location::ResourceLocation;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An item family that can map its items onto another family
pub trait Material: fmt::Debug + Send + Sync {
    /// Family identifier
    fn id(&self) -> &ResourceLocation;

    /// Item registered under `key`
    fn child(&self, key: &str) -> Option<&Item>;

    /// Key under which `item` is registered
    fn child_key(&self, item: &Item) -> Option<&str>;

    /// Map `item` from this family onto `destination`
    ///
    /// Returns `None` when `item` is not part of this family or the
    /// destination has no item for the same role.
    fn change_item_type(&self, item: &Item, destination: &dyn Material) -> Option<Item> {
        let key = self.child_key(item)?;
        destination.child(key).cloned()
    }
}

/// Table-backed material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockType {
    id: ResourceLocation,
    #[serde(default)]
    children: IndexMap<String, Item>,
}

impl BlockType {
    /// Create material with no children
    #[inline]
    #[must_use]
    pub fn new(id: ResourceLocation) -> Self {
        Self {
            id,
            children: IndexMap::new(),
        }
    }

    /// With a child registered under `key`
    #[inline]
    #[must_use]
    pub fn with_child(mut self, key: impl Into<String>, item: Item) -> Self {
        self.add_child(key, item);
        self
    }

    /// Register child, replacing any previous item for `key`
    pub fn add_child(&mut self, key: impl Into<String>, item: Item) {
        self.children.insert(key.into(), item);
    }

    /// Registered children in insertion order
    #[inline]
    pub fn children(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Material for BlockType {
    fn id(&self) -> &ResourceLocation {
        &self.id
    }

    fn child(&self, key: &str) -> Option<&Item> {
        self.children.get(key)
    }

    fn child_key(&self, item: &Item) -> Option<&str> {
        self.children
            .iter()
            .find(|(_, child)| *child == item)
            .map(|(key, _)| key.as_str())
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> Item {
        Item::parse(id).unwrap()
    }

    fn wood(name: &str) -> BlockType {
        BlockType::new(name.parse().unwrap())
            .with_child("planks", item(&format!("{name}_planks")))
            .with_child("slab", item(&format!("{name}_slab")))
    }

    #[test]
    fn change_item_type_by_role() {
        let oak = wood("oak");
        let birch = wood("birch");
        assert_eq!(
            oak.change_item_type(&item("oak_slab"), &birch),
            Some(item("birch_slab"))
        );
    }

    #[test]
    fn change_item_type_unknown_item() {
        let oak = wood("oak");
        let birch = wood("birch");
        assert_eq!(oak.change_item_type(&item("stick"), &birch), None);
    }

    #[test]
    fn change_item_type_missing_destination_role() {
        let oak = wood("oak").with_child("door", item("oak_door"));
        let birch = wood("birch");
        assert_eq!(oak.change_item_type(&item("oak_door"), &birch), None);
    }

    #[test]
    fn add_child_replaces() {
        let mut oak = wood("oak");
        oak.add_child("planks", item("stripped_oak_planks"));
        assert_eq!(oak.child("planks"), Some(&item("stripped_oak_planks")));
        assert_eq!(oak.children().count(), 2);
    }

    #[test]
    fn deserialize_from_json() {
        let oak: BlockType = serde_json::from_str(
            r#"{"id":"minecraft:oak","children":{"planks":"minecraft:oak_planks"}}"#,
        )
        .unwrap();
        assert_eq!(oak.child_key(&item("oak_planks")), Some("planks"));
        assert_eq!(oak.to_string(), "minecraft:oak");
    }
}
