//! Testing utilities for matswap workspace
//!
//! Shared materials, sample recipes and custom record shapes.

#![allow(missing_docs)]
#![allow(clippy::missing_panics_doc)]

use indexmap::IndexMap;
use matswap_item::{BlockType, Ingredient, Item, ItemStack};
use matswap_shape::{DeclaredType, FieldDecl, FieldSlot, LeafKind, Record, Shape, TypeKind};
use matswap_template::{ShapedRecipeTemplate, ShapelessRecipeTemplate, StonecutterRecipeTemplate};
use serde_json::{json, Value};

pub const WOOD_ROLES: &[&str] = &["planks", "log", "stairs", "slab", "door", "button", "fence"];

pub fn item(id: &str) -> Item {
    Item::parse(id).unwrap()
}

/// Wood family `name` with `minecraft:<name>_<role>` children
pub fn wood(name: &str) -> BlockType {
    WOOD_ROLES.iter().fold(
        BlockType::new(name.parse().unwrap()),
        |material, role| material.with_child(*role, item(&format!("{name}_{role}"))),
    )
}

pub fn oak() -> BlockType {
    wood("oak")
}

pub fn birch() -> BlockType {
    wood("birch")
}

pub fn spruce() -> BlockType {
    wood("spruce")
}

/// Wood family without a door
pub fn bamboo() -> BlockType {
    BlockType::new("bamboo".parse().unwrap())
        .with_child("planks", item("bamboo_planks"))
        .with_child("slab", item("bamboo_slab"))
}

pub fn door_recipe() -> ShapedRecipeTemplate {
    ShapedRecipeTemplate::new(ItemStack::new(item("oak_door"), 3))
        .row("##")
        .row("##")
        .row("##")
        .key('#', Ingredient::of(item("oak_planks")))
}

pub fn button_recipe() -> ShapelessRecipeTemplate {
    ShapelessRecipeTemplate::new(ItemStack::new(item("oak_button"), 1))
        .ingredient(Ingredient::of(item("oak_planks")))
}

pub fn slab_cutting() -> StonecutterRecipeTemplate {
    StonecutterRecipeTemplate::new(Ingredient::of(item("oak_planks")), item("oak_slab"), 2)
}

pub fn door_json() -> Value {
    json!({
        "type": "minecraft:crafting_shaped",
        "group": "wooden_door",
        "pattern": ["##", "##", "##"],
        "key": {"#": {"item": "minecraft:oak_planks"}},
        "result": {"item": "minecraft:oak_door", "count": 3}
    })
}

static MACHINE_BASE_SHAPE: Shape = Shape::new(
    "MachineBase",
    &[
        FieldDecl::new("label", DeclaredType::Opaque),
        FieldDecl::new("output", DeclaredType::Leaf(LeafKind::ItemStack)),
    ],
);

static UPGRADE_SHAPE: Shape = Shape::new(
    "Upgrade",
    &[FieldDecl::new("casing", DeclaredType::Leaf(LeafKind::Item))],
);

static SAWMILL_SHAPE: Shape = Shape::new(
    "Sawmill",
    &[
        FieldDecl::new("inputs", DeclaredType::Sequence(TypeKind::Leaf(LeafKind::Item))),
        FieldDecl::new(
            "byproducts",
            DeclaredType::Mapping(TypeKind::Leaf(LeafKind::Item), TypeKind::Opaque),
        ),
        FieldDecl::new("tool", DeclaredType::Optional(TypeKind::Leaf(LeafKind::Item))),
        FieldDecl::new("upgrade", DeclaredType::Optional(TypeKind::Record)),
        FieldDecl::new("frame", DeclaredType::Record),
        FieldDecl::new("notes", DeclaredType::Sequence(TypeKind::Opaque)),
    ],
)
.with_parent(&MACHINE_BASE_SHAPE);

/// Parent record of [`Sawmill`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineBase {
    pub label: String,
    pub output: ItemStack,
}

impl Record for MachineBase {
    fn shape(&self) -> &'static Shape {
        &MACHINE_BASE_SHAPE
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldSlot<'_>> {
        match name {
            "output" => Some(FieldSlot::scalar(&mut self.output)),
            _ => None,
        }
    }
}

/// Nested record holding one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upgrade {
    pub casing: Item,
}

impl Record for Upgrade {
    fn shape(&self) -> &'static Shape {
        &UPGRADE_SHAPE
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldSlot<'_>> {
        match name {
            "casing" => Some(FieldSlot::scalar(&mut self.casing)),
            _ => None,
        }
    }
}

/// Custom record exercising every field category plus a parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sawmill {
    pub base: MachineBase,
    pub inputs: Vec<Item>,
    pub byproducts: IndexMap<Item, u32>,
    pub tool: Option<Item>,
    pub upgrade: Option<Upgrade>,
    pub frame: Upgrade,
    pub notes: Vec<String>,
}

impl Record for Sawmill {
    fn shape(&self) -> &'static Shape {
        &SAWMILL_SHAPE
    }

    fn field_mut(&mut self, name: &str) -> Option<FieldSlot<'_>> {
        match name {
            "inputs" => Some(FieldSlot::sequence(&mut self.inputs)),
            "byproducts" => Some(FieldSlot::mapping(&mut self.byproducts)),
            "tool" => Some(FieldSlot::optional_leaf(&mut self.tool)),
            "upgrade" => Some(FieldSlot::optional_record(&mut self.upgrade)),
            "frame" => Some(FieldSlot::nested(&mut self.frame)),
            _ => None,
        }
    }

    fn parent_mut(&mut self) -> Option<&mut dyn Record> {
        Some(&mut self.base)
    }
}

/// Oak sawmill: logs in, planks out, sawdust byproduct keyed by the log
pub fn oak_sawmill() -> Sawmill {
    Sawmill {
        base: MachineBase {
            label: "oak sawmill".to_string(),
            output: ItemStack::new(item("oak_planks"), 4),
        },
        inputs: vec![item("stick"), item("oak_log"), item("cobblestone")],
        byproducts: IndexMap::from([(item("oak_log"), 2), (item("stick"), 1)]),
        tool: None,
        upgrade: Some(Upgrade {
            casing: item("oak_slab"),
        }),
        frame: Upgrade {
            casing: item("oak_fence"),
        },
        notes: vec!["keep dry".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matswap_item::Material;

    #[test]
    fn wood_has_every_role() {
        let oak = oak();
        for role in WOOD_ROLES {
            assert_eq!(oak.child(role), Some(&item(&format!("oak_{role}"))));
        }
    }

    #[test]
    fn sawmill_exposes_declared_fields() {
        let mut sawmill = oak_sawmill();
        for decl in SAWMILL_SHAPE.fields {
            let exposed = sawmill.field_mut(decl.name).is_some();
            assert_eq!(exposed, decl.name != "notes", "{}", decl.name);
        }
    }
}
