//! Registry behaviour across the public API

use matswap_item::{Ingredient, Item, ItemStack};
use matswap_template::{
    deserialize_template, RecipeTemplate, ShapedRecipeTemplate, TemplateError, TemplateRegistry,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn item(id: &str) -> Item {
    Item::parse(id).unwrap()
}

#[test]
fn custom_kind_reads_through_its_factory() {
    let registry = TemplateRegistry::new();
    registry
        .register("shaped", deserialize_template::<ShapedRecipeTemplate>)
        .unwrap();

    let json = json!({
        "type": "shaped",
        "pattern": ["#"],
        "key": {"#": {"item": "minecraft:oak_log"}},
        "result": {"item": "minecraft:oak_planks", "count": 4}
    });
    let recipe = registry.read(&json).unwrap();

    assert_eq!(recipe.kind().to_string(), "minecraft:shaped");
    assert!(registry.contains("minecraft:shaped"));
}

#[test]
fn unsupported_kind_names_offender() {
    let registry = TemplateRegistry::with_defaults();
    let err = registry
        .read(&json!({"type": "mymod:sawmill"}))
        .unwrap_err();
    assert!(matches!(err, TemplateError::UnsupportedKind(ref kind) if kind == "mymod:sawmill"));
    assert!(err.to_string().contains("mymod:sawmill"));
}

#[test]
fn written_template_reads_back_equal() {
    let registry = TemplateRegistry::with_defaults();
    let mut table = ShapedRecipeTemplate::new(ItemStack::new(item("crafting_table"), 1))
        .row("##")
        .row("##")
        .key('#', Ingredient::any_of([item("oak_planks"), item("birch_planks")]));
    table.set_unlocked_by(item("oak_planks"));
    table.set_id("mymod:table".parse().unwrap());

    let json = table.to_json().unwrap();
    let copy = registry.read(&json).unwrap();

    assert_eq!(copy.to_json().unwrap(), json);
    assert_eq!(copy.unlocked_by(), Some(&item("oak_planks")));
    assert_eq!(copy.id().map(ToString::to_string).as_deref(), Some("mymod:table"));
}

#[test]
fn factory_can_wrap_another() {
    let registry = TemplateRegistry::with_defaults();
    registry
        .register("mymod:grouped_shaped", |json: &Value| {
            let mut recipe = deserialize_template::<ShapedRecipeTemplate>(json)?;
            recipe.meta_mut().group = Some("tables".to_string());
            Ok(recipe)
        })
        .unwrap();

    let recipe = registry
        .read(&json!({
            "type": "mymod:grouped_shaped",
            "pattern": ["#"],
            "key": {"#": {"item": "minecraft:oak_log"}},
            "result": {"item": "minecraft:oak_planks"}
        }))
        .unwrap();
    assert_eq!(recipe.meta().group.as_deref(), Some("tables"));
}
