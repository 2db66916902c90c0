//! End-to-end conversion of the built-in templates

use matswap_convert::{ConvertError, ConverterConfig, RecipeConverter};
use matswap_item::{Ingredient, Item, ItemStack};
use matswap_shape::{DeclaredType, FieldDecl, FieldSlot, PlanCache, Record, Shape};
use matswap_template::{
    deserialize_template, RecipeMeta, RecipeTemplate, ShapelessRecipeTemplate, TemplateError,
    TemplateRegistry,
};
use matswap_test_utils::{
    bamboo, birch, button_recipe, door_json, door_recipe, item, oak, slab_cutting, spruce,
};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Recipe kind whose fields never hold a material item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SignText {
    #[serde(flatten)]
    meta: RecipeMeta,
    text: String,
}

static SIGN_TEXT_SHAPE: Shape = Shape::new(
    "SignText",
    &[
        FieldDecl::new("meta", DeclaredType::Opaque),
        FieldDecl::new("text", DeclaredType::Opaque),
    ],
);

impl Record for SignText {
    fn shape(&self) -> &'static Shape {
        &SIGN_TEXT_SHAPE
    }

    fn field_mut(&mut self, _name: &str) -> Option<FieldSlot<'_>> {
        None
    }
}

impl RecipeTemplate for SignText {
    fn meta(&self) -> &RecipeMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecipeMeta {
        &mut self.meta
    }

    fn as_record(&self) -> &dyn Record {
        self
    }

    fn as_record_mut(&mut self) -> &mut dyn Record {
        self
    }

    fn to_json(&self) -> Result<Value, TemplateError> {
        serde_json::to_value(self).map_err(TemplateError::Serialize)
    }
}

#[test]
fn shaped_door_oak_to_birch() {
    let copy = RecipeConverter::new()
        .create_similar(&door_recipe(), &oak(), &birch(), &item("birch_planks"), None)
        .unwrap();

    assert_eq!(
        copy.to_json().unwrap(),
        json!({
            "type": "minecraft:crafting_shaped",
            "unlocked_by": {"item": "minecraft:birch_planks"},
            "result": {"item": "minecraft:birch_door", "count": 1},
            "pattern": ["##", "##", "##"],
            "key": {"#": {"item": "minecraft:birch_planks"}}
        })
    );
}

#[test]
fn input_recipe_is_unmodified() {
    let recipe = door_recipe();
    let before = recipe.to_json().unwrap();

    let _ = RecipeConverter::new().create_similar(
        &recipe,
        &oak(),
        &spruce(),
        &item("spruce_planks"),
        Some("mymod:spruce_door".parse().unwrap()),
    );

    assert_eq!(recipe.to_json().unwrap(), before);
    assert_eq!(recipe, door_recipe());
}

#[test]
fn recipe_read_from_json_keeps_group() {
    let recipe = TemplateRegistry::global().read(&door_json()).unwrap();
    let copy = RecipeConverter::new()
        .create_similar(recipe.as_ref(), &oak(), &birch(), &item("birch_planks"), None)
        .unwrap();
    assert_eq!(copy.meta().group.as_deref(), Some("wooden_door"));
}

#[test]
fn zero_progress_yields_none() {
    let recipe = ShapelessRecipeTemplate::new(ItemStack::new(item("oak_button"), 1))
        .ingredient(Ingredient::of(item("stick")));

    let converter = RecipeConverter::new();
    assert!(converter
        .create_similar(&recipe, &oak(), &birch(), &item("birch_planks"), None)
        .is_none());

    let err = converter
        .try_create_similar(&recipe, &oak(), &birch(), &item("birch_planks"), None)
        .unwrap_err();
    assert!(matches!(err, ConvertError::ZeroProgress { field: "ingredients", .. }));
    assert_eq!(recipe.ingredients, [Ingredient::of(item("stick"))]);
}

#[test]
fn missing_analogue_for_result_yields_none() {
    let err = RecipeConverter::new()
        .try_create_similar(&door_recipe(), &oak(), &bamboo(), &item("bamboo_planks"), None)
        .unwrap_err();
    assert!(matches!(
        err,
        ConvertError::ScalarSubstitution { field: "result", ref value, .. } if value == "3 minecraft:oak_door"
    ));
}

#[test]
fn ingredient_narrows_to_single_alternative() {
    let recipe = ShapelessRecipeTemplate::new(ItemStack::new(item("oak_button"), 1))
        .ingredient(Ingredient::any_of([item("oak_planks"), item("spruce_planks")]));

    let copy = RecipeConverter::new()
        .create_similar(&recipe, &oak(), &birch(), &item("birch_planks"), None)
        .unwrap();

    assert_eq!(
        copy.to_json().unwrap()["ingredients"],
        json!([{"item": "minecraft:birch_planks"}])
    );
}

#[test]
fn custom_placeholder_is_skipped() {
    let marker = item("oak_log");
    let recipe = ShapelessRecipeTemplate::new(ItemStack::new(item("oak_button"), 1))
        .ingredient(Ingredient::any_of([marker.clone(), item("oak_planks")]));

    let converter =
        RecipeConverter::new().with_config(ConverterConfig::default().with_placeholder(marker));
    let copy = converter
        .create_similar(&recipe, &oak(), &birch(), &item("birch_planks"), None)
        .unwrap();

    assert_eq!(
        copy.to_json().unwrap()["ingredients"],
        json!([{"item": "minecraft:birch_planks"}])
    );
}

#[test]
fn stonecutting_stamps_id() {
    let copy = RecipeConverter::new()
        .create_similar(
            &slab_cutting(),
            &oak(),
            &birch(),
            &item("birch_planks"),
            Some("mymod:birch_slab_from_planks".parse().unwrap()),
        )
        .unwrap();

    assert_eq!(
        copy.to_json().unwrap(),
        json!({
            "type": "minecraft:stonecutting",
            "id": "mymod:birch_slab_from_planks",
            "unlocked_by": {"item": "minecraft:birch_planks"},
            "ingredient": {"item": "minecraft:birch_planks"},
            "result": "minecraft:birch_slab",
            "count": 2
        })
    );
}

#[test]
fn unlock_item_replaces_existing_criterion() {
    let mut recipe = button_recipe();
    recipe.set_unlocked_by(item("oak_planks"));

    let copy = RecipeConverter::new()
        .create_similar(&recipe, &oak(), &birch(), &Item::parse("birch_log").unwrap(), None)
        .unwrap();
    assert_eq!(copy.unlocked_by(), Some(&item("birch_log")));
    assert_eq!(recipe.unlocked_by(), Some(&item("oak_planks")));
}

#[test]
fn recipe_without_convertible_fields_yields_none() {
    let registry = TemplateRegistry::with_defaults();
    registry
        .register("mymod:sign_text", deserialize_template::<SignText>)
        .unwrap();
    let plans = PlanCache::new();
    let converter = RecipeConverter::with_parts(&registry, &plans);

    let recipe = SignText {
        meta: RecipeMeta::new("mymod:sign_text".parse().unwrap()),
        text: "oak".to_string(),
    };
    assert!(converter
        .create_similar(&recipe, &oak(), &birch(), &item("birch_planks"), None)
        .is_none());

    let err = converter
        .try_create_similar(&recipe, &oak(), &birch(), &item("birch_planks"), None)
        .unwrap_err();
    assert!(matches!(
        err,
        ConvertError::NothingToConvert { ref site } if site.recipe == "SignText"
    ));
}
