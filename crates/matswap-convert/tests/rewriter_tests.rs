//! Rewriting of custom record shapes

use indexmap::IndexMap;
use matswap_convert::{ConvertError, RecipeConverter};
use matswap_item::{Item, ItemStack};
use matswap_test_utils::{birch, item, oak, oak_sawmill, Upgrade};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn sawmill_converts_every_category() {
    let mut sawmill = oak_sawmill();
    RecipeConverter::new()
        .convert(&mut sawmill, &oak(), &birch())
        .unwrap();

    assert_eq!(sawmill.inputs, [item("stick"), item("birch_log"), item("cobblestone")]);
    assert_eq!(
        sawmill.byproducts,
        IndexMap::from([(item("stick"), 1), (item("birch_log"), 2)])
    );
    assert_eq!(sawmill.tool, None);
    assert_eq!(
        sawmill.upgrade,
        Some(Upgrade {
            casing: item("birch_slab")
        })
    );
    assert_eq!(sawmill.frame.casing, item("birch_fence"));
    assert_eq!(sawmill.base.output, ItemStack::new(item("birch_planks"), 1));
    assert_eq!(sawmill.base.label, "oak sawmill");
    assert_eq!(sawmill.notes, ["keep dry"]);
}

#[test]
fn mapping_key_keeps_value() {
    let mut sawmill = oak_sawmill();
    sawmill.byproducts = IndexMap::from([(item("oak_log"), 7)]);
    RecipeConverter::new()
        .convert(&mut sawmill, &oak(), &birch())
        .unwrap();
    assert_eq!(sawmill.byproducts.get(&item("birch_log")), Some(&7));
    assert!(!sawmill.byproducts.contains_key(&item("oak_log")));
}

#[test]
fn mapping_without_source_material_fails() {
    let mut sawmill = oak_sawmill();
    sawmill.byproducts = IndexMap::from([(item("stick"), 1)]);
    let err = RecipeConverter::new()
        .convert(&mut sawmill, &oak(), &birch())
        .unwrap_err();
    assert!(matches!(err, ConvertError::ZeroProgress { field: "byproducts", .. }));
}

#[test]
fn nested_failure_propagates() {
    let mut sawmill = oak_sawmill();
    sawmill.frame.casing = item("iron_block");
    let err = RecipeConverter::new()
        .convert(&mut sawmill, &oak(), &birch())
        .unwrap_err();
    assert!(matches!(err, ConvertError::ScalarSubstitution { field: "casing", .. }));
}

#[test]
fn optional_record_failure_propagates() {
    let mut sawmill = oak_sawmill();
    sawmill.upgrade = Some(Upgrade {
        casing: item("iron_block"),
    });
    let err = RecipeConverter::new()
        .convert(&mut sawmill, &oak(), &birch())
        .unwrap_err();
    assert!(matches!(
        err,
        ConvertError::ScalarSubstitution { field: "casing", ref value, ref site }
            if value == "minecraft:iron_block" && site.recipe == "Upgrade"
    ));
}

#[test]
fn empty_sequence_is_zero_progress() {
    let mut sawmill = oak_sawmill();
    sawmill.inputs.clear();
    let err = RecipeConverter::new()
        .convert(&mut sawmill, &oak(), &birch())
        .unwrap_err();
    assert!(matches!(err, ConvertError::ZeroProgress { field: "inputs", .. }));
    assert_eq!(sawmill.inputs, Vec::<Item>::new());
}

#[test]
fn populated_optional_leaf_converts() {
    let mut sawmill = oak_sawmill();
    sawmill.tool = Some(item("oak_button"));
    sawmill.upgrade = None;
    RecipeConverter::new()
        .convert(&mut sawmill, &oak(), &birch())
        .unwrap();
    assert_eq!(sawmill.tool, Some(item("birch_button")));
    assert_eq!(sawmill.upgrade, None);
}

fn wood_or_filler() -> impl Strategy<Value = Item> {
    prop_oneof![
        Just(item("oak_planks")),
        Just(item("oak_log")),
        Just(item("stick")),
        Just(item("cobblestone")),
    ]
}

proptest! {
    #[test]
    fn prop_sequence_positions_preserved(inputs in prop::collection::vec(wood_or_filler(), 1..12)) {
        prop_assume!(inputs.iter().any(|i| i.id().path().starts_with("oak_")));

        let mut sawmill = oak_sawmill();
        sawmill.inputs = inputs.clone();
        RecipeConverter::new().convert(&mut sawmill, &oak(), &birch()).unwrap();

        prop_assert_eq!(sawmill.inputs.len(), inputs.len());
        for (before, after) in inputs.iter().zip(&sawmill.inputs) {
            match before.id().path().strip_prefix("oak_") {
                Some(role) => prop_assert_eq!(after, &item(&format!("birch_{role}"))),
                None => prop_assert_eq!(after, before),
            }
        }
    }
}
