//! Plan building over generated shapes

use matswap_shape::{build_plan, DeclaredType, FieldCategory, FieldDecl, LeafKind, Shape, TypeKind};
use proptest::prelude::*;

const NAMES: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

fn leaf_kind() -> impl Strategy<Value = LeafKind> {
    prop_oneof![
        Just(LeafKind::Item),
        Just(LeafKind::ItemStack),
        Just(LeafKind::Ingredient),
    ]
}

fn type_kind() -> impl Strategy<Value = TypeKind> {
    prop_oneof![
        leaf_kind().prop_map(TypeKind::Leaf),
        Just(TypeKind::Record),
        Just(TypeKind::Opaque),
    ]
}

fn declared_type() -> impl Strategy<Value = DeclaredType> {
    prop_oneof![
        leaf_kind().prop_map(DeclaredType::Leaf),
        type_kind().prop_map(DeclaredType::Sequence),
        (type_kind(), type_kind()).prop_map(|(k, v)| DeclaredType::Mapping(k, v)),
        type_kind().prop_map(DeclaredType::Optional),
        Just(DeclaredType::Record),
        Just(DeclaredType::Opaque),
    ]
}

/// Shape chain built from generated field types; leaked to get `'static`
fn leak_chain(levels: Vec<Vec<DeclaredType>>) -> &'static Shape {
    let mut parent: Option<&'static Shape> = None;
    for (depth, types) in levels.into_iter().enumerate().rev() {
        let fields: Vec<FieldDecl> = types
            .into_iter()
            .zip(NAMES)
            .map(|(ty, name)| FieldDecl::new(name, ty))
            .collect();
        let name: &'static str = Box::leak(format!("Level{depth}").into_boxed_str());
        let shape = Shape {
            name,
            fields: Box::leak(fields.into_boxed_slice()),
            parent,
        };
        parent = Some(Box::leak(Box::new(shape)));
    }
    parent.unwrap()
}

fn chain() -> impl Strategy<Value = Vec<Vec<DeclaredType>>> {
    prop::collection::vec(prop::collection::vec(declared_type(), 0..8), 1..4)
}

proptest! {
    #[test]
    fn prop_plan_is_deterministic(levels in chain()) {
        let shape = leak_chain(levels);
        prop_assert_eq!(build_plan(shape), build_plan(shape));
    }

    #[test]
    fn prop_plan_lists_exactly_convertible_fields(levels in chain()) {
        let expected: usize = levels
            .iter()
            .flatten()
            .filter(|ty| FieldCategory::classify(**ty).is_some())
            .count();
        let shape = leak_chain(levels);
        prop_assert_eq!(build_plan(shape).len(), expected);
    }

    #[test]
    fn prop_depth_never_decreases(levels in chain()) {
        let shape = leak_chain(levels);
        let plan = build_plan(shape);
        let depths: Vec<usize> = plan.fields().iter().map(|f| f.depth()).collect();
        prop_assert!(depths.windows(2).all(|w| w[0] <= w[1]));
    }
}
