//! Convertible-field plans
//!
//! [`build_plan`] turns a [`Shape`] into the ordered list of fields the
//! rewriter has to visit. Fields declared on the shape come first, then the
//! fields of each ancestor in turn.

use crate::record::{DeclaredType, Record, Shape, TypeKind};
use crate::slot::FieldSlot;

/// Structural category of a convertible field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCategory {
    /// Directly holds a leaf value
    Scalar,
    /// Sequence of leaf values
    Sequence,
    /// Mapping whose key or value type is a leaf
    Mapping,
    /// Optional leaf or record
    Optional,
    /// Nested sub-record
    Nested,
}

impl FieldCategory {
    /// Classify a declared type
    ///
    /// First match wins: leaf, sequence, mapping, optional, nested record.
    /// Returns `None` for types that can never hold a substitutable value.
    #[must_use]
    pub fn classify(ty: DeclaredType) -> Option<Self> {
        match ty {
            DeclaredType::Leaf(_) => Some(Self::Scalar),
            DeclaredType::Sequence(TypeKind::Leaf(_)) => Some(Self::Sequence),
            DeclaredType::Mapping(key, value)
                if matches!(key, TypeKind::Leaf(_)) || matches!(value, TypeKind::Leaf(_)) =>
            {
                Some(Self::Mapping)
            }
            DeclaredType::Optional(TypeKind::Leaf(_) | TypeKind::Record) => Some(Self::Optional),
            DeclaredType::Record => Some(Self::Nested),
            DeclaredType::Sequence(_)
            | DeclaredType::Mapping(..)
            | DeclaredType::Optional(TypeKind::Opaque)
            | DeclaredType::Opaque => None,
        }
    }

    /// Whether `slot` is the view this category expects
    #[must_use]
    pub fn accepts(self, slot: &FieldSlot<'_>) -> bool {
        matches!(
            (self, slot),
            (Self::Scalar, FieldSlot::Scalar(_))
                | (Self::Sequence, FieldSlot::Sequence(_))
                | (Self::Mapping, FieldSlot::Mapping(_))
                | (Self::Optional, FieldSlot::Optional(_))
                | (Self::Nested, FieldSlot::Nested(_))
        )
    }
}

/// Location and category of one convertible field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
    name: &'static str,
    declared_on: &'static str,
    depth: usize,
    category: FieldCategory,
}

impl FieldRef {
    /// Field name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the shape declaring the field
    #[inline]
    #[must_use]
    pub fn declared_on(&self) -> &'static str {
        self.declared_on
    }

    /// Parent hops from the record to the declaring shape
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Structural category
    #[inline]
    #[must_use]
    pub fn category(&self) -> FieldCategory {
        self.category
    }

    /// Borrow the field from `record`
    ///
    /// Returns `None` if the parent chain or the field accessor does not
    /// match the shape the plan was built from.
    pub fn slot<'r>(&self, record: &'r mut dyn Record) -> Option<FieldSlot<'r>> {
        let mut target = record;
        for _ in 0..self.depth {
            target = target.parent_mut()?;
        }
        target.field_mut(self.name)
    }
}

/// Every convertible field of one shape, ancestors included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertiblePlan {
    shape: &'static str,
    fields: Vec<FieldRef>,
}

impl ConvertiblePlan {
    /// Name of the planned shape
    #[inline]
    #[must_use]
    pub fn shape(&self) -> &'static str {
        self.shape
    }

    /// Convertible fields in visiting order
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[FieldRef] {
        &self.fields
    }

    /// Number of convertible fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the shape has no convertible field
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Build the plan for `shape`
///
/// Pure function of the descriptor; an empty plan is valid.
#[must_use]
pub fn build_plan(shape: &'static Shape) -> ConvertiblePlan {
    let mut fields = Vec::new();
    collect_fields(shape, 0, &mut fields);
    ConvertiblePlan {
        shape: shape.name,
        fields,
    }
}

fn collect_fields(shape: &'static Shape, depth: usize, out: &mut Vec<FieldRef>) {
    for decl in shape.fields {
        if let Some(category) = FieldCategory::classify(decl.ty) {
            out.push(FieldRef {
                name: decl.name,
                declared_on: shape.name,
                depth,
                category,
            });
        }
    }

    if let Some(parent) = shape.parent {
        collect_fields(parent, depth + 1, out);
    }
}
