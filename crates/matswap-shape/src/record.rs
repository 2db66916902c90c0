//! Records and their shape descriptors
//!
//! A record type describes itself with a static [`Shape`] instead of being
//! inspected at runtime. The shape names each field and its declared type;
//! [`Record::field_mut`] hands out the matching [`FieldSlot`] view.
//!
//! Inheritance is expressed by composition: a record embeds its parent record
//! and exposes it through [`Record::parent_mut`], while its shape links the
//! parent's shape.

use crate::leaf::LeafKind;
use crate::slot::FieldSlot;
use std::any::{Any, TypeId};
use std::fmt;

/// Identity of a record shape (the record's concrete type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(TypeId);

impl ShapeId {
    /// Shape identity of `R`
    #[inline]
    #[must_use]
    pub fn of<R: Record>() -> Self {
        Self(TypeId::of::<R>())
    }
}

/// Element, key or value type inside a container declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// One of the substitutable leaf kinds
    Leaf(LeafKind),
    /// A nested record
    Record,
    /// Anything else
    Opaque,
}

/// Declared type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    /// A substitutable leaf value
    Leaf(LeafKind),
    /// Ordered sequence of elements
    Sequence(TypeKind),
    /// Key-value mapping
    Mapping(TypeKind, TypeKind),
    /// Optional slot
    Optional(TypeKind),
    /// Nested sub-record
    Record,
    /// Not convertible (strings, numbers, metadata)
    Opaque,
}

/// One declared field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    /// Field name, as accepted by [`Record::field_mut`]
    pub name: &'static str,
    /// Declared type
    pub ty: DeclaredType,
}

impl FieldDecl {
    /// Declare field
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str, ty: DeclaredType) -> Self {
        Self { name, ty }
    }
}

/// Static descriptor of a record type
#[derive(Debug)]
pub struct Shape {
    /// Type name, for diagnostics
    pub name: &'static str,
    /// Fields declared directly on this shape, in declaration order
    pub fields: &'static [FieldDecl],
    /// Shape of the embedded parent record, if any
    pub parent: Option<&'static Shape>,
}

impl Shape {
    /// Shape without parent
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str, fields: &'static [FieldDecl]) -> Self {
        Self {
            name,
            fields,
            parent: None,
        }
    }

    /// Same shape with a parent
    #[inline]
    #[must_use]
    pub const fn with_parent(mut self, parent: &'static Shape) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Declared field by name (this shape only)
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A record whose fields are reachable through its [`Shape`]
///
/// # Contract
/// - `shape()` returns the same static descriptor for every value of a type
/// - `field_mut(name)` returns a slot for every field the shape declares as
///   convertible, with the variant matching the declared type
/// - `parent_mut()` returns the embedded record described by `shape().parent`
pub trait Record: Any + fmt::Debug {
    /// Static shape descriptor
    fn shape(&self) -> &'static Shape;

    /// Mutable view of a declared field
    fn field_mut(&mut self, name: &str) -> Option<FieldSlot<'_>>;

    /// Embedded parent record
    fn parent_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }

    /// Short human-readable description for diagnostics
    fn describe(&self) -> String {
        self.shape().name.to_string()
    }

    /// Shape identity of the runtime type
    fn shape_id(&self) -> ShapeId {
        ShapeId(Any::type_id(self))
    }
}
