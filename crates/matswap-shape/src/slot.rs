//! Mutable field views
//!
//! A [`FieldSlot`] borrows one field of a record, tagged with its structural
//! category. Container views rewrite their contents through a callback that
//! decides each replacement; the view applies it.

use crate::leaf::{Convertible, LeafRef, LeafValue};
use crate::record::Record;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Mutable view of one record field
pub enum FieldSlot<'a> {
    /// A single leaf value
    Scalar(&'a mut dyn LeafCell),
    /// Ordered sequence of values
    Sequence(&'a mut dyn LeafSeq),
    /// Key-value mapping
    Mapping(&'a mut dyn LeafMap),
    /// Optional slot
    Optional(OptionalSlot<'a>),
    /// Nested sub-record
    Nested(&'a mut dyn Record),
}

/// Contents of an optional slot
pub enum OptionalSlot<'a> {
    /// Optional leaf value; `None` when empty
    Leaf(Option<&'a mut dyn LeafCell>),
    /// Optional nested record; `None` when empty
    Record(Option<&'a mut dyn Record>),
}

impl<'a> FieldSlot<'a> {
    /// View a leaf field
    #[inline]
    pub fn scalar<T: Convertible>(value: &'a mut T) -> Self {
        Self::Scalar(value)
    }

    /// View a sequence field
    #[inline]
    pub fn sequence<T: Convertible>(values: &'a mut Vec<T>) -> Self {
        Self::Sequence(values)
    }

    /// View a mapping field
    #[inline]
    pub fn mapping(map: &'a mut dyn LeafMap) -> Self {
        Self::Mapping(map)
    }

    /// View an optional leaf field
    #[inline]
    pub fn optional_leaf<T: Convertible>(slot: &'a mut Option<T>) -> Self {
        Self::Optional(OptionalSlot::Leaf(
            slot.as_mut().map(|value| value as &mut dyn LeafCell),
        ))
    }

    /// View an optional nested record field
    #[inline]
    pub fn optional_record<R: Record>(slot: &'a mut Option<R>) -> Self {
        Self::Optional(OptionalSlot::Record(
            slot.as_mut().map(|record| record as &mut dyn Record),
        ))
    }

    /// View a nested record field
    #[inline]
    pub fn nested<R: Record>(record: &'a mut R) -> Self {
        Self::Nested(record)
    }
}

/// A single replaceable value
pub trait LeafCell {
    /// Current value
    fn leaf(&self) -> LeafRef<'_>;

    /// Store a replacement; `false` if its kind does not fit this cell
    fn replace(&mut self, value: LeafValue) -> bool;
}

impl<T: Convertible> LeafCell for T {
    fn leaf(&self) -> LeafRef<'_> {
        self.as_leaf()
    }

    fn replace(&mut self, value: LeafValue) -> bool {
        match T::from_leaf(value) {
            Some(value) => {
                *self = value;
                true
            }
            None => false,
        }
    }
}

/// Ordered sequence rewritten element by element, in place
pub trait LeafSeq {
    /// Number of elements
    fn element_count(&self) -> usize;

    /// Offer every element to `rewrite` in order, storing each replacement at
    /// the same position. Returns the number of replaced elements.
    fn rewrite_elements(
        &mut self,
        rewrite: &mut dyn FnMut(LeafRef<'_>) -> Option<LeafValue>,
    ) -> usize;
}

impl<T: Convertible> LeafSeq for Vec<T> {
    fn element_count(&self) -> usize {
        self.len()
    }

    fn rewrite_elements(
        &mut self,
        rewrite: &mut dyn FnMut(LeafRef<'_>) -> Option<LeafValue>,
    ) -> usize {
        let mut replaced = 0;
        for element in self.iter_mut() {
            if let Some(value) = rewrite(element.as_leaf()).and_then(T::from_leaf) {
                *element = value;
                replaced += 1;
            }
        }
        replaced
    }
}

/// Replacements decided for one map entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryRewrite {
    /// New key, if the key changed
    pub key: Option<LeafValue>,
    /// New value, if the value changed
    pub value: Option<LeafValue>,
}

/// Key-value mapping rewritten entry by entry
pub trait LeafMap {
    /// Number of entries
    fn entry_count(&self) -> usize;

    /// Offer a snapshot of every entry to `rewrite` and apply its decisions:
    /// a new key replaces the entry (keeping the old value unless a new one
    /// is given), a new value alone is stored under the existing key.
    /// Returns the number of changed entries.
    fn rewrite_entries(
        &mut self,
        rewrite: &mut dyn FnMut(LeafRef<'_>, LeafRef<'_>) -> EntryRewrite,
    ) -> usize;
}

enum EntryChange<K, V> {
    Rekey(K, Option<V>),
    Revalue(V),
}

fn rewrite_snapshot<K: Convertible, V: Convertible>(
    snapshot: Vec<(K, V)>,
    rewrite: &mut dyn FnMut(LeafRef<'_>, LeafRef<'_>) -> EntryRewrite,
    mut apply: impl FnMut(K, V, EntryChange<K, V>),
) -> usize {
    let mut changed = 0;
    for (key, value) in snapshot {
        let decision = rewrite(key.as_leaf(), value.as_leaf());
        let new_key = decision.key.and_then(K::from_leaf);
        let new_value = decision.value.and_then(V::from_leaf);
        let change = match (new_key, new_value) {
            (Some(new_key), new_value) => EntryChange::Rekey(new_key, new_value),
            (None, Some(new_value)) => EntryChange::Revalue(new_value),
            (None, None) => continue,
        };
        apply(key, value, change);
        changed += 1;
    }
    changed
}

impl<K, V, S> LeafMap for IndexMap<K, V, S>
where
    K: Convertible + Hash + Eq,
    V: Convertible,
    S: BuildHasher,
{
    fn entry_count(&self) -> usize {
        self.len()
    }

    fn rewrite_entries(
        &mut self,
        rewrite: &mut dyn FnMut(LeafRef<'_>, LeafRef<'_>) -> EntryRewrite,
    ) -> usize {
        let snapshot = self.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        rewrite_snapshot(snapshot, rewrite, |key, value, change| match change {
            EntryChange::Rekey(new_key, new_value) => {
                self.shift_remove(&key);
                self.insert(new_key, new_value.unwrap_or(value));
            }
            EntryChange::Revalue(new_value) => {
                self.insert(key, new_value);
            }
        })
    }
}

impl<K, V, S> LeafMap for HashMap<K, V, S>
where
    K: Convertible + Hash + Eq,
    V: Convertible,
    S: BuildHasher,
{
    fn entry_count(&self) -> usize {
        self.len()
    }

    fn rewrite_entries(
        &mut self,
        rewrite: &mut dyn FnMut(LeafRef<'_>, LeafRef<'_>) -> EntryRewrite,
    ) -> usize {
        let snapshot = self.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        rewrite_snapshot(snapshot, rewrite, |key, value, change| match change {
            EntryChange::Rekey(new_key, new_value) => {
                self.remove(&key);
                self.insert(new_key, new_value.unwrap_or(value));
            }
            EntryChange::Revalue(new_value) => {
                self.insert(key, new_value);
            }
        })
    }
}

impl<K, V> LeafMap for BTreeMap<K, V>
where
    K: Convertible + Ord,
    V: Convertible,
{
    fn entry_count(&self) -> usize {
        self.len()
    }

    fn rewrite_entries(
        &mut self,
        rewrite: &mut dyn FnMut(LeafRef<'_>, LeafRef<'_>) -> EntryRewrite,
    ) -> usize {
        let snapshot = self.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        rewrite_snapshot(snapshot, rewrite, |key, value, change| match change {
            EntryChange::Rekey(new_key, new_value) => {
                self.remove(&key);
                self.insert(new_key, new_value.unwrap_or(value));
            }
            EntryChange::Revalue(new_value) => {
                self.insert(key, new_value);
            }
        })
    }
}
