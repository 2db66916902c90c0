//! In-place rewriting of a record's convertible fields
//!
//! [`Rewriter::convert`] visits every field in the record's plan (own fields,
//! then inherited ones) and substitutes each leaf it finds. A field that was
//! expected to change but did not is an error; the record may then be left
//! partially converted, which is why callers convert a working copy.
//! Records reached through nested or optional fields follow the same rules,
//! so a sub-record with no convertible field fails the whole conversion.

use crate::error::{ConversionSite, ConvertError};
use crate::substitution::Substitution;
use matswap_shape::{EntryRewrite, FieldRef, FieldSlot, LeafCell, OptionalSlot, PlanCache, Record};

/// Converts records in place for one material pairing
#[derive(Debug, Clone, Copy)]
pub struct Rewriter<'a> {
    plans: &'a PlanCache,
    substitution: Substitution<'a>,
}

impl<'a> Rewriter<'a> {
    /// Create rewriter resolving plans through `plans`
    #[must_use]
    pub fn new(plans: &'a PlanCache, substitution: Substitution<'a>) -> Self {
        Self {
            plans,
            substitution,
        }
    }

    /// Convert every convertible field of `recipe`
    ///
    /// # Errors
    /// - [`ConvertError::NothingToConvert`] if the record's shape declares no
    ///   convertible field
    /// - [`ConvertError::ZeroProgress`] if a sequence or mapping had nothing
    ///   to substitute
    /// - [`ConvertError::ScalarSubstitution`] if a single value has no
    ///   analogue
    /// - [`ConvertError::ShapeMismatch`] if the record does not expose a
    ///   field its shape declares
    pub fn convert(&self, recipe: &mut dyn Record) -> Result<(), ConvertError> {
        let plan = self.plans.plan_for(recipe);
        let description = recipe.describe();
        if plan.is_empty() {
            return Err(ConvertError::NothingToConvert {
                site: self.site(&description),
            });
        }

        for field in plan.fields() {
            self.convert_field(recipe, field, &description)?;
        }
        Ok(())
    }

    fn convert_field(
        &self,
        recipe: &mut dyn Record,
        field: &FieldRef,
        description: &str,
    ) -> Result<(), ConvertError> {
        tracing::trace!(
            recipe = description,
            field = field.name(),
            category = ?field.category(),
            "rewriting field"
        );

        let mismatch = || ConvertError::ShapeMismatch {
            shape: field.declared_on(),
            field: field.name(),
        };
        let slot = field.slot(recipe).ok_or_else(mismatch)?;
        if !field.category().accepts(&slot) {
            return Err(mismatch());
        }

        match slot {
            FieldSlot::Scalar(cell) | FieldSlot::Optional(OptionalSlot::Leaf(Some(cell))) => {
                self.convert_scalar(cell, field, description)
            }
            FieldSlot::Sequence(values) => {
                let replaced =
                    values.rewrite_elements(&mut |value| self.substitution.apply(value));
                self.require_progress(replaced, field, description)
            }
            FieldSlot::Mapping(entries) => {
                let changed = entries.rewrite_entries(&mut |key, value| EntryRewrite {
                    key: self.substitution.apply(key),
                    value: self.substitution.apply(value),
                });
                self.require_progress(changed, field, description)
            }
            FieldSlot::Nested(record) | FieldSlot::Optional(OptionalSlot::Record(Some(record))) => {
                self.convert(record)
            }
            FieldSlot::Optional(OptionalSlot::Leaf(None) | OptionalSlot::Record(None)) => Ok(()),
        }
    }

    fn convert_scalar(
        &self,
        cell: &mut dyn LeafCell,
        field: &FieldRef,
        description: &str,
    ) -> Result<(), ConvertError> {
        if let Some(value) = self.substitution.apply(cell.leaf()) {
            if cell.replace(value) {
                return Ok(());
            }
        }
        Err(ConvertError::ScalarSubstitution {
            value: cell.leaf().to_string(),
            field: field.name(),
            site: self.site(description),
        })
    }

    fn require_progress(
        &self,
        changed: usize,
        field: &FieldRef,
        description: &str,
    ) -> Result<(), ConvertError> {
        if changed > 0 {
            return Ok(());
        }
        Err(ConvertError::ZeroProgress {
            field: field.name(),
            site: self.site(description),
        })
    }

    fn site(&self, description: &str) -> Box<ConversionSite> {
        Box::new(ConversionSite {
            recipe: description.to_string(),
            from: self.substitution.source().id().clone(),
            to: self.substitution.destination().id().clone(),
        })
    }
}
