//! Plan cache keyed by shape identity
//!
//! Provides [`PlanCache`], a concurrent build-once map from [`ShapeId`] to
//! shared [`ConvertiblePlan`]s. Shapes are fixed for the life of the process,
//! so entries are never invalidated.

use crate::plan::{build_plan, ConvertiblePlan};
use crate::record::{Record, Shape, ShapeId};
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::sync::Arc;

static GLOBAL: Lazy<PlanCache> = Lazy::new(PlanCache::new);

/// Concurrent cache of convertible-field plans
///
/// Concurrent first lookups of the same shape converge on a single plan:
/// the plan is built while the entry's shard is locked, and every later
/// lookup clones the same [`Arc`].
#[derive(Debug, Default)]
pub struct PlanCache {
    plans: DashMap<ShapeId, Arc<ConvertiblePlan>>,
}

impl PlanCache {
    /// Create empty cache
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            plans: DashMap::new(),
        }
    }

    /// Process-wide cache
    #[inline]
    #[must_use]
    pub fn global() -> &'static PlanCache {
        &GLOBAL
    }

    /// Plan for the runtime shape of `record`
    #[must_use]
    pub fn plan_for(&self, record: &dyn Record) -> Arc<ConvertiblePlan> {
        self.plan_for_shape(record.shape_id(), record.shape())
    }

    /// Plan for `shape`, building it on first use
    #[must_use]
    pub fn plan_for_shape(&self, id: ShapeId, shape: &'static Shape) -> Arc<ConvertiblePlan> {
        if let Some(plan) = self.plans.get(&id) {
            return Arc::clone(plan.value());
        }

        let entry = self.plans.entry(id).or_insert_with(|| {
            let plan = build_plan(shape);
            tracing::debug!(
                shape = shape.name,
                fields = plan.len(),
                "built convertible-field plan"
            );
            Arc::new(plan)
        });
        Arc::clone(entry.value())
    }

    /// Check if a plan for `id` was built
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &ShapeId) -> bool {
        self.plans.contains_key(id)
    }

    /// Number of cached plans
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Check if cache is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
