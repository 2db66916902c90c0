//! Recipe conversion entry point

use crate::config::ConverterConfig;
use crate::error::ConvertError;
use crate::rewriter::Rewriter;
use crate::substitution::Substitution;
use matswap_item::{Item, Material, ResourceLocation};
use matswap_shape::{PlanCache, Record};
use matswap_template::{RecipeTemplate, TemplateRegistry};

/// Produces material-substituted copies of recipe templates
///
/// Holds the template registry used to copy recipes and the plan cache used
/// to locate their convertible fields. [`RecipeConverter::new`] uses the
/// process-wide instances of both.
#[derive(Debug, Clone)]
pub struct RecipeConverter<'a> {
    registry: &'a TemplateRegistry,
    plans: &'a PlanCache,
    config: ConverterConfig,
}

impl RecipeConverter<'static> {
    /// Create converter over the global registry and plan cache
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(TemplateRegistry::global(), PlanCache::global())
    }
}

impl Default for RecipeConverter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> RecipeConverter<'a> {
    /// Create converter over an explicit registry and plan cache
    #[must_use]
    pub fn with_parts(registry: &'a TemplateRegistry, plans: &'a PlanCache) -> Self {
        Self {
            registry,
            plans,
            config: ConverterConfig::default(),
        }
    }

    /// Set configuration
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: ConverterConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert a copy of `recipe` from `from` to `to`
    ///
    /// On success the copy is unlocked by `unlock_item` and, when `id` is
    /// given, takes that identity. Returns `None` when the recipe has no
    /// analogue in `to`; the reason is logged. `recipe` is never modified.
    #[must_use]
    pub fn create_similar(
        &self,
        recipe: &dyn RecipeTemplate,
        from: &dyn Material,
        to: &dyn Material,
        unlock_item: &Item,
        id: Option<ResourceLocation>,
    ) -> Option<Box<dyn RecipeTemplate>> {
        match self.try_create_similar(recipe, from, to, unlock_item, id) {
            Ok(copy) => Some(copy),
            Err(error) => {
                tracing::error!(
                    kind = %recipe.kind(),
                    recipe = %recipe.describe(),
                    from = %from.id(),
                    to = %to.id(),
                    error = %error,
                    "Failed to create similar recipe"
                );
                None
            }
        }
    }

    /// Same as [`create_similar`](Self::create_similar), returning the reason
    /// for failure
    ///
    /// # Errors
    /// - [`ConvertError::Template`] if the recipe cannot be copied through
    ///   the registry
    /// - any error from [`Rewriter::convert`]
    pub fn try_create_similar(
        &self,
        recipe: &dyn RecipeTemplate,
        from: &dyn Material,
        to: &dyn Material,
        unlock_item: &Item,
        id: Option<ResourceLocation>,
    ) -> Result<Box<dyn RecipeTemplate>, ConvertError> {
        let mut copy = self.registry.read(&recipe.to_json()?)?;
        self.convert(copy.as_record_mut(), from, to)?;

        copy.set_unlocked_by(unlock_item.clone());
        if let Some(id) = id {
            copy.set_id(id);
        }
        Ok(copy)
    }

    /// Convert `record` in place
    ///
    /// On failure `record` may be partially converted.
    ///
    /// # Errors
    /// See [`Rewriter::convert`].
    pub fn convert(
        &self,
        record: &mut dyn Record,
        from: &dyn Material,
        to: &dyn Material,
    ) -> Result<(), ConvertError> {
        let substitution = Substitution::new(from, to, &self.config);
        Rewriter::new(self.plans, substitution).convert(record)
    }
}
