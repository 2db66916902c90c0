//! Template registry
//!
//! Provides [`TemplateRegistry`], which maps a recipe kind to the factory that
//! rebuilds a typed template from its JSON form.

use crate::error::TemplateError;
use crate::template::RecipeTemplate;
use crate::templates::{ShapedRecipeTemplate, ShapelessRecipeTemplate, StonecutterRecipeTemplate};
use matswap_item::ResourceLocation;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Builds a template from its serialized form
pub type TemplateFactory =
    Arc<dyn Fn(&Value) -> Result<Box<dyn RecipeTemplate>, TemplateError> + Send + Sync>;

static GLOBAL: Lazy<TemplateRegistry> = Lazy::new(TemplateRegistry::with_defaults);

/// Factory for any template that deserializes straight from its JSON
///
/// # Errors
/// Returns [`TemplateError::Malformed`] if `json` does not match `T`.
pub fn deserialize_template<T>(json: &Value) -> Result<Box<dyn RecipeTemplate>, TemplateError>
where
    T: RecipeTemplate + DeserializeOwned,
{
    T::deserialize(json)
        .map(|template| Box::new(template) as Box<dyn RecipeTemplate>)
        .map_err(|source| {
            let kind = json.get("type").and_then(Value::as_str).unwrap_or_default();
            TemplateError::malformed(kind, source)
        })
}

/// Registry of template factories keyed by recipe kind
///
/// Read-mostly: registration takes a write lock, [`read`](Self::read) only
/// holds the read lock long enough to clone the factory.
pub struct TemplateRegistry {
    factories: RwLock<HashMap<ResourceLocation, TemplateFactory>>,
}

impl TemplateRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: RwLock::new(HashMap::new()),
        }
    }

    /// Create registry with the built-in templates
    #[must_use]
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register_kind(
            ResourceLocation::minecraft("crafting_shaped"),
            deserialize_template::<ShapedRecipeTemplate>,
        );
        registry.register_kind(
            ResourceLocation::minecraft("crafting_shapeless"),
            deserialize_template::<ShapelessRecipeTemplate>,
        );
        registry.register_kind(
            ResourceLocation::minecraft("stonecutting"),
            deserialize_template::<StonecutterRecipeTemplate>,
        );
        registry
    }

    /// Process-wide registry, created with the defaults on first use
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Register a factory for `kind`; a bare path uses the default namespace
    ///
    /// # Errors
    /// Returns [`TemplateError::InvalidKind`] if `kind` is not a valid
    /// resource location.
    pub fn register<F>(&self, kind: &str, factory: F) -> Result<(), TemplateError>
    where
        F: Fn(&Value) -> Result<Box<dyn RecipeTemplate>, TemplateError> + Send + Sync + 'static,
    {
        let location = parse_kind(kind)?;
        self.register_kind(location, factory);
        Ok(())
    }

    /// Register a factory for an already parsed kind; last registration wins
    pub fn register_kind<F>(&self, kind: ResourceLocation, factory: F)
    where
        F: Fn(&Value) -> Result<Box<dyn RecipeTemplate>, TemplateError> + Send + Sync + 'static,
    {
        let previous = self.factories.write().insert(kind.clone(), Arc::new(factory));
        if previous.is_some() {
            tracing::info!(kind = %kind, "Replaced recipe template factory");
        }
    }

    /// Rebuild a template from its serialized form
    ///
    /// # Errors
    /// - [`TemplateError::MissingKind`] if `"type"` is absent or not a string
    /// - [`TemplateError::InvalidKind`] if `"type"` does not parse
    /// - [`TemplateError::UnsupportedKind`] if no factory is registered
    /// - whatever the factory returns
    pub fn read(&self, json: &Value) -> Result<Box<dyn RecipeTemplate>, TemplateError> {
        let raw = json
            .get("type")
            .and_then(Value::as_str)
            .ok_or(TemplateError::MissingKind)?;
        let kind = parse_kind(raw)?;

        let factory = self
            .factories
            .read()
            .get(&kind)
            .cloned()
            .ok_or_else(|| TemplateError::UnsupportedKind(raw.to_string()))?;

        factory(json)
    }

    /// Check if a factory is registered for `kind`
    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        parse_kind(kind).is_ok_and(|kind| self.factories.read().contains_key(&kind))
    }

    /// Registered kinds, sorted
    #[must_use]
    pub fn kinds(&self) -> Vec<ResourceLocation> {
        let mut kinds: Vec<_> = self.factories.read().keys().cloned().collect();
        kinds.sort();
        kinds
    }

    /// Get number of registered kinds
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.read().len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.read().is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

fn parse_kind(raw: &str) -> Result<ResourceLocation, TemplateError> {
    raw.parse().map_err(|source| TemplateError::InvalidKind {
        value: raw.to_string(),
        source,
    })
}
