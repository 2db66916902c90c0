//! Subcommand implementations

use crate::config::MaterialTable;
use anyhow::{Context, Result};
use matswap_convert::RecipeConverter;
use matswap_item::{Item, Material, ResourceLocation};
use matswap_template::TemplateRegistry;
use serde_json::Value;

/// Arguments of `matswap convert`
#[derive(Debug)]
pub(crate) struct ConvertRequest {
    pub(crate) from: ResourceLocation,
    pub(crate) to: ResourceLocation,
    pub(crate) unlock: Option<Item>,
    pub(crate) id: Option<ResourceLocation>,
}

/// Convert one serialized recipe and return the converted JSON
///
/// Without an explicit unlock item, the recipe's own unlock item is carried
/// over to the destination material, falling back to the destination's
/// first child.
pub(crate) fn convert(
    registry: &TemplateRegistry,
    table: &MaterialTable,
    recipe: &Value,
    request: ConvertRequest,
) -> Result<Value> {
    let from = table.material(&request.from)?;
    let to = table.material(&request.to)?;
    let template = registry.read(recipe).context("failed to read recipe")?;

    let unlock = match request.unlock {
        Some(item) => item,
        None => template
            .unlocked_by()
            .and_then(|item| from.change_item_type(item, to))
            .or_else(|| to.children().next().map(|(_, item)| item.clone()))
            .with_context(|| format!("material {} has no items to unlock with", to.id()))?,
    };

    tracing::info!(kind = %template.kind(), from = %from.id(), to = %to.id(), "Converting recipe");

    let converter = RecipeConverter::new().with_config(table.converter_config());
    let converted = converter
        .try_create_similar(template.as_ref(), from, to, &unlock, request.id)
        .with_context(|| {
            format!(
                "no {} analogue for {} recipe",
                to.id(),
                template.kind()
            )
        })?;
    Ok(converted.to_json()?)
}

/// Registered template kinds, one per line
pub(crate) fn kinds(registry: &TemplateRegistry) -> String {
    registry
        .kinds()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
