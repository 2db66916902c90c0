//! Material table loaded from TOML
//!
//! ```toml
//! placeholder = "minecraft:barrier"
//!
//! [[materials]]
//! id = "oak"
//! [materials.children]
//! planks = "minecraft:oak_planks"
//! door = "minecraft:oak_door"
//! ```

use anyhow::{Context, Result};
use matswap_convert::ConverterConfig;
use matswap_item::{BlockType, Item, Material, ResourceLocation};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Materials known to the command line, plus converter settings
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MaterialTable {
    #[serde(default)]
    placeholder: Option<Item>,
    #[serde(default)]
    materials: Vec<BlockType>,
}

impl MaterialTable {
    /// Load table from a TOML file
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read material table {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("failed to parse material table {}", path.display()))
    }

    pub(crate) fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Material with identifier `id`
    pub(crate) fn material(&self, id: &ResourceLocation) -> Result<&BlockType> {
        self.materials
            .iter()
            .find(|material| material.id() == id)
            .with_context(|| format!("unknown material {id}"))
    }

    pub(crate) fn converter_config(&self) -> ConverterConfig {
        match &self.placeholder {
            Some(placeholder) => ConverterConfig::default().with_placeholder(placeholder.clone()),
            None => ConverterConfig::default(),
        }
    }
}
