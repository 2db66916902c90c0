//! Namespaced identifiers
//!
//! Provides [`ResourceLocation`], the `namespace:path` key used for items,
//! materials, recipe ids and recipe kinds.

use crate::error::ItemError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Namespaced identifier, displayed as `namespace:path`
///
/// A bare `path` parses into the [`ResourceLocation::DEFAULT_NAMESPACE`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceLocation {
    namespace: String,
    path: String,
}

impl ResourceLocation {
    /// Namespace assumed when none is given
    pub const DEFAULT_NAMESPACE: &'static str = "minecraft";

    /// Create from already separated parts
    ///
    /// # Errors
    /// Returns error if either part is empty or holds invalid characters
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Result<Self, ItemError> {
        let namespace = namespace.into();
        let path = path.into();

        if namespace.is_empty() || !namespace.chars().all(is_namespace_char) {
            return Err(ItemError::InvalidNamespace(format!("{namespace}:{path}")));
        }
        if path.is_empty() || !path.chars().all(is_path_char) {
            return Err(ItemError::InvalidPath(format!("{namespace}:{path}")));
        }

        Ok(Self { namespace, path })
    }

    /// Create from parts known to be valid
    pub(crate) fn from_static(namespace: &'static str, path: &'static str) -> Self {
        Self {
            namespace: namespace.to_owned(),
            path: path.to_owned(),
        }
    }

    /// Built-in identifier in the default namespace
    ///
    /// `path` must be a valid literal path; it is checked in debug builds only.
    #[must_use]
    pub fn minecraft(path: &'static str) -> Self {
        debug_assert!(!path.is_empty() && path.chars().all(is_path_char));
        Self::from_static(Self::DEFAULT_NAMESPACE, path)
    }

    /// Namespace part
    #[inline]
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Path part
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl FromStr for ResourceLocation {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ItemError::Empty);
        }
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(Self::DEFAULT_NAMESPACE, s),
        }
    }
}

impl TryFrom<String> for ResourceLocation {
    type Error = ItemError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResourceLocation> for String {
    fn from(value: ResourceLocation) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_with_namespace() {
        let loc: ResourceLocation = "mymod:oak_table".parse().unwrap();
        assert_eq!(loc.namespace(), "mymod");
        assert_eq!(loc.path(), "oak_table");
    }

    #[test]
    fn parse_defaults_namespace() {
        let loc: ResourceLocation = "crafting_shaped".parse().unwrap();
        assert_eq!(loc.to_string(), "minecraft:crafting_shaped");
    }

    #[test]
    fn minecraft_builtin() {
        let loc = ResourceLocation::minecraft("stonecutting");
        assert_eq!(loc, "stonecutting".parse().unwrap());
    }

    #[test]
    fn parse_nested_path() {
        let loc: ResourceLocation = "mymod:block/oak_table".parse().unwrap();
        assert_eq!(loc.path(), "block/oak_table");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!("".parse::<ResourceLocation>(), Err(ItemError::Empty));
        assert!(matches!(
            ":planks".parse::<ResourceLocation>(),
            Err(ItemError::InvalidNamespace(_))
        ));
        assert!(matches!(
            "minecraft:".parse::<ResourceLocation>(),
            Err(ItemError::InvalidPath(_))
        ));
    }

    #[test]
    fn parse_rejects_uppercase() {
        assert!("Minecraft:oak".parse::<ResourceLocation>().is_err());
        assert!("minecraft:Oak".parse::<ResourceLocation>().is_err());
    }

    #[test]
    fn serde_as_string() {
        let loc: ResourceLocation = "minecraft:oak_planks".parse().unwrap();
        let json = serde_json::to_string(&loc).unwrap();
        assert_eq!(json, "\"minecraft:oak_planks\"");

        let back: ResourceLocation = serde_json::from_str("\"oak_planks\"").unwrap();
        assert_eq!(back, loc);
    }

    proptest! {
        #[test]
        fn prop_display_reparses(ns in "[a-z0-9_]{1,8}", path in "[a-z0-9_/]{1,16}") {
            let loc = ResourceLocation::new(ns, path).unwrap();
            let reparsed: ResourceLocation = loc.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, loc);
        }
    }
}
