//! Embedded default catalog.

use super::loader::{parse_catalog_str, CatalogResult};
use crate::registry::skill_registry::SkillRegistry;

/// Origin label reported in logs and errors for the embedded catalog.
pub const BUILTIN_CATALOG_ORIGIN: &str = "builtin:default_skills.toml";

const BUILTIN_CATALOG: &str = include_str!("../../data/default_skills.toml");

/// Raw TOML text of the embedded catalog.
pub fn builtin_catalog_text() -> &'static str {
    BUILTIN_CATALOG
}

/// Parses the embedded catalog into a fresh registry.
pub fn builtin_registry() -> CatalogResult<SkillRegistry> {
    parse_catalog_str(BUILTIN_CATALOG, BUILTIN_CATALOG_ORIGIN)
}
