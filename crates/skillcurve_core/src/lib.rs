//! Core skill-growth projection model.
//! This crate owns the growth curve, registry invariants and ranking rules.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod projection;
pub mod registry;

pub use catalog::builtin::{builtin_catalog_text, builtin_registry, BUILTIN_CATALOG_ORIGIN};
pub use catalog::loader::{load_catalog, parse_catalog_str, CatalogError, CatalogResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::projection::{CategorySummary, ChartSeries, ProjectionResult};
pub use model::skill::{
    CeilingPolicy, SkillDefinition, SkillField, SkillValidationError, DEFAULT_CATEGORY,
    SKILL_LEVEL_MAX, SKILL_LEVEL_MIN,
};
pub use projection::growth::{growth_factor, predict};
pub use projection::projector::{
    chart_series, project, summarize_by_category, top_n, ProjectionTable, TopNError,
};
pub use registry::skill_registry::{RegistryError, SkillRegistry, SkillRegistryBuilder};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
