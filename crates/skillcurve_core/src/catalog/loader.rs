//! TOML catalog parsing into a validated registry.
//!
//! # Responsibility
//! - Decode `[[skills]]` catalog documents.
//! - Hand decoded definitions to the registry builder for validation.
//!
//! # Invariants
//! - Array order in the document is the registry insertion order.
//! - Numeric fields have no defaults; a missing field is a parse error.
//! - Unknown keys are rejected instead of silently ignored.

use crate::model::skill::{CeilingPolicy, SkillDefinition};
use crate::registry::skill_registry::{RegistryError, SkillRegistry};
use log::{error, info};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Instant;

/// Result type for catalog loading APIs.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog loading errors. `origin` names the file or embedded source.
#[derive(Debug)]
pub enum CatalogError {
    Io {
        origin: String,
        error: std::io::Error,
    },
    Parse {
        origin: String,
        message: String,
    },
    /// Document contains no `[[skills]]` entries.
    Empty {
        origin: String,
    },
    Registry {
        origin: String,
        error: RegistryError,
    },
}

impl CatalogError {
    pub fn origin(&self) -> &str {
        match self {
            Self::Io { origin, .. }
            | Self::Parse { origin, .. }
            | Self::Empty { origin }
            | Self::Registry { origin, .. } => origin,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "catalog_read_failed",
            Self::Parse { .. } => "catalog_parse_failed",
            Self::Empty { .. } => "catalog_empty",
            Self::Registry { .. } => "catalog_invalid",
        }
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { origin, error } => write!(f, "failed to read catalog `{origin}`: {error}"),
            Self::Parse { origin, message } => {
                write!(f, "failed to parse catalog `{origin}`: {message}")
            }
            Self::Empty { origin } => write!(f, "catalog `{origin}` defines no skills"),
            Self::Registry { origin, error } => write!(f, "catalog `{origin}`: {error}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { error, .. } => Some(error),
            Self::Registry { error, .. } => Some(error),
            Self::Parse { .. } | Self::Empty { .. } => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default)]
    ceiling_policy: CeilingPolicy,
    #[serde(default)]
    skills: Vec<SkillDefinition>,
}

/// Parses catalog text. `origin` is only used in errors and logs.
pub fn parse_catalog_str(text: &str, origin: &str) -> CatalogResult<SkillRegistry> {
    let started_at = Instant::now();
    match decode_catalog(text, origin) {
        Ok(registry) => {
            info!(
                "event=catalog_load module=catalog status=ok origin={} skills={} duration_ms={}",
                origin,
                registry.len(),
                started_at.elapsed().as_millis()
            );
            Ok(registry)
        }
        Err(err) => {
            error!(
                "event=catalog_load module=catalog status=error origin={} error_code={} duration_ms={}",
                origin,
                err.code(),
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

/// Reads and parses a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> CatalogResult<SkillRegistry> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|error| {
        error!(
            "event=catalog_load module=catalog status=error origin={} error_code=catalog_read_failed error={}",
            origin, error
        );
        CatalogError::Io {
            origin: origin.clone(),
            error,
        }
    })?;
    parse_catalog_str(&text, &origin)
}

fn decode_catalog(text: &str, origin: &str) -> CatalogResult<SkillRegistry> {
    let document: CatalogDocument =
        toml::from_str(text).map_err(|err| CatalogError::Parse {
            origin: origin.to_string(),
            message: err.to_string().trim_end().to_string(),
        })?;

    if document.skills.is_empty() {
        return Err(CatalogError::Empty {
            origin: origin.to_string(),
        });
    }

    document
        .skills
        .into_iter()
        .fold(
            SkillRegistry::builder().with_ceiling_policy(document.ceiling_policy),
            |builder, definition| builder.skill(definition),
        )
        .build()
        .map_err(|error| CatalogError::Registry {
            origin: origin.to_string(),
            error,
        })
}
