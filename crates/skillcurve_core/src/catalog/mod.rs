//! Skill catalog configuration.
//!
//! # Responsibility
//! - Load registries from TOML catalog files or the embedded default.
//!
//! # Invariants
//! - Loading never bypasses registry validation.
//!
//! # See also
//! - crates/skillcurve_core/data/default_skills.toml

pub mod builtin;
pub mod loader;
