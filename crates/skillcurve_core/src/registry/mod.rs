//! Skill registry construction and lookup.
//!
//! # Responsibility
//! - Turn raw definitions into one validated, immutable table.
//!
//! # Invariants
//! - Invalid definitions are rejected at build time, never defaulted.

pub mod skill_registry;
