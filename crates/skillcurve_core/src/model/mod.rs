//! Domain model for skill definitions and projection output.
//!
//! # Responsibility
//! - Define the static per-skill record and its parameter invariants.
//! - Define the transient records handed to chart renderers.
//!
//! # Invariants
//! - Definitions are plain values; nothing here holds shared state.
//! - Projection records are derived and never persisted.

pub mod projection;
pub mod skill;
