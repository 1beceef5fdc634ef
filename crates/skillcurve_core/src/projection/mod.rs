//! Growth projection entry points.
//!
//! # Responsibility
//! - Evaluate the saturating growth curve for one skill.
//! - Project, rank and shape a whole registry for chart consumers.
//!
//! # Invariants
//! - Every function here is pure; repeated calls with equal inputs return
//!   equal outputs.

pub mod growth;
pub mod projector;
