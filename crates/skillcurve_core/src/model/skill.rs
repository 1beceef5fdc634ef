//! Skill definition model.
//!
//! # Responsibility
//! - Define the static record stored once per named skill.
//! - Validate numeric growth parameters before a skill is admitted.
//!
//! # Invariants
//! - `base` and `ceiling` lie in `[SKILL_LEVEL_MIN, SKILL_LEVEL_MAX]`.
//! - `rate` and `shape` are finite and strictly positive.
//! - `ceiling >= base` unless the caller opts into `CeilingPolicy::AllowRegression`.

use crate::projection::growth::predict;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest proficiency a skill can hold or be projected to.
pub const SKILL_LEVEL_MIN: f64 = 0.0;
/// Highest proficiency a skill can hold or be projected to.
pub const SKILL_LEVEL_MAX: f64 = 100.0;
/// Category assigned when a catalog entry leaves it out.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Numeric field of a `SkillDefinition`, used to pinpoint validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillField {
    Base,
    Ceiling,
    Rate,
    Shape,
}

impl SkillField {
    /// Stable field name matching the catalog key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Ceiling => "ceiling",
            Self::Rate => "rate",
            Self::Shape => "shape",
        }
    }
}

impl Display for SkillField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule applied to definitions whose `ceiling` sits below `base`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CeilingPolicy {
    /// `ceiling < base` is an invalid parameter.
    #[default]
    Reject,
    /// `ceiling < base` is accepted and the curve decays toward the ceiling.
    AllowRegression,
}

impl CeilingPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::AllowRegression => "allow_regression",
        }
    }
}

/// Static growth-curve parameters for one named skill.
///
/// Catalog files may use the short keys `max`, `k` and `p` for
/// `ceiling`, `rate` and `shape`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillDefinition {
    /// Unique display key. Trimmed by the registry on admission.
    pub name: String,
    /// Current proficiency in `[0, 100]`.
    pub base: f64,
    /// Reachable proficiency in `[0, 100]`.
    #[serde(alias = "max")]
    pub ceiling: f64,
    /// Growth-rate constant `k`; larger values converge sooner.
    #[serde(alias = "k")]
    pub rate: f64,
    /// Curve exponent `p`; `1.0` is plain exponential saturation.
    #[serde(alias = "p")]
    pub shape: f64,
    /// Display grouping label. Never read by the projector.
    #[serde(default = "default_category")]
    pub category: String,
}

impl SkillDefinition {
    /// Creates a definition in the default category.
    ///
    /// No validation happens here; the registry validates on build.
    pub fn new(name: impl Into<String>, base: f64, ceiling: f64, rate: f64, shape: f64) -> Self {
        Self {
            name: name.into(),
            base,
            ceiling,
            rate,
            shape,
            category: default_category(),
        }
    }

    /// Replaces the display category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Projected proficiency after `elapsed` years.
    pub fn predict(&self, elapsed: f64) -> f64 {
        predict(self.base, self.ceiling, self.rate, self.shape, elapsed)
    }

    /// Checks numeric parameter invariants.
    ///
    /// Fields are checked in declaration order and the first violation wins.
    ///
    /// # Errors
    /// - Any numeric field is NaN or infinite.
    /// - `base` or `ceiling` is outside `[0, 100]`.
    /// - `rate` or `shape` is zero or negative.
    /// - `ceiling < base` while `policy` is `CeilingPolicy::Reject`.
    pub fn validate_parameters(&self, policy: CeilingPolicy) -> Result<(), SkillValidationError> {
        let fields = [
            (SkillField::Base, self.base),
            (SkillField::Ceiling, self.ceiling),
            (SkillField::Rate, self.rate),
            (SkillField::Shape, self.shape),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(SkillValidationError::NonFinite { field, value });
            }
        }

        for (field, value) in [
            (SkillField::Base, self.base),
            (SkillField::Ceiling, self.ceiling),
        ] {
            if !(SKILL_LEVEL_MIN..=SKILL_LEVEL_MAX).contains(&value) {
                return Err(SkillValidationError::LevelOutOfRange { field, value });
            }
        }

        for (field, value) in [
            (SkillField::Rate, self.rate),
            (SkillField::Shape, self.shape),
        ] {
            if value <= 0.0 {
                return Err(SkillValidationError::NonPositive { field, value });
            }
        }

        if policy == CeilingPolicy::Reject && self.ceiling < self.base {
            return Err(SkillValidationError::CeilingBelowBase {
                base: self.base,
                ceiling: self.ceiling,
            });
        }
        Ok(())
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Parameter-level validation failures for one definition.
#[derive(Debug, Clone, PartialEq)]
pub enum SkillValidationError {
    NonFinite { field: SkillField, value: f64 },
    LevelOutOfRange { field: SkillField, value: f64 },
    NonPositive { field: SkillField, value: f64 },
    CeilingBelowBase { base: f64, ceiling: f64 },
}

impl SkillValidationError {
    /// Field the failure is attributed to.
    pub fn field(&self) -> SkillField {
        match self {
            Self::NonFinite { field, .. }
            | Self::LevelOutOfRange { field, .. }
            | Self::NonPositive { field, .. } => *field,
            Self::CeilingBelowBase { .. } => SkillField::Ceiling,
        }
    }
}

impl Display for SkillValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite { field, value } => {
                write!(f, "{field} must be a finite number, got {value}")
            }
            Self::LevelOutOfRange { field, value } => write!(
                f,
                "{field} must be within [{SKILL_LEVEL_MIN}, {SKILL_LEVEL_MAX}], got {value}"
            ),
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be greater than 0, got {value}")
            }
            Self::CeilingBelowBase { base, ceiling } => {
                write!(f, "ceiling ({ceiling}) must be >= base ({base})")
            }
        }
    }
}

impl Error for SkillValidationError {}
