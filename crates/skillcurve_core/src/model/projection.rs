//! Projection output records consumed by chart renderers.
//!
//! # Invariants
//! - `ProjectionResult::predicted` is always within `[0, 100]`.
//! - `ChartSeries` vectors have equal length and share one ordering.

use serde::{Deserialize, Serialize};

/// Current and projected proficiency of one skill at one elapsed time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub name: String,
    /// Copied from the definition's `base`.
    pub current: f64,
    pub predicted: f64,
    pub category: String,
}

impl ProjectionResult {
    /// Signed change from current to predicted level.
    pub fn delta(&self) -> f64 {
        self.predicted - self.current
    }
}

/// Parallel current/predicted series for a bar or radar chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub current: Vec<f64>,
    pub predicted: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Per-category aggregate of a projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub skill_count: usize,
    pub mean_current: f64,
    pub mean_predicted: f64,
}
