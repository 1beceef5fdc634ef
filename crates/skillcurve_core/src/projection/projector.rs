//! Registry-wide projection, ranking and chart shaping.
//!
//! # Responsibility
//! - Project every registered skill at one shared elapsed time.
//! - Rank results by predicted level and expose top-N slices.
//! - Shape ranked results into chart series and category summaries.
//!
//! # Invariants
//! - Ranking is descending by `predicted` and stable on ties, so equal
//!   predictions keep registry insertion order.
//! - Top-N, series and summaries never recompute or re-sort.

use crate::model::projection::{CategorySummary, ChartSeries, ProjectionResult};
use crate::registry::skill_registry::SkillRegistry;
use log::debug;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Top-N selection errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopNError {
    /// `requested` is zero or exceeds the number of ranked results.
    OutOfRange { requested: usize, available: usize },
}

impl Display for TopNError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange {
                requested,
                available,
            } => write!(
                f,
                "top-n request {requested} is out of range; expected 1..={available}"
            ),
        }
    }
}

impl Error for TopNError {}

/// Projects every skill in `registry` at `elapsed` years and ranks them.
pub fn project(registry: &SkillRegistry, elapsed: f64) -> Vec<ProjectionResult> {
    let mut results: Vec<ProjectionResult> = registry
        .iter()
        .map(|definition| ProjectionResult {
            name: definition.name.clone(),
            current: definition.base,
            predicted: definition.predict(elapsed),
            category: definition.category.clone(),
        })
        .collect();

    // `sort_by` is stable; predictions are never NaN after clamping.
    results.sort_by(|left, right| {
        right
            .predicted
            .partial_cmp(&left.predicted)
            .unwrap_or(Ordering::Equal)
    });

    debug!(
        "event=projection module=projection status=ok skills={} elapsed={}",
        results.len(),
        elapsed
    );
    results
}

/// Returns the first `n` ranked results.
///
/// Callers with a stricter minimum (for example radar charts that need
/// three axes) enforce it themselves.
///
/// # Errors
/// - `OutOfRange` when `n == 0` or `n > results.len()`.
pub fn top_n(results: &[ProjectionResult], n: usize) -> Result<&[ProjectionResult], TopNError> {
    if n == 0 || n > results.len() {
        return Err(TopNError::OutOfRange {
            requested: n,
            available: results.len(),
        });
    }
    Ok(&results[..n])
}

/// Splits ranked results into parallel label/current/predicted vectors.
pub fn chart_series(results: &[ProjectionResult]) -> ChartSeries {
    let mut series = ChartSeries {
        labels: Vec::with_capacity(results.len()),
        current: Vec::with_capacity(results.len()),
        predicted: Vec::with_capacity(results.len()),
    };
    for result in results {
        series.labels.push(result.name.clone());
        series.current.push(result.current);
        series.predicted.push(result.predicted);
    }
    series
}

/// Averages current and predicted levels per category.
///
/// Categories appear in the order they are first met in `results`.
pub fn summarize_by_category(results: &[ProjectionResult]) -> Vec<CategorySummary> {
    let mut positions = HashMap::<&str, usize>::new();
    let mut totals = Vec::<(&str, usize, f64, f64)>::new();

    for result in results {
        let position = *positions
            .entry(result.category.as_str())
            .or_insert_with(|| {
                totals.push((result.category.as_str(), 0, 0.0, 0.0));
                totals.len() - 1
            });
        let entry = &mut totals[position];
        entry.1 += 1;
        entry.2 += result.current;
        entry.3 += result.predicted;
    }

    totals
        .into_iter()
        .map(
            |(category, skill_count, current_sum, predicted_sum)| CategorySummary {
                category: category.to_string(),
                skill_count,
                mean_current: current_sum / skill_count as f64,
                mean_predicted: predicted_sum / skill_count as f64,
            },
        )
        .collect()
}

/// Ranked projection of one registry at one elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionTable {
    elapsed: f64,
    results: Vec<ProjectionResult>,
}

impl ProjectionTable {
    /// Projects `registry` at `elapsed` years.
    ///
    /// The stored elapsed value is the effective one (negative input becomes 0).
    pub fn compute(registry: &SkillRegistry, elapsed: f64) -> Self {
        Self {
            elapsed: elapsed.max(0.0),
            results: project(registry, elapsed),
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn results(&self) -> &[ProjectionResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns one projected skill by name. Input is trimmed.
    pub fn get(&self, name: &str) -> Option<&ProjectionResult> {
        let name = name.trim();
        self.results.iter().find(|result| result.name == name)
    }

    pub fn top_n(&self, n: usize) -> Result<&[ProjectionResult], TopNError> {
        top_n(&self.results, n)
    }

    pub fn series(&self) -> ChartSeries {
        chart_series(&self.results)
    }

    pub fn categories(&self) -> Vec<CategorySummary> {
        summarize_by_category(&self.results)
    }

    pub fn into_results(self) -> Vec<ProjectionResult> {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::{chart_series, project, summarize_by_category, top_n, TopNError};
    use crate::model::skill::SkillDefinition;
    use crate::registry::skill_registry::SkillRegistry;

    fn registry() -> SkillRegistry {
        SkillRegistry::from_definitions([
            SkillDefinition::new("Docker", 20.0, 90.0, 0.5, 1.0).with_category("DevOps"),
            SkillDefinition::new("Python", 70.0, 95.0, 0.6, 1.0).with_category("ML"),
            SkillDefinition::new("SQL", 60.0, 90.0, 0.5, 1.0).with_category("Analytics"),
        ])
        .expect("registry should build")
    }

    #[test]
    fn ranks_by_predicted_descending() {
        let results = project(&registry(), 0.0);
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Python", "SQL", "Docker"]);
        assert_eq!(results[0].current, 70.0);
        assert_eq!(results[0].predicted, 70.0);
    }

    #[test]
    fn top_n_rejects_zero_and_oversized_requests() {
        let results = project(&registry(), 1.0);
        assert_eq!(
            top_n(&results, 0).expect_err("zero must fail"),
            TopNError::OutOfRange {
                requested: 0,
                available: 3
            }
        );
        assert!(top_n(&results, 4).is_err());
        assert_eq!(top_n(&results, 3).expect("full range").len(), 3);
        assert_eq!(top_n(&results, 1).expect("single")[0].name, "Python");
    }

    #[test]
    fn series_are_parallel_to_ranking() {
        let results = project(&registry(), 2.0);
        let series = chart_series(&results);
        assert_eq!(series.len(), 3);
        for (position, result) in results.iter().enumerate() {
            assert_eq!(series.labels[position], result.name);
            assert_eq!(series.current[position], result.current);
            assert_eq!(series.predicted[position], result.predicted);
        }
    }

    #[test]
    fn summaries_average_per_category() {
        let registry = SkillRegistry::from_definitions([
            SkillDefinition::new("A", 40.0, 40.0, 0.5, 1.0).with_category("X"),
            SkillDefinition::new("B", 20.0, 20.0, 0.5, 1.0).with_category("Y"),
            SkillDefinition::new("C", 30.0, 30.0, 0.5, 1.0).with_category("X"),
        ])
        .expect("registry should build");
        let summaries = summarize_by_category(&project(&registry, 3.0));
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].category, "X");
        assert_eq!(summaries[0].skill_count, 2);
        assert_eq!(summaries[0].mean_current, 35.0);
        assert_eq!(summaries[0].mean_predicted, 35.0);
        assert_eq!(summaries[1].category, "Y");
    }
}
