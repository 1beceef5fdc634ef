//! Text and JSON rendering for CLI output.

use anyhow::{Context, Result};
use serde_json::json;
use skillcurve_core::{CategorySummary, ProjectionResult};

pub fn projection_table(years: f64, rows: &[ProjectionResult]) -> String {
    let name_width = column_width(rows.iter().map(|row| row.name.as_str()), "skill");
    let category_width = column_width(rows.iter().map(|row| row.category.as_str()), "category");

    let mut out = format!("Projected skills @ {years} yrs\n");
    out.push_str(&format!(
        "{:>4}  {:<name_width$}  {:<category_width$}  {:>7}  {:>9}  {:>7}\n",
        "#", "skill", "category", "current", "predicted", "delta"
    ));
    for (position, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<name_width$}  {:<category_width$}  {:>7.1}  {:>9.1}  {:>+7.1}\n",
            position + 1,
            row.name,
            row.category,
            row.current,
            row.predicted,
            row.delta()
        ));
    }
    out.trim_end().to_string()
}

pub fn projection_json(years: f64, rows: &[ProjectionResult]) -> Result<String> {
    serde_json::to_string_pretty(&json!({ "years": years, "skills": rows }))
        .context("failed to encode projection as JSON")
}

pub fn category_table(years: f64, summaries: &[CategorySummary]) -> String {
    let width = column_width(
        summaries.iter().map(|summary| summary.category.as_str()),
        "category",
    );

    let mut out = format!("Category averages @ {years} yrs\n");
    out.push_str(&format!(
        "{:<width$}  {:>6}  {:>7}  {:>9}\n",
        "category", "skills", "current", "predicted"
    ));
    for summary in summaries {
        out.push_str(&format!(
            "{:<width$}  {:>6}  {:>7.1}  {:>9.1}\n",
            summary.category, summary.skill_count, summary.mean_current, summary.mean_predicted
        ));
    }
    out.trim_end().to_string()
}

pub fn category_json(years: f64, summaries: &[CategorySummary]) -> Result<String> {
    serde_json::to_string_pretty(&json!({ "years": years, "categories": summaries }))
        .context("failed to encode category summary as JSON")
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|value| value.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}

#[cfg(test)]
mod tests {
    use super::{category_table, projection_json, projection_table};
    use skillcurve_core::{CategorySummary, ProjectionResult};

    fn rows() -> Vec<ProjectionResult> {
        vec![
            ProjectionResult {
                name: "Python".to_string(),
                current: 70.0,
                predicted: 81.28,
                category: "ML".to_string(),
            },
            ProjectionResult {
                name: "Kubernetes".to_string(),
                current: 10.0,
                predicted: 34.4,
                category: "DevOps".to_string(),
            },
        ]
    }

    #[test]
    fn table_lists_rows_in_given_order() {
        let table = projection_table(1.0, &rows());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("@ 1 yrs"));
        assert!(lines[2].contains("Python"));
        assert!(lines[2].contains("81.3"));
        assert!(lines[3].contains("Kubernetes"));
        assert!(lines[3].contains("+24.4"));
    }

    #[test]
    fn json_keeps_wire_field_names() {
        let encoded = projection_json(2.5, &rows()).expect("json");
        let value: serde_json::Value = serde_json::from_str(&encoded).expect("parse back");
        assert_eq!(value["years"], 2.5);
        assert_eq!(value["skills"][0]["name"], "Python");
        assert_eq!(value["skills"][1]["current"], 10.0);
    }

    #[test]
    fn category_table_has_one_line_per_category() {
        let summaries = vec![CategorySummary {
            category: "DevOps".to_string(),
            skill_count: 4,
            mean_current: 18.75,
            mean_predicted: 40.0,
        }];
        let table = category_table(0.5, &summaries);
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("DevOps"));
    }
}
