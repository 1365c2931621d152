use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::dashboard::selection::SummaryType;
use crate::error::PopulationError;
use crate::ingest::clean::parse_date;
use crate::summary::types::{Breakdown, SummaryResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    StackedBar,
    Line,
    Pie,
    Scatter,
}

/// One named trace. For pie charts `x` holds slice labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

/// A chart description the dashboard page can render as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub series: Vec<Series>,
}

impl Figure {
    /// An empty scatter carrying only a title.
    pub fn placeholder(title: impl Into<String>) -> Self {
        Self {
            kind: ChartKind::Scatter,
            title: title.into(),
            x_label: None,
            y_label: None,
            series: Vec::new(),
        }
    }
}

/// Builds the figure for `selection` from `summary`.
pub fn build_figure(selection: SummaryType, summary: &SummaryResult) -> Figure {
    match selection {
        SummaryType::Total => total_figure(summary),
        SummaryType::Gender => breakdown_figure(
            &summary.gender_summary,
            ChartKind::StackedBar,
            "Gender Breakdown by Year",
        ),
        SummaryType::Age => breakdown_figure(
            &summary.age_group_summary,
            ChartKind::Line,
            "Population by Age Group Over Time",
        ),
        SummaryType::Ethnicity => ethnicity_figure(summary),
    }
}

/// Placeholder shown when the selection is unknown or the data failed to load.
pub fn error_figure(err: &PopulationError) -> Figure {
    match err {
        PopulationError::InvalidSelection(_) => Figure::placeholder("Invalid Selection"),
        PopulationError::DataUnavailable(_) => {
            Figure::placeholder(format!("Error loading data: {err}"))
        }
    }
}

/// Year from a summary key. Keys are plain years today, but date-like keys
/// (`2021-01-01`, `2021-01-01 00:00:00`) are accepted as well.
fn year_of_key(key: &str) -> Option<i32> {
    key.trim()
        .parse::<i32>()
        .ok()
        .or_else(|| parse_date(key).map(|d| d.year()))
}

/// Summary keys paired with their year, sorted by year. Unreadable keys are
/// skipped.
fn sorted_years<'a>(keys: impl Iterator<Item = &'a String>) -> Vec<(i32, &'a str)> {
    let mut years: Vec<(i32, &str)> = keys
        .filter_map(|k| year_of_key(k).map(|y| (y, k.as_str())))
        .collect();
    years.sort();
    years
}

fn total_figure(summary: &SummaryResult) -> Figure {
    let years = sorted_years(summary.total_population_per_year.keys());

    let (x, y) = years
        .iter()
        .filter_map(|&(year, key)| {
            let total = summary.total_population_per_year[key].parse::<f64>().ok()?;
            Some((year.to_string(), total))
        })
        .unzip();

    Figure {
        kind: ChartKind::Bar,
        title: "Total Population Over Time".to_string(),
        x_label: Some("Year".to_string()),
        y_label: Some("Total Population".to_string()),
        series: vec![Series {
            name: "Total Population".to_string(),
            x,
            y,
        }],
    }
}

fn breakdown_figure(breakdown: &Breakdown, kind: ChartKind, title: &str) -> Figure {
    let years = sorted_years(breakdown.keys());
    let categories: BTreeSet<&str> = breakdown
        .values()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();

    let x: Vec<String> = years.iter().map(|(year, _)| year.to_string()).collect();
    let series = categories
        .into_iter()
        .map(|category| Series {
            name: category.to_string(),
            x: x.clone(),
            y: years
                .iter()
                .map(|(_, key)| breakdown[*key].get(category).copied().unwrap_or(0) as f64)
                .collect(),
        })
        .collect();

    Figure {
        kind,
        title: title.to_string(),
        x_label: Some("Year".to_string()),
        y_label: Some("Population".to_string()),
        series,
    }
}

/// Pie of the most recent year only.
fn ethnicity_figure(summary: &SummaryResult) -> Figure {
    let years = sorted_years(summary.ethnicity_summary.keys());
    let Some(&(latest, _)) = years.last() else {
        return Figure::placeholder("Ethnicity Distribution (no data)");
    };

    // Several keys can share a year when they are date-like, so sum them all.
    let mut totals: Vec<(String, f64)> = Vec::new();
    for (_, key) in years.iter().filter(|(year, _)| *year == latest) {
        for (ethnicity, population) in &summary.ethnicity_summary[*key] {
            match totals.iter_mut().find(|(name, _)| name == ethnicity) {
                Some((_, total)) => *total += *population as f64,
                None => totals.push((ethnicity.clone(), *population as f64)),
            }
        }
    }
    let (x, y) = totals.into_iter().unzip();

    Figure {
        kind: ChartKind::Pie,
        title: format!("Ethnicity Distribution ({latest})"),
        x_label: Some("Ethnicity".to_string()),
        y_label: Some("Population".to_string()),
        series: vec![Series {
            name: "Population".to_string(),
            x,
            y,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn row(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn sample() -> SummaryResult {
        let mut s = SummaryResult::default();
        s.total_population_per_year
            .insert("2021".into(), "32576.3".into());
        s.total_population_per_year
            .insert("2020".into(), "32447.4".into());
        s.gender_summary
            .insert("2020".into(), row(&[("male", 16), ("female", 15)]));
        s.gender_summary
            .insert("2021".into(), row(&[("male", 17), ("female", 0)]));
        s.age_group_summary
            .insert("2020".into(), row(&[("0-4", 2), ("5-9", 3)]));
        s.ethnicity_summary
            .insert("2020".into(), row(&[("malay", 100), ("chinese", 50)]));
        s.ethnicity_summary
            .insert("2021".into(), row(&[("malay", 110), ("chinese", 55)]));
        s
    }

    #[test]
    fn test_total_bar_sorted_by_year() {
        let fig = build_figure(SummaryType::Total, &sample());
        assert_eq!(fig.kind, ChartKind::Bar);
        assert_eq!(fig.title, "Total Population Over Time");
        assert_eq!(fig.series[0].x, vec!["2020", "2021"]);
        assert_eq!(fig.series[0].y, vec![32447.4, 32576.3]);
    }

    #[test]
    fn test_gender_stacked_series_per_category() {
        let fig = build_figure(SummaryType::Gender, &sample());
        assert_eq!(fig.kind, ChartKind::StackedBar);
        let names: Vec<_> = fig.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["female", "male"]);
        assert_eq!(fig.series[0].y, vec![15.0, 0.0]);
        assert_eq!(fig.series[1].y, vec![16.0, 17.0]);
    }

    #[test]
    fn test_age_line() {
        let fig = build_figure(SummaryType::Age, &sample());
        assert_eq!(fig.kind, ChartKind::Line);
        assert_eq!(fig.series.len(), 2);
        assert_eq!(fig.series[0].x, vec!["2020"]);
    }

    #[test]
    fn test_ethnicity_pie_uses_latest_year_only() {
        let fig = build_figure(SummaryType::Ethnicity, &sample());
        assert_eq!(fig.kind, ChartKind::Pie);
        assert_eq!(fig.title, "Ethnicity Distribution (2021)");

        let slices: BTreeMap<_, _> = fig.series[0]
            .x
            .iter()
            .cloned()
            .zip(fig.series[0].y.iter().copied())
            .collect();
        assert_eq!(slices["malay"], 110.0);
        assert_eq!(slices["chinese"], 55.0);
        assert_eq!(fig.series[0].y.iter().sum::<f64>(), 165.0);
    }

    #[test]
    fn test_ethnicity_pie_sums_date_like_keys_of_latest_year() {
        let mut s = SummaryResult::default();
        s.ethnicity_summary
            .insert("2020-01-01".into(), row(&[("malay", 5)]));
        s.ethnicity_summary
            .insert("2021-01-01".into(), row(&[("malay", 10), ("indian", 1)]));
        s.ethnicity_summary
            .insert("2021-07-01 00:00:00".into(), row(&[("malay", 20), ("indian", 2)]));

        let fig = build_figure(SummaryType::Ethnicity, &s);
        assert_eq!(fig.title, "Ethnicity Distribution (2021)");
        assert_eq!(fig.series[0].x, vec!["indian", "malay"]);
        assert_eq!(fig.series[0].y, vec![3.0, 30.0]);
    }

    #[test]
    fn test_ethnicity_without_data_is_placeholder() {
        let fig = build_figure(SummaryType::Ethnicity, &SummaryResult::default());
        assert_eq!(fig.kind, ChartKind::Scatter);
        assert!(fig.series.is_empty());
    }

    #[test]
    fn test_year_of_key_accepts_date_like_strings() {
        assert_eq!(year_of_key("2021"), Some(2021));
        assert_eq!(year_of_key("2021-06-01"), Some(2021));
        assert_eq!(year_of_key("2021-06-01 00:00:00"), Some(2021));
        assert_eq!(year_of_key("soon"), None);
    }

    #[test]
    fn test_error_figures() {
        let invalid = error_figure(&PopulationError::InvalidSelection("x".into()));
        assert_eq!(invalid.title, "Invalid Selection");
        assert_eq!(invalid.kind, ChartKind::Scatter);

        let failed = error_figure(&PopulationError::data_unavailable("timeout"));
        assert!(failed.title.starts_with("Error loading data:"));
        assert!(failed.title.contains("timeout"));
    }
}
