//! Informational diagnostics over a cleaned dataset.
//!
//! Nothing here feeds the summaries. The profile is logged after every
//! ingestion so data-quality drift in the upstream source is visible.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::info;

use super::types::{CleanedDataset, Record};
use super::utility::{mean, quantile, sample_stddev};

/// Descriptive statistics for the numeric `population` column.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub q50: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Descriptive statistics for a categorical column.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub count: usize,
    pub unique: usize,
    pub top: Option<String>,
    pub freq: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DateSummary {
    pub count: usize,
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

/// Data-quality overview of a [`CleanedDataset`].
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DatasetProfile {
    pub rows: usize,
    pub missing: BTreeMap<&'static str, usize>,
    pub duplicated_rows: usize,

    // distinct values, in order of first appearance
    pub ages: Vec<String>,
    pub sexes: Vec<String>,
    pub ethnicities: Vec<String>,
    pub years: Vec<i32>,

    pub population: NumericSummary,
    pub categories: BTreeMap<&'static str, CategorySummary>,
    pub dates: DateSummary,
}

impl DatasetProfile {
    pub fn from_dataset(dataset: &CleanedDataset) -> Self {
        let records = dataset.records();

        let mut missing = BTreeMap::new();
        missing.insert("date", 0);
        missing.insert("age", count_missing(records, |r| r.age.as_deref()));
        missing.insert("sex", count_missing(records, |r| r.sex.as_deref()));
        missing.insert(
            "ethnicity",
            count_missing(records, |r| r.ethnicity.as_deref()),
        );
        missing.insert(
            "population",
            records.iter().filter(|r| r.population.is_none()).count(),
        );

        let mut categories = BTreeMap::new();
        categories.insert("age", summarize_category(records, |r| r.age.as_deref()));
        categories.insert("sex", summarize_category(records, |r| r.sex.as_deref()));
        categories.insert(
            "ethnicity",
            summarize_category(records, |r| r.ethnicity.as_deref()),
        );

        let mut years = Vec::new();
        for r in records {
            let year = r.date.year();
            if !years.contains(&year) {
                years.push(year);
            }
        }

        Self {
            rows: records.len(),
            missing,
            duplicated_rows: count_duplicates(records),
            ages: distinct(records, |r| r.age.as_deref()),
            sexes: distinct(records, |r| r.sex.as_deref()),
            ethnicities: distinct(records, |r| r.ethnicity.as_deref()),
            years,
            population: summarize_population(records),
            categories,
            dates: DateSummary {
                count: records.len(),
                min: records.iter().map(|r| r.date).min(),
                max: records.iter().map(|r| r.date).max(),
            },
        }
    }

    /// Emits the profile as structured log events.
    pub fn log(&self) {
        info!(rows = self.rows, missing = ?self.missing, "Missing values per column");
        info!(duplicated_rows = self.duplicated_rows, "Duplicated rows");
        info!(
            ages = ?self.ages,
            sexes = ?self.sexes,
            ethnicities = ?self.ethnicities,
            years = ?self.years,
            "Unique values"
        );
        info!(
            population = ?self.population,
            categories = ?self.categories,
            dates = ?self.dates,
            "Data overview"
        );
    }
}

fn count_missing(records: &[Record], field: impl Fn(&Record) -> Option<&str>) -> usize {
    records.iter().filter(|r| field(r).is_none()).count()
}

fn distinct(records: &[Record], field: impl Fn(&Record) -> Option<&str>) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(|r| field(r))
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

fn summarize_category(
    records: &[Record],
    field: impl Fn(&Record) -> Option<&str>,
) -> CategorySummary {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for value in records.iter().filter_map(|r| field(r)) {
        let n = counts.entry(value).or_default();
        if *n == 0 {
            order.push(value);
        }
        *n += 1;
    }

    // Ties go to the value seen first.
    let mut top: Option<(&str, usize)> = None;
    for &value in &order {
        let n = counts[value];
        if top.is_none_or(|(_, best)| n > best) {
            top = Some((value, n));
        }
    }

    CategorySummary {
        count: counts.values().sum(),
        unique: counts.len(),
        top: top.map(|(v, _)| v.to_string()),
        freq: top.map(|(_, n)| n).unwrap_or(0),
    }
}

fn summarize_population(records: &[Record]) -> NumericSummary {
    let mut values: Vec<f64> = records.iter().filter_map(|r| r.population).collect();
    if values.is_empty() {
        return NumericSummary::default();
    }
    values.sort_by(f64::total_cmp);

    let avg = mean(&values);
    NumericSummary {
        count: values.len(),
        mean: Some(avg),
        std: sample_stddev(&values, avg),
        min: values.first().copied(),
        q25: quantile(&values, 0.25),
        q50: quantile(&values, 0.5),
        q75: quantile(&values, 0.75),
        max: values.last().copied(),
    }
}

fn count_duplicates(records: &[Record]) -> usize {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| {
            let key = (
                r.date,
                r.age.as_deref(),
                r.sex.as_deref(),
                r.ethnicity.as_deref(),
                r.population.map(f64::to_bits),
            );
            !seen.insert(key)
        })
        .count()
}
