//! Row types produced by ingestion.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Columns every dataset row must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = ["date", "age", "sex", "ethnicity", "population"];

/// Sentinel age bracket for rows that cover every age.
pub const AGE_OVERALL: &str = "overall";
/// Sentinel sex for rows that cover both sexes.
pub const SEX_BOTH: &str = "both";

/// The earliest date kept by cleaning (inclusive).
pub fn window_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default()
}

/// Keeps JSON strings and turns every other value (numbers, bools,
/// objects, `null`) into `None`, so one odd cell only loses that cell.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// A single row as it arrives from the remote dataset.
///
/// Text columns are lenient: a non-string value is read as missing. A
/// non-numeric `population` is still a malformed row.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawRecord {
    #[serde(default, deserialize_with = "string_or_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub age: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub sex: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub ethnicity: Option<String>,
    #[serde(default)]
    pub population: Option<f64>,
}

/// A cleaned row: the date is parsed and inside the analysis window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub date: NaiveDate,
    pub age: Option<String>,
    pub sex: Option<String>,
    pub ethnicity: Option<String>,
    pub population: Option<f64>,
}

impl Record {
    #[cfg(test)]
    pub(crate) fn new(date: NaiveDate, age: &str, sex: &str, ethnicity: &str, population: f64) -> Self {
        Self {
            date,
            age: Some(age.to_string()),
            sex: Some(sex.to_string()),
            ethnicity: Some(ethnicity.to_string()),
            population: Some(population),
        }
    }

    pub fn is_overall_age(&self) -> bool {
        self.age.as_deref() == Some(AGE_OVERALL)
    }

    pub fn is_both_sexes(&self) -> bool {
        self.sex.as_deref() == Some(SEX_BOTH)
    }
}

/// Time-filtered, date-validated records, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanedDataset {
    records: Vec<Record>,
}

impl CleanedDataset {
    /// Keeps only rows dated on or after [`window_start`].
    pub fn new(records: Vec<Record>) -> Self {
        let start = window_start();
        Self {
            records: records.into_iter().filter(|r| r.date >= start).collect(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
