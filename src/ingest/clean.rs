//! Date parsing and time-window filtering.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

use super::types::{CleanedDataset, RawRecord, Record};

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses a calendar date, discarding any time component. Unparseable input
/// yields `None` rather than an error.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

/// Turns raw rows into a [`CleanedDataset`]: rows whose date is missing or
/// unparseable are dropped, as are rows before the window start.
pub fn clean(raw: Vec<RawRecord>) -> CleanedDataset {
    let total = raw.len();
    let mut unparseable = 0usize;

    let records: Vec<Record> = raw
        .into_iter()
        .filter_map(|row| {
            let Some(date) = row.date.as_deref().and_then(parse_date) else {
                unparseable += 1;
                return None;
            };
            Some(Record {
                date,
                age: row.age,
                sex: row.sex,
                ethnicity: row.ethnicity,
                population: row.population,
            })
        })
        .collect();

    let dataset = CleanedDataset::new(records);
    debug!(
        total,
        unparseable,
        kept = dataset.len(),
        "Raw rows cleaned"
    );
    dataset
}
