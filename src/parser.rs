//! JSON parser for the tabular population dataset.

use serde_json::{Map, Value};

use crate::error::{PopulationError, Result};
use crate::ingest::types::{REQUIRED_COLUMNS, RawRecord};

/// Decodes a JSON array of row objects into [`RawRecord`]s.
///
/// # Errors
///
/// Returns [`PopulationError::DataUnavailable`] if the body is not a JSON
/// array of objects, if any required column is absent from every row (an
/// empty array has no columns at all), or if a row carries a non-numeric
/// population.
pub fn parse_rows(bytes: &[u8]) -> Result<Vec<RawRecord>> {
    let rows: Vec<Map<String, Value>> = serde_json::from_slice(bytes)
        .map_err(|e| PopulationError::data_unavailable(format!("malformed dataset body: {e}")))?;

    if rows.is_empty() {
        return Err(PopulationError::data_unavailable(
            "dataset has no rows and therefore none of the required columns",
        ));
    }
    for column in REQUIRED_COLUMNS {
        if !rows.iter().any(|row| row.contains_key(column)) {
            return Err(PopulationError::data_unavailable(format!(
                "dataset is missing column '{column}'"
            )));
        }
    }

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            serde_json::from_value(Value::Object(row)).map_err(|e| {
                PopulationError::data_unavailable(format!("row {i} is malformed: {e}"))
            })
        })
        .collect()
}
