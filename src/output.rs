//! Output formatting and persistence for population summaries.
//!
//! Supports pretty-printing, JSON serialization, and CSV append of yearly
//! totals.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::summary::SummaryResult;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// One CSV row of the yearly totals export.
#[derive(Debug, Serialize)]
struct TotalRow<'a> {
    year: &'a str,
    total_population: &'a str,
}

/// Logs the summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &SummaryResult) {
    info!("{:#?}", summary);
}

/// Logs the summary as pretty-printed JSON.
pub fn print_json(summary: &SummaryResult) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

/// Appends one `year,total_population` row per year to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_totals(path: &str, summary: &SummaryResult) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV totals");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // header only on a fresh file
        .from_writer(file);

    for (year, total) in &summary.total_population_per_year {
        writer.serialize(TotalRow {
            year,
            total_population: total,
        })?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn sample() -> SummaryResult {
        let mut summary = SummaryResult::default();
        summary
            .total_population_per_year
            .insert("2020".into(), "32447.4".into());
        summary
            .total_population_per_year
            .insert("2021".into(), "32576.3".into());
        summary
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&SummaryResult::default());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&sample()).unwrap();
    }

    #[test]
    fn test_append_totals_creates_file() {
        let path = temp_path("population_dashboard_test_create.csv");
        let _ = fs::remove_file(&path); // clean up any prior run

        append_totals(&path, &sample()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(
            lines,
            vec!["year,total_population", "2020,32447.4", "2021,32576.3"]
        );

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_totals_writes_header_once() {
        let path = temp_path("population_dashboard_test_header.csv");
        let _ = fs::remove_file(&path);

        append_totals(&path, &sample()).unwrap();
        append_totals(&path, &sample()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content.lines().filter(|l| l.starts_with("year")).count();
        assert_eq!(header_count, 1);
        assert_eq!(content.lines().count(), 5);

        fs::remove_file(&path).unwrap();
    }
}
