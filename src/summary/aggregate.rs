use chrono::Datelike;
use std::collections::{BTreeMap, BTreeSet};

use crate::ingest::types::{CleanedDataset, Record};
use crate::summary::types::{Breakdown, SummaryResult};

/// Computes all four summaries from a cleaned dataset.
///
/// Never fails: rows that do not match a summary's predicate, or whose
/// grouping category is missing, are simply left out of that summary.
pub fn summarize(dataset: &CleanedDataset) -> SummaryResult {
    let records = dataset.records();

    SummaryResult {
        total_population_per_year: total_per_year(records, Record::is_overall_age),
        gender_summary: breakdown(records, Record::is_overall_age, |r| r.sex.as_deref()),
        age_group_summary: breakdown(records, Record::is_both_sexes, |r| r.age.as_deref()),
        ethnicity_summary: breakdown(records, Record::is_overall_age, |r| {
            r.ethnicity.as_deref()
        }),
    }
}

/// Sums population per year over the rows matching `keep`. Missing
/// populations contribute nothing.
fn total_per_year(records: &[Record], keep: impl Fn(&Record) -> bool) -> BTreeMap<String, String> {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();

    for r in records.iter().filter(|r| keep(r)) {
        *totals.entry(r.date.year()).or_default() += r.population.unwrap_or(0.0);
    }

    totals
        .into_iter()
        .map(|(year, total)| (year.to_string(), total.to_string()))
        .collect()
}

/// Year × category pivot over the rows matching `keep`.
///
/// The category universe is the union of values observed across all years,
/// so a category seen in any year appears under every year, zero-filled.
fn breakdown(
    records: &[Record],
    keep: impl Fn(&Record) -> bool,
    category: impl for<'r> Fn(&'r Record) -> Option<&'r str>,
) -> Breakdown {
    // pass 1: accumulate observed groups
    let mut sums: BTreeMap<(i32, &str), f64> = BTreeMap::new();
    let mut universe: BTreeSet<&str> = BTreeSet::new();
    let mut years: BTreeSet<i32> = BTreeSet::new();

    for r in records.iter().filter(|r| keep(r)) {
        let Some(key) = category(r) else {
            continue;
        };
        let year = r.date.year();
        *sums.entry((year, key)).or_default() += r.population.unwrap_or(0.0);
        universe.insert(key);
        years.insert(year);
    }

    // pass 2: fill the full year × category grid
    years
        .into_iter()
        .map(|year| {
            let row = universe
                .iter()
                .map(|&key| {
                    let total = sums.get(&(year, key)).copied().unwrap_or(0.0);
                    (key.to_string(), total.trunc() as i64)
                })
                .collect();
            (year.to_string(), row)
        })
        .collect()
}
