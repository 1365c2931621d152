//! Grouped population summaries keyed by year.
//!
//! Each summary filters the cleaned records, groups by year (and a category
//! for the breakdowns), sums populations, then zero-fills the pivot so every
//! year carries every category seen in that summary.

pub mod aggregate;
pub mod types;

pub use aggregate::summarize;
pub use types::{Breakdown, SummaryResult};
