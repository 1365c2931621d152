//! Output shape of the summary engine, served verbatim by `GET /population`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Year → category → population, truncated to whole units.
pub type Breakdown = BTreeMap<String, BTreeMap<String, i64>>;

/// The four summaries consumed by the dashboard.
///
/// Outer keys are years rendered as strings. Consumers must not rely on key
/// order even though the maps happen to be sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Year → total population as a decimal string, over `age == "overall"`.
    pub total_population_per_year: BTreeMap<String, String>,
    /// Year → sex → population, over `age == "overall"`.
    pub gender_summary: Breakdown,
    /// Year → age bracket → population, over `sex == "both"`.
    pub age_group_summary: Breakdown,
    /// Year → ethnicity → population, over `age == "overall"`.
    pub ethnicity_summary: Breakdown,
}
