//! Chart-ready views of the population summaries.
//!
//! The dashboard page asks for one [`SummaryType`] at a time and receives a
//! [`Figure`]. Failures never reach the page as errors: they become a
//! titled placeholder figure instead.

pub mod figure;
pub mod selection;

pub use figure::{ChartKind, Figure, Series, build_figure, error_figure};
pub use selection::SummaryType;

/// Static page that renders figures fetched from `/dashboard/figure`.
pub const INDEX_HTML: &str = include_str!("index.html");
