//! spotstat-core
//!
//! Series types and the update-interval pipeline for price time series.
//!
//! - `series`: `OrderedSeries` (timestamp → optional value) and `Table` (named series).
//! - `stats`: descriptive statistics over interval samples.
//! - `summary`: the aligned per-series summary table.
//! - `timeseries`: change filtering, interval summarization, and table aggregation.
//!
//! The pipeline is pure and synchronous: every function borrows its input and
//! returns freshly allocated output.
#![warn(missing_docs)]

/// Ordered series and named tables of series.
pub mod series;
/// Descriptive statistics over interval samples.
pub mod stats;
/// Per-series summary table.
pub mod summary;
/// Change filtering, interval summarization, and aggregation.
pub mod timeseries;

pub use series::{OrderedSeries, Table, TimePoint};
pub use spotstat_types::{
    AggregateConfig, Compression, LoaderConfig, NegativeIntervalPolicy, SpotstatError, Statistic,
};
pub use stats::{IntervalStats, describe};
pub use summary::{SummaryColumn, SummaryTable};
pub use timeseries::aggregate::{aggregate_update_intervals, aggregate_update_intervals_with};
pub use timeseries::changes::remove_consecutive_repeated_entries;
pub use timeseries::intervals::{
    interval_seconds, summarize_interval_seconds, summarize_interval_seconds_with,
};
