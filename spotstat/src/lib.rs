//! Spotstat measures how often prices actually change in a spot price dataset.
//!
//! Overview
//! - Loads a timestamp-indexed price table (plain CSV, gzip, or zip) via `spotstat_loader`.
//! - Collapses each series' consecutive repeated prices into change-events.
//! - Summarizes the seconds between change-events (count, mean, std, min,
//!   quartiles, max) per series and joins them into one `SummaryTable`.
//! - Drops series that never changed, unless configured otherwise.
//!
//! Key behaviors and trade-offs
//! - Change detection compares exact values; the loader parses prices as
//!   decimals so `0.0350` and `0.035` are the same price.
//! - Only consecutive repeats collapse: a price that returns to an earlier value
//!   counts as a change.
//! - Out-of-order timestamps produce negative intervals. They are kept by default;
//!   `NegativeIntervalPolicy::Warn` logs them and `Reject` fails the whole run.
//!
//! Examples
//! Summarizing a zipped dataset:
//! ```rust,no_run
//! use spotstat::{NegativeIntervalPolicy, Spotstat};
//!
//! let spotstat = Spotstat::builder()
//!     .negative_intervals(NegativeIntervalPolicy::Reject)
//!     .build()?;
//! let summary = spotstat.analyze_file("data/prices_2023.csv.zip")?;
//! println!("{summary}");
//! # Ok::<(), spotstat::SpotstatError>(())
//! ```
//!
//! Working on an in-memory table:
//! ```rust
//! use spotstat::{OrderedSeries, Statistic, Table, aggregate_update_intervals};
//!
//! let prices = OrderedSeries::from_observed([(0_i64, 5), (60, 5), (90, 7), (300, 5)]);
//! let table = Table::try_from_iter([("m5.large", prices)])?;
//! let summary = aggregate_update_intervals(&table);
//! assert_eq!(summary.get("m5.large", Statistic::Mean), Some(150.0));
//! # Ok::<(), spotstat::SpotstatError>(())
//! ```
#![warn(missing_docs)]

mod analyzer;

pub use analyzer::{Spotstat, SpotstatBuilder};
pub use spotstat_core::{
    IntervalStats, OrderedSeries, SummaryColumn, SummaryTable, Table, TimePoint,
    aggregate_update_intervals, aggregate_update_intervals_with, describe, interval_seconds,
    remove_consecutive_repeated_entries, summarize_interval_seconds,
    summarize_interval_seconds_with,
};
pub use spotstat_loader::{PriceTable, load_dataset, read_dataset};
pub use spotstat_types::{
    AggregateConfig, Compression, LoaderConfig, NegativeIntervalPolicy, SpotstatError, Statistic,
};
