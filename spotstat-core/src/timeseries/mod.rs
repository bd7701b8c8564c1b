//! Update-interval pipeline shared by the loader-facing facade and tests.
//!
//! Modules include:
//! - `changes`: collapse consecutive repeated values into change-events
//! - `intervals`: inter-arrival seconds and their summary for one series
//! - `aggregate`: run the pipeline over every column of a table and merge
/// Change-event extraction.
pub mod changes;
/// Inter-arrival time extraction and single-series summaries.
pub mod intervals;
/// Table-wide aggregation of update intervals.
pub mod aggregate;
