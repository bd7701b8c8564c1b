//! Spotstat-specific error, configuration, and label primitives shared by every crate
//! in the workspace.
#![warn(missing_docs)]

mod config;
mod error;
mod statistic;

pub use config::{AggregateConfig, Compression, LoaderConfig, NegativeIntervalPolicy};
pub use error::SpotstatError;
pub use statistic::Statistic;
