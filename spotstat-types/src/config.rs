//! Configuration types shared by the loader, the aggregator, and the facade.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::SpotstatError;
use serde::{Deserialize, Serialize};

/// Compression scheme of an on-disk dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Compression {
    /// Plain, uncompressed CSV.
    None,
    /// Gzip stream wrapping a single CSV file.
    Gzip,
    /// Zip archive; the first entry is read as CSV.
    #[default]
    Zip,
}

impl Compression {
    /// Infer the compression scheme from a file extension.
    ///
    /// `.gz`/`.gzip` map to `Gzip`, `.zip` maps to `Zip`, anything else to `None`.
    #[must_use]
    pub fn infer(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "gz" | "gzip" => Self::Gzip,
            "zip" => Self::Zip,
            _ => Self::None,
        }
    }

    /// Short lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gzip => "gzip",
            Self::Zip => "zip",
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Compression {
    type Err = SpotstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "gzip" | "gz" => Ok(Self::Gzip),
            "zip" => Ok(Self::Zip),
            other => Err(SpotstatError::invalid_arg(format!(
                "unknown compression: {other}"
            ))),
        }
    }
}

/// What to do when a change-event sequence yields a negative inter-arrival time
/// (timestamps out of order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum NegativeIntervalPolicy {
    /// Keep the negative duration in the statistics as computed.
    #[default]
    PassThrough,
    /// Keep the duration but emit a warning (requires the `tracing` feature on
    /// `spotstat-core`; otherwise behaves like `PassThrough`).
    Warn,
    /// Abort the whole aggregation with `SpotstatError::NegativeInterval`.
    Reject,
}

/// Options for aggregating update intervals across a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateConfig {
    /// Handling of out-of-order timestamps.
    pub negative_intervals: NegativeIntervalPolicy,
    /// Drop series whose statistics are entirely undefined (zero intervals).
    pub drop_empty_columns: bool,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            negative_intervals: NegativeIntervalPolicy::PassThrough,
            drop_empty_columns: true,
        }
    }
}

/// Options for loading a dataset from disk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Compression of the source file.
    pub compression: Compression,
    /// Explicit `chrono` format string for the timestamp column.
    ///
    /// When unset, `%Y-%m-%d %H:%M:%S`, ISO-8601 with a `T` separator
    /// (optionally with fractional seconds), and RFC 3339 are accepted.
    pub timestamp_format: Option<String>,
}
