use std::fmt;
use std::str::FromStr;

use crate::SpotstatError;
use serde::{Deserialize, Serialize};

/// Row label of a summary table: one of the eight descriptive statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Statistic {
    /// Number of intervals.
    #[serde(rename = "count")]
    Count,
    /// Arithmetic mean.
    #[serde(rename = "mean")]
    Mean,
    /// Sample standard deviation.
    #[serde(rename = "std")]
    Std,
    /// Minimum.
    #[serde(rename = "min")]
    Min,
    /// 25th percentile.
    #[serde(rename = "25%")]
    P25,
    /// Median.
    #[serde(rename = "50%")]
    P50,
    /// 75th percentile.
    #[serde(rename = "75%")]
    P75,
    /// Maximum.
    #[serde(rename = "max")]
    Max,
}

impl Statistic {
    /// All statistics in row order.
    pub const ALL: [Self; 8] = [
        Self::Count,
        Self::Mean,
        Self::Std,
        Self::Min,
        Self::P25,
        Self::P50,
        Self::P75,
        Self::Max,
    ];

    /// Row label as printed in summary tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Mean => "mean",
            Self::Std => "std",
            Self::Min => "min",
            Self::P25 => "25%",
            Self::P50 => "50%",
            Self::P75 => "75%",
            Self::Max => "max",
        }
    }

    /// Quantile in `[0, 1]` for percentile rows, `None` otherwise.
    #[must_use]
    pub const fn quantile(self) -> Option<f64> {
        match self {
            Self::Min => Some(0.0),
            Self::P25 => Some(0.25),
            Self::P50 => Some(0.5),
            Self::P75 => Some(0.75),
            Self::Max => Some(1.0),
            Self::Count | Self::Mean | Self::Std => None,
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Statistic {
    type Err = SpotstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stat| stat.label() == s.trim())
            .ok_or_else(|| SpotstatError::invalid_arg(format!("unknown statistic: {s}")))
    }
}
