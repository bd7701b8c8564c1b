use serde::{Deserialize, Serialize};

use crate::Statistic;

/// Descriptive statistics of a set of inter-arrival times, in seconds.
///
/// Undefined statistics are `None`: everything but `count` when there are no
/// samples, and `std` when there is a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IntervalStats {
    /// Number of finite samples.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// Sample standard deviation (divides by `count - 1`).
    pub std: Option<f64>,
    /// Smallest sample.
    pub min: Option<f64>,
    /// 25th percentile, linear interpolation.
    #[serde(rename = "25%")]
    pub p25: Option<f64>,
    /// Median, linear interpolation.
    #[serde(rename = "50%")]
    pub p50: Option<f64>,
    /// 75th percentile, linear interpolation.
    #[serde(rename = "75%")]
    pub p75: Option<f64>,
    /// Largest sample.
    pub max: Option<f64>,
}

impl IntervalStats {
    /// Value of one statistic; `count` is always defined.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn get(&self, stat: Statistic) -> Option<f64> {
        match stat {
            Statistic::Count => Some(self.count as f64),
            Statistic::Mean => self.mean,
            Statistic::Std => self.std,
            Statistic::Min => self.min,
            Statistic::P25 => self.p25,
            Statistic::P50 => self.p50,
            Statistic::P75 => self.p75,
            Statistic::Max => self.max,
        }
    }

    /// True when no statistic other than `count` is defined.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        Statistic::ALL
            .into_iter()
            .filter(|s| *s != Statistic::Count)
            .all(|s| self.get(s).is_none())
    }
}

/// Describe a sample of durations.
///
/// Non-finite samples are treated as missing and ignored. Percentiles use linear
/// interpolation between the closest ranks.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn describe(samples: &[f64]) -> IntervalStats {
    let mut sorted: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return IntervalStats::default();
    }
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let n = count as f64;
    let mean = sorted.iter().sum::<f64>() / n;
    let std = (count > 1).then(|| {
        let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1.0)).sqrt()
    });

    IntervalStats {
        count,
        mean: Some(mean),
        std,
        min: sorted.first().copied(),
        p25: Some(quantile_sorted(&sorted, 0.25)),
        p50: Some(quantile_sorted(&sorted, 0.5)),
        p75: Some(quantile_sorted(&sorted, 0.75)),
        max: sorted.last().copied(),
    }
}

/// Linear-interpolation quantile of a non-empty, ascending slice.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - pos.floor();
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
