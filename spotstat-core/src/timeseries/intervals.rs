use crate::{
    NegativeIntervalPolicy, OrderedSeries, SpotstatError, SummaryTable, TimePoint, describe,
};

/// Elapsed seconds between each pair of adjacent timestamps.
///
/// The result has `len - 1` entries (none for 0 or 1 events). Values are signed:
/// out-of-order timestamps produce negative durations.
#[must_use]
pub fn interval_seconds<T: TimePoint, V>(events: &OrderedSeries<T, V>) -> Vec<f64> {
    events
        .index()
        .windows(2)
        .map(|w| w[1].seconds_since(w[0]))
        .collect()
}

/// Summarize the inter-arrival times of a change-event series as a
/// single-column table labelled `label`.
///
/// Negative intervals are kept as computed.
pub fn summarize_interval_seconds<T: TimePoint, V>(
    events: &OrderedSeries<T, V>,
    label: impl Into<String>,
) -> SummaryTable {
    SummaryTable::single(label, describe(&interval_seconds(events)))
}

/// Like [`summarize_interval_seconds`], applying `policy` to negative intervals.
///
/// # Errors
/// Returns `Err(SpotstatError::NegativeInterval)` under
/// `NegativeIntervalPolicy::Reject` when any interval is negative.
pub fn summarize_interval_seconds_with<T: TimePoint, V>(
    events: &OrderedSeries<T, V>,
    label: impl Into<String>,
    policy: NegativeIntervalPolicy,
) -> Result<SummaryTable, SpotstatError> {
    let label = label.into();
    let intervals = interval_seconds(events);
    check_negative_intervals(&label, &intervals, policy)?;
    Ok(SummaryTable::single(label, describe(&intervals)))
}

fn check_negative_intervals(
    label: &str,
    intervals: &[f64],
    policy: NegativeIntervalPolicy,
) -> Result<(), SpotstatError> {
    let Some(position) = intervals.iter().position(|d| *d < 0.0) else {
        return Ok(());
    };
    match policy {
        NegativeIntervalPolicy::Reject => Err(SpotstatError::NegativeInterval {
            series: label.to_string(),
            position,
        }),
        NegativeIntervalPolicy::Warn => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                series = label,
                position,
                seconds = intervals[position],
                "negative update interval; timestamps are out of order"
            );
            Ok(())
        }
        _ => Ok(()),
    }
}
