use crate::{
    AggregateConfig, SpotstatError, SummaryTable, Table, TimePoint,
    remove_consecutive_repeated_entries, summarize_interval_seconds,
    summarize_interval_seconds_with,
};

/// Update-interval statistics for every series of a table.
///
/// Each column goes through change filtering and interval summarization; the
/// single-column results are joined by statistic and columns with zero
/// intervals are dropped. Column order follows the table. An empty table yields
/// an empty summary.
#[must_use]
pub fn aggregate_update_intervals<T, V>(table: &Table<T, V>) -> SummaryTable
where
    T: TimePoint,
    V: PartialEq + Clone,
{
    let mut summary = table
        .iter()
        .map(|(name, series)| {
            summarize_interval_seconds(&remove_consecutive_repeated_entries(series), name)
        })
        .fold(SummaryTable::new(), SummaryTable::merge);
    summary.drop_empty_columns();
    summary
}

/// Like [`aggregate_update_intervals`], with explicit configuration.
///
/// Fails fast: the first series that violates the negative-interval policy aborts
/// the whole aggregation, so a missing column always means "no changes".
///
/// # Errors
/// Returns `Err(SpotstatError::NegativeInterval)` under
/// `NegativeIntervalPolicy::Reject` when any series has out-of-order change events.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "spotstat_core::aggregate_update_intervals",
        skip(table, config),
        fields(series = table.len(), policy = ?config.negative_intervals),
    )
)]
pub fn aggregate_update_intervals_with<T, V>(
    table: &Table<T, V>,
    config: &AggregateConfig,
) -> Result<SummaryTable, SpotstatError>
where
    T: TimePoint,
    V: PartialEq + Clone,
{
    let mut summary = SummaryTable::new();
    for (name, series) in table.iter() {
        let events = remove_consecutive_repeated_entries(series);
        let column = summarize_interval_seconds_with(&events, name, config.negative_intervals)?;
        summary = summary.merge(column);
    }
    if config.drop_empty_columns {
        summary.drop_empty_columns();
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(
        kept = summary.len(),
        dropped = table.len() - summary.len(),
        "aggregated update intervals"
    );
    Ok(summary)
}
