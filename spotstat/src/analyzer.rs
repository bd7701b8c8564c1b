use std::path::Path;

use spotstat_core::{SummaryTable, Table, TimePoint, aggregate_update_intervals_with};
use spotstat_loader::{PriceTable, load_dataset};
use spotstat_types::{
    AggregateConfig, Compression, LoaderConfig, NegativeIntervalPolicy, SpotstatError,
};

/// Builder for [`Spotstat`].
#[derive(Debug, Clone)]
pub struct SpotstatBuilder {
    aggregate: AggregateConfig,
    compression: Option<Compression>,
    timestamp_format: Option<String>,
}

impl Default for SpotstatBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpotstatBuilder {
    /// Create a builder with the default behavior.
    ///
    /// - Negative intervals pass through into the statistics.
    /// - Series without any update interval are dropped from the summary.
    /// - Compression is inferred from each file's extension.
    /// - Timestamps are parsed with the loader's built-in formats.
    #[must_use]
    pub fn new() -> Self {
        Self {
            aggregate: AggregateConfig::default(),
            compression: None,
            timestamp_format: None,
        }
    }

    /// Set how out-of-order timestamps are handled.
    #[must_use]
    pub fn negative_intervals(mut self, policy: NegativeIntervalPolicy) -> Self {
        self.aggregate.negative_intervals = policy;
        self
    }

    /// Keep (`false`) or drop (`true`) series whose statistics are entirely undefined.
    #[must_use]
    pub fn drop_empty_columns(mut self, drop: bool) -> Self {
        self.aggregate.drop_empty_columns = drop;
        self
    }

    /// Force a compression scheme instead of inferring it from the file extension.
    #[must_use]
    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = Some(compression);
        self
    }

    /// Parse the timestamp column with an explicit `chrono` format string.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = Some(format.into());
        self
    }

    /// Build the analyzer.
    ///
    /// # Errors
    /// Returns `Err(SpotstatError::InvalidArg)` if the timestamp format is blank.
    pub fn build(self) -> Result<Spotstat, SpotstatError> {
        if self
            .timestamp_format
            .as_deref()
            .is_some_and(|f| f.trim().is_empty())
        {
            return Err(SpotstatError::invalid_arg(
                "timestamp format must not be blank",
            ));
        }
        Ok(Spotstat {
            aggregate: self.aggregate,
            compression: self.compression,
            timestamp_format: self.timestamp_format,
        })
    }
}

/// Configured entry point: load datasets and summarize their update intervals.
#[derive(Debug, Clone)]
pub struct Spotstat {
    aggregate: AggregateConfig,
    compression: Option<Compression>,
    timestamp_format: Option<String>,
}

impl Spotstat {
    /// Start building a new `Spotstat`.
    #[must_use]
    pub fn builder() -> SpotstatBuilder {
        SpotstatBuilder::new()
    }

    /// Aggregation options in effect.
    #[must_use]
    pub const fn aggregate_config(&self) -> &AggregateConfig {
        &self.aggregate
    }

    /// Loader options that would be used for `path`.
    #[must_use]
    pub fn loader_config(&self, path: &Path) -> LoaderConfig {
        LoaderConfig {
            compression: self
                .compression
                .unwrap_or_else(|| Compression::infer(path)),
            timestamp_format: self.timestamp_format.clone(),
        }
    }

    /// Load a dataset from disk.
    ///
    /// # Errors
    /// Propagates loader errors (`NotFound`, `Io`, `Parse`, `Data`, `InvalidArg`).
    pub fn load(&self, path: impl AsRef<Path>) -> Result<PriceTable, SpotstatError> {
        let path = path.as_ref();
        load_dataset(path, &self.loader_config(path))
    }

    /// Summarize the update intervals of every series in `table`.
    ///
    /// # Errors
    /// Returns `Err(SpotstatError::NegativeInterval)` under the `Reject` policy.
    pub fn analyze_table<T, V>(&self, table: &Table<T, V>) -> Result<SummaryTable, SpotstatError>
    where
        T: TimePoint,
        V: PartialEq + Clone,
    {
        aggregate_update_intervals_with(table, &self.aggregate)
    }

    /// Load a dataset and summarize its update intervals.
    ///
    /// # Errors
    /// Any loader error, or `NegativeInterval` under the `Reject` policy.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "spotstat::analyze_file",
            skip(self, path),
            fields(path = %path.as_ref().display()),
        )
    )]
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<SummaryTable, SpotstatError> {
        let table = self.load(path)?;
        let summary = self.analyze_table(&table)?;
        #[cfg(feature = "tracing")]
        tracing::info!(
            series = table.len(),
            changing = summary.len(),
            "summarized update intervals"
        );
        Ok(summary)
    }
}
