use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use spotstat_core::Table;

mod fixtures;

/// Price table shape produced by the fixtures (same as the loader's output).
pub type MockTable = Table<DateTime<Utc>, Decimal>;

/// Fixture dataset provider for CI-safe tests. Provides deterministic tables from
/// static rows.
///
/// Known fixture names:
/// - `"spot"`: four instance series on a shared index; two change, one is
///   constant, one is entirely missing.
/// - `"constant"`: every series holds a single price.
/// - `"empty"`: a table without columns.
/// - `"skewed"`: one series whose change-events are out of timestamp order.
pub struct MockDataset;

impl Default for MockDataset {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDataset {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Fixture table by name.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<MockTable> {
        fixtures::spot_prices::by_name(name)
    }

    /// The `"spot"` fixture.
    #[must_use]
    pub fn spot(&self) -> MockTable {
        fixtures::spot_prices::spot()
    }

    /// The `"spot"` fixture rendered as CSV, index column first.
    #[must_use]
    pub fn spot_csv(&self) -> String {
        fixtures::spot_prices::spot_csv()
    }

    /// Series of the `"spot"` fixture that have at least one update interval.
    #[must_use]
    pub const fn spot_changing_series(&self) -> &'static [&'static str] {
        fixtures::spot_prices::CHANGING
    }
}
