use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone};

use crate::SpotstatError;

/// A point on a time axis that supports signed, fractional differences in seconds.
pub trait TimePoint: Copy + Ord {
    /// Signed elapsed seconds from `earlier` to `self`.
    ///
    /// Negative when `earlier` is actually later; callers decide what to do with it.
    fn seconds_since(self, earlier: Self) -> f64;
}

#[allow(clippy::cast_precision_loss)]
fn delta_seconds(dt: TimeDelta) -> f64 {
    // subsec_nanos carries the same sign as the whole delta
    dt.num_seconds() as f64 + f64::from(dt.subsec_nanos()) / 1e9
}

impl<Tz> TimePoint for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Copy,
{
    fn seconds_since(self, earlier: Self) -> f64 {
        delta_seconds(self - earlier)
    }
}

impl TimePoint for NaiveDateTime {
    fn seconds_since(self, earlier: Self) -> f64 {
        delta_seconds(self - earlier)
    }
}

/// Epoch seconds.
impl TimePoint for i64 {
    #[allow(clippy::cast_precision_loss)]
    fn seconds_since(self, earlier: Self) -> f64 {
        (i128::from(self) - i128::from(earlier)) as f64
    }
}

/// An ordered sequence of `(timestamp, value)` pairs with explicit missing values.
///
/// Order is whatever the caller supplied; timestamps are expected to be
/// non-decreasing but this is never enforced or re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedSeries<T, V> {
    index: Vec<T>,
    values: Vec<Option<V>>,
}

impl<T, V> Default for OrderedSeries<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, V> OrderedSeries<T, V> {
    /// Empty series.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            index: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Empty series with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Build a series from parallel index and value vectors.
    ///
    /// # Errors
    /// Returns `Err(SpotstatError::InvalidArg)` if the two vectors differ in length,
    /// since the pairs would not form a series.
    pub fn try_from_parts(index: Vec<T>, values: Vec<Option<V>>) -> Result<Self, SpotstatError> {
        if index.len() != values.len() {
            return Err(SpotstatError::invalid_arg(format!(
                "expected a series: index has {} entries but values has {}",
                index.len(),
                values.len()
            )));
        }
        Ok(Self { index, values })
    }

    /// Build a series from `(timestamp, optional value)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, Option<V>)>,
    {
        let (index, values) = pairs.into_iter().unzip();
        Self { index, values }
    }

    /// Build a series where every timestamp carries a value.
    pub fn from_observed<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, V)>,
    {
        Self::from_pairs(pairs.into_iter().map(|(ts, v)| (ts, Some(v))))
    }

    /// Append one entry at the end.
    pub fn push(&mut self, ts: T, value: Option<V>) {
        self.index.push(ts);
        self.values.push(value);
    }

    /// Number of entries, missing values included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when the series has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of entries carrying a value.
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Timestamps in series order.
    #[must_use]
    pub fn index(&self) -> &[T] {
        &self.index
    }

    /// Values in series order.
    #[must_use]
    pub fn values(&self) -> &[Option<V>] {
        &self.values
    }

    /// Entry at position `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<(&T, Option<&V>)> {
        Some((self.index.get(i)?, self.values.get(i)?.as_ref()))
    }

    /// First entry.
    #[must_use]
    pub fn first(&self) -> Option<(&T, Option<&V>)> {
        self.get(0)
    }

    /// Last entry.
    #[must_use]
    pub fn last(&self) -> Option<(&T, Option<&V>)> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate entries in series order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, Option<&V>)> {
        self.index
            .iter()
            .zip(self.values.iter().map(Option::as_ref))
    }

    /// Copy of the series without its missing entries, order preserved.
    #[must_use]
    pub fn dropna(&self) -> Self
    where
        T: Clone,
        V: Clone,
    {
        let mut out = Self::with_capacity(self.count_present());
        for (ts, v) in self.iter() {
            if let Some(v) = v {
                out.push(ts.clone(), Some(v.clone()));
            }
        }
        out
    }
}

impl<T> OrderedSeries<T, f64> {
    /// Build a float series where `NaN` marks a missing observation.
    pub fn from_nan_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        Self::from_pairs(
            pairs
                .into_iter()
                .map(|(ts, v)| (ts, if v.is_nan() { None } else { Some(v) })),
        )
    }
}

/// A collection of uniquely named series, kept in insertion (column) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T, V> {
    columns: Vec<(String, OrderedSeries<T, V>)>,
    // name -> position in `columns`
    positions: HashMap<String, usize>,
}

impl<T, V> Default for Table<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, V> Table<T, V> {
    /// Table with no columns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Append a named series as the last column.
    ///
    /// # Errors
    /// Returns `Err(SpotstatError::InvalidArg)` if a column with the same name exists.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        series: OrderedSeries<T, V>,
    ) -> Result<(), SpotstatError> {
        let name = name.into();
        if self.positions.contains_key(&name) {
            return Err(SpotstatError::invalid_arg(format!(
                "duplicate series name: {name}"
            )));
        }
        self.positions.insert(name.clone(), self.columns.len());
        self.columns.push((name, series));
        Ok(())
    }

    /// Build a table from `(name, series)` pairs.
    ///
    /// # Errors
    /// Returns `Err(SpotstatError::InvalidArg)` on duplicate names.
    pub fn try_from_iter<I, S>(columns: I) -> Result<Self, SpotstatError>
    where
        I: IntoIterator<Item = (S, OrderedSeries<T, V>)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, series) in columns {
            table.insert(name, series)?;
        }
        Ok(table)
    }

    /// Build a table whose columns share one row index, as read from a tabular file.
    ///
    /// # Errors
    /// Returns `Err(SpotstatError::InvalidArg)` if a column's length differs from the
    /// index length or if two columns share a name.
    pub fn try_from_columns(
        index: &[T],
        columns: Vec<(String, Vec<Option<V>>)>,
    ) -> Result<Self, SpotstatError>
    where
        T: Clone,
    {
        let mut table = Self::new();
        for (name, values) in columns {
            let series = OrderedSeries::try_from_parts(index.to_vec(), values)
                .map_err(|e| SpotstatError::invalid_arg(format!("column {name}: {e}")))?;
            table.insert(name, series)?;
        }
        Ok(table)
    }

    /// Series stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OrderedSeries<T, V>> {
        self.positions.get(name).map(|&i| &self.columns[i].1)
    }

    /// Iterate `(name, series)` in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OrderedSeries<T, V>)> {
        self.columns.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Column names in column order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
