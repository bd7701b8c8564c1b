use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{IntervalStats, Statistic};

/// One series' statistics inside a `SummaryTable`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryColumn {
    /// Series name.
    pub name: String,
    /// Interval statistics of the series.
    pub stats: IntervalStats,
}

impl SummaryColumn {
    /// Pair a series name with its statistics.
    pub fn new(name: impl Into<String>, stats: IntervalStats) -> Self {
        Self {
            name: name.into(),
            stats,
        }
    }
}

/// Interval statistics of many series, aligned by statistic.
///
/// Rows are the fixed `Statistic::ALL` labels; columns are series names in the
/// order they were added. Names are unique: merging keeps the column already
/// present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "SummaryColumns")]
pub struct SummaryTable {
    columns: Vec<SummaryColumn>,
    // name -> position in `columns`
    #[serde(skip)]
    positions: HashMap<String, usize>,
}

#[derive(Deserialize)]
struct SummaryColumns {
    columns: Vec<SummaryColumn>,
}

impl From<SummaryColumns> for SummaryTable {
    fn from(raw: SummaryColumns) -> Self {
        raw.columns.into_iter().collect()
    }
}

impl SummaryTable {
    /// Table with no columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-column table.
    pub fn single(name: impl Into<String>, stats: IntervalStats) -> Self {
        let mut table = Self::new();
        table.push(SummaryColumn::new(name, stats));
        table
    }

    /// Append a column unless the name is already taken.
    ///
    /// Returns `true` if the column was added.
    pub fn push(&mut self, column: SummaryColumn) -> bool {
        if self.contains(&column.name) {
            return false;
        }
        self.positions
            .insert(column.name.clone(), self.columns.len());
        self.columns.push(column);
        true
    }

    /// Horizontally join `other` onto `self`, first-wins on duplicate names.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.extend(other.columns);
        self
    }

    /// Remove every column whose statistics are entirely undefined.
    pub fn drop_empty_columns(&mut self) {
        self.columns.retain(|c| !c.stats.is_undefined());
        self.positions = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();
    }

    /// Whether a column named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Statistics of the series `name`.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&IntervalStats> {
        self.positions.get(name).map(|&i| &self.columns[i].stats)
    }

    /// One cell; `None` if the column is absent or the statistic undefined.
    #[must_use]
    pub fn get(&self, name: &str, stat: Statistic) -> Option<f64> {
        self.column(name).and_then(|s| s.get(stat))
    }

    /// One row across all columns, in column order.
    #[must_use]
    pub fn row(&self, stat: Statistic) -> Vec<Option<f64>> {
        self.columns.iter().map(|c| c.stats.get(stat)).collect()
    }

    /// All columns in order.
    #[must_use]
    pub fn columns(&self) -> &[SummaryColumn] {
        &self.columns
    }

    /// Column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Convert into a `polars` frame: a `statistic` label column followed by one
    /// `f64` column per series.
    ///
    /// # Errors
    /// Returns `Err(SpotstatError::Data)` if polars rejects the frame, e.g. when a
    /// series is itself named `statistic`.
    #[cfg(feature = "dataframe")]
    pub fn to_dataframe(&self) -> Result<polars::prelude::DataFrame, crate::SpotstatError> {
        use polars::prelude::{Column, DataFrame};

        let labels: Vec<&str> = Statistic::ALL.iter().map(|s| s.label()).collect();
        let mut cols: Vec<Column> = Vec::with_capacity(self.columns.len() + 1);
        cols.push(Column::new("statistic".into(), labels));
        for c in &self.columns {
            let values: Vec<Option<f64>> = Statistic::ALL.iter().map(|s| c.stats.get(*s)).collect();
            cols.push(Column::new(c.name.as_str().into(), values));
        }
        DataFrame::new(cols).map_err(|e| crate::SpotstatError::Data(e.to_string()))
    }
}

impl Extend<SummaryColumn> for SummaryTable {
    fn extend<I: IntoIterator<Item = SummaryColumn>>(&mut self, iter: I) {
        for column in iter {
            self.push(column);
        }
    }
}

impl FromIterator<SummaryColumn> for SummaryTable {
    fn from_iter<I: IntoIterator<Item = SummaryColumn>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

fn format_cell(value: Option<f64>) -> String {
    value.map_or_else(|| "NaN".to_string(), |v| format!("{v:.6}"))
}

impl fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = Statistic::ALL
            .iter()
            .map(|s| s.label().chars().count())
            .max()
            .unwrap_or(0);

        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| Statistic::ALL.iter().map(|s| format_cell(c.stats.get(*s))).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&cells)
            .map(|(c, col)| {
                col.iter()
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(c.name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:label_width$}", "")?;
        for (c, &w) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>w$}", c.name)?;
        }
        writeln!(f)?;
        for (row, stat) in Statistic::ALL.iter().enumerate() {
            write!(f, "{:<label_width$}", stat.label())?;
            for (col, &w) in cells.iter().zip(&widths) {
                write!(f, "  {:>w$}", col[row])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
