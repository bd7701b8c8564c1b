//! Data loader for spot price datasets.
//!
//! A dataset is a CSV file whose first column holds timestamps (the row index)
//! and whose remaining columns each hold one instance's prices. The file may be
//! plain, gzip-compressed, or the single entry of a zip archive.
//!
//! ```no_run
//! use spotstat_loader::{Compression, LoaderConfig, load_dataset};
//!
//! let cfg = LoaderConfig { compression: Compression::Zip, ..LoaderConfig::default() };
//! let table = load_dataset("data/prices_2023.csv.zip", &cfg)?;
//! println!("{} series", table.len());
//! # Ok::<(), spotstat_loader::SpotstatError>(())
//! ```
#![warn(missing_docs)]

mod compression;
mod parse;

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use spotstat_core::Table;

pub use spotstat_types::{Compression, LoaderConfig, SpotstatError};

/// Table of prices keyed by UTC timestamp, as produced by the loader.
pub type PriceTable = Table<DateTime<Utc>, Decimal>;

/// Load a dataset from `path`, decompressing it according to `config`.
///
/// # Errors
/// - `SpotstatError::NotFound` if `path` does not exist.
/// - `SpotstatError::Io` if the file or archive cannot be read.
/// - `SpotstatError::Data` for a missing header, ragged rows, or an archive
///   that does not hold exactly one file.
/// - `SpotstatError::Parse` for an unparseable timestamp or price cell.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "spotstat_loader::load_dataset",
        skip(path, config),
        fields(path = %path.as_ref().display(), compression = %config.compression),
    )
)]
pub fn load_dataset(
    path: impl AsRef<Path>,
    config: &LoaderConfig,
) -> Result<PriceTable, SpotstatError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SpotstatError::not_found(format!(
            "file \"{}\"",
            path.display()
        )));
    }
    let reader = compression::open(path, config.compression)?;
    let table = parse::read_table(reader, config)?;
    #[cfg(feature = "tracing")]
    tracing::debug!(series = table.len(), "loaded dataset");
    Ok(table)
}

/// Parse an already-decompressed CSV stream.
///
/// `config.compression` is ignored.
///
/// # Errors
/// Same parse and shape errors as [`load_dataset`].
pub fn read_dataset<R: Read>(reader: R, config: &LoaderConfig) -> Result<PriceTable, SpotstatError> {
    parse::read_table(reader, config)
}
