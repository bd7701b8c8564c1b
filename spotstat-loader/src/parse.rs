use std::io::Read;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use spotstat_core::Table;
use spotstat_types::{LoaderConfig, SpotstatError};

use crate::PriceTable;

const DEFAULT_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Read a header row, then one row per timestamp: index cell first, one price per series.
pub(crate) fn read_table<R: Read>(
    reader: R,
    config: &LoaderConfig,
) -> Result<PriceTable, SpotstatError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| SpotstatError::Data(e.to_string()))?
        .clone();
    let Some(index_name) = headers.get(0) else {
        return Err(SpotstatError::Data("dataset has no header row".into()));
    };
    let index_name = index_name.to_string();
    let names: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

    let mut index: Vec<DateTime<Utc>> = Vec::new();
    let mut columns: Vec<Vec<Option<Decimal>>> = vec![Vec::new(); names.len()];
    let mut record = StringRecord::new();
    while rdr
        .read_record(&mut record)
        .map_err(|e| SpotstatError::Data(e.to_string()))?
    {
        let line = record.position().map_or(0, csv::Position::line);
        let raw_ts = record.get(0).unwrap_or_default();
        let ts = parse_timestamp(raw_ts, config.timestamp_format.as_deref()).ok_or_else(|| {
            SpotstatError::parse(line, &index_name, format!("invalid timestamp {raw_ts:?}"))
        })?;
        index.push(ts);

        for (i, (name, column)) in names.iter().zip(columns.iter_mut()).enumerate() {
            let cell = record.get(i + 1).unwrap_or_default();
            let price = parse_price(cell).map_err(|msg| SpotstatError::parse(line, name, msg))?;
            column.push(price);
        }
    }

    Table::try_from_columns(&index, names.into_iter().zip(columns).collect())
}

fn parse_timestamp(raw: &str, format: Option<&str>) -> Option<DateTime<Utc>> {
    if let Some(fmt) = format {
        return NaiveDateTime::parse_from_str(raw, fmt)
            .map(|n| n.and_utc())
            .or_else(|_| DateTime::parse_from_str(raw, fmt).map(|d| d.with_timezone(&Utc)))
            .ok();
    }
    DEFAULT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|n| n.and_utc())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|d| d.with_timezone(&Utc))
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|n| n.and_utc())
        })
}

fn is_missing(cell: &str) -> bool {
    matches!(
        cell.to_ascii_lowercase().as_str(),
        "" | "nan" | "-nan" | "na" | "n/a" | "null" | "none"
    )
}

fn parse_price(cell: &str) -> Result<Option<Decimal>, String> {
    if is_missing(cell) {
        return Ok(None);
    }
    Decimal::from_str(cell)
        .or_else(|_| Decimal::from_scientific(cell))
        .map(Some)
        .map_err(|e| format!("invalid price {cell:?}: {e}"))
}
