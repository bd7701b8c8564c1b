use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use spotstat_core::{OrderedSeries, Table};

use crate::MockTable;

const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SERIES: [&str; 4] = [
    "m5.large|us-east-1a",
    "c5.xlarge|us-east-1b",
    "r5.2xlarge|eu-west-1a",
    "t3.micro|us-west-2c",
];

// Empty cell = no observation
const ROWS: [(&str, [&str; 4]); 6] = [
    ("2023-03-01 00:00:00", ["0.0350", "0.0700", "0.1210", ""]),
    ("2023-03-01 00:10:00", ["0.0350", "0.0700", "", ""]),
    ("2023-03-01 01:00:00", ["0.0361", "0.0700", "0.1210", ""]),
    ("2023-03-01 01:30:00", ["0.0361", "0.0700", "0.1190", ""]),
    ("2023-03-01 03:00:00", ["0.0350", "0.0700", "", ""]),
    ("2023-03-01 03:05:00", ["0.0372", "0.0700", "0.1210", ""]),
];

pub const CHANGING: &[&str] = &["m5.large|us-east-1a", "r5.2xlarge|eu-west-1a"];

pub fn by_name(name: &str) -> Option<MockTable> {
    match name {
        "spot" => Some(spot()),
        "constant" => Some(constant()),
        "empty" => Some(Table::new()),
        "skewed" => Some(skewed()),
        _ => None,
    }
}

fn ts(s: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, TS_FORMAT)
        .unwrap()
        .and_utc()
}

fn px(s: &str) -> Option<Decimal> {
    (!s.is_empty()).then(|| Decimal::from_str(s).unwrap())
}

pub fn spot() -> MockTable {
    let index: Vec<DateTime<Utc>> = ROWS.iter().map(|(t, _)| ts(t)).collect();
    let columns = SERIES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let values = ROWS.iter().map(|(_, cells)| px(cells[i])).collect();
            ((*name).to_string(), values)
        })
        .collect();
    Table::try_from_columns(&index, columns).unwrap()
}

pub fn spot_csv() -> String {
    let mut out = format!("Timestamp,{}\n", SERIES.join(","));
    for (t, cells) in ROWS {
        out.push_str(t);
        for cell in cells {
            out.push(',');
            out.push_str(cell);
        }
        out.push('\n');
    }
    out
}

fn constant() -> MockTable {
    let flat = |price: &str| {
        OrderedSeries::from_observed(ROWS.iter().map(|(t, _)| (ts(t), px(price).unwrap())))
    };
    Table::try_from_iter([("a1.medium", flat("0.0102")), ("i3.large", flat("0.0468"))]).unwrap()
}

fn skewed() -> MockTable {
    let series = OrderedSeries::from_observed([
        (ts("2023-03-01 02:00:00"), px("0.0500").unwrap()),
        (ts("2023-03-01 01:00:00"), px("0.0510").unwrap()),
        (ts("2023-03-01 04:00:00"), px("0.0500").unwrap()),
    ]);
    Table::try_from_iter([("g4dn.xlarge|us-east-1c", series)]).unwrap()
}
