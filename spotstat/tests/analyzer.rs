use std::io::Write;

use flate2::Compression as GzLevel;
use flate2::write::GzEncoder;
use spotstat::{
    Compression, NegativeIntervalPolicy, Spotstat, SpotstatError, Statistic, aggregate_update_intervals,
};
use spotstat_mock::MockDataset;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn defaults_match_plain_aggregation() {
    let mock = MockDataset::new();
    let table = mock.spot();
    let spotstat = Spotstat::builder().build().unwrap();
    assert_eq!(
        spotstat.analyze_table(&table).unwrap(),
        aggregate_update_intervals(&table)
    );
    assert!(spotstat.aggregate_config().drop_empty_columns);
}

#[test]
fn keep_empty_columns_retains_every_series() {
    let table = MockDataset::new().spot();
    let summary = Spotstat::builder()
        .drop_empty_columns(false)
        .build()
        .unwrap()
        .analyze_table(&table)
        .unwrap();
    assert_eq!(summary.len(), table.len());
    assert_eq!(summary.get("t3.micro|us-west-2c", Statistic::Count), Some(0.0));
}

#[test]
fn reject_policy_fails_on_skewed_fixture() {
    let table = MockDataset::new().table("skewed").unwrap();
    let err = Spotstat::builder()
        .negative_intervals(NegativeIntervalPolicy::Reject)
        .build()
        .unwrap()
        .analyze_table(&table)
        .unwrap_err();
    assert!(matches!(err, SpotstatError::NegativeInterval { position: 0, .. }));

    let summary = Spotstat::builder().build().unwrap().analyze_table(&table).unwrap();
    assert_eq!(
        summary.get("g4dn.xlarge|us-east-1c", Statistic::Min),
        Some(-3600.0)
    );
}

#[test]
fn blank_timestamp_format_is_rejected_at_build() {
    let err = Spotstat::builder().timestamp_format("  ").build().unwrap_err();
    assert!(matches!(err, SpotstatError::InvalidArg(_)));
}

#[test]
fn compression_is_inferred_unless_forced() {
    let inferred = Spotstat::builder().build().unwrap();
    assert_eq!(
        inferred.loader_config(Path::new("x.csv.gz")).compression,
        Compression::Gzip
    );
    assert_eq!(
        inferred.loader_config(Path::new("x.csv")).compression,
        Compression::None
    );
    let forced = Spotstat::builder().compression(Compression::Zip).build().unwrap();
    assert_eq!(
        forced.loader_config(Path::new("x.csv")).compression,
        Compression::Zip
    );
}

#[test]
fn analyze_file_matches_in_memory_fixture() {
    let mock = MockDataset::new();
    let dir = TempDir::new().unwrap();

    let plain = dir.path().join("spot.csv");
    std::fs::write(&plain, mock.spot_csv()).unwrap();

    let gz = dir.path().join("spot.csv.gz");
    let mut enc = GzEncoder::new(std::fs::File::create(&gz).unwrap(), GzLevel::default());
    enc.write_all(mock.spot_csv().as_bytes()).unwrap();
    enc.finish().unwrap();

    let spotstat = Spotstat::builder().build().unwrap();
    let expected = aggregate_update_intervals(&mock.spot());
    assert_eq!(spotstat.analyze_file(&plain).unwrap(), expected);
    assert_eq!(spotstat.analyze_file(&gz).unwrap(), expected);
    assert_eq!(spotstat.load(&plain).unwrap(), mock.spot());
}

#[test]
fn analyze_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = Spotstat::builder()
        .build()
        .unwrap()
        .analyze_file(dir.path().join("missing.csv.zip"))
        .unwrap_err();
    assert!(matches!(err, SpotstatError::NotFound { .. }));
}
