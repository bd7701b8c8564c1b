use spotstat_core::{Statistic, aggregate_update_intervals};
use spotstat_mock::MockDataset;

#[test]
fn spot_fixture_summary() {
    let mock = MockDataset::new();
    let table = mock.spot();
    assert_eq!(table.len(), 4);

    let summary = aggregate_update_intervals(&table);
    assert_eq!(
        summary.column_names().collect::<Vec<_>>(),
        mock.spot_changing_series()
    );

    let m5 = "m5.large|us-east-1a";
    assert_eq!(summary.get(m5, Statistic::Count), Some(3.0));
    assert_eq!(summary.get(m5, Statistic::Min), Some(300.0));
    assert_eq!(summary.get(m5, Statistic::Mean), Some(3700.0));
    assert_eq!(summary.get(m5, Statistic::Max), Some(7200.0));

    let r5 = "r5.2xlarge|eu-west-1a";
    assert_eq!(summary.get(r5, Statistic::Count), Some(2.0));
    assert_eq!(summary.get(r5, Statistic::Mean), Some(5550.0));
}

#[test]
fn csv_rendering_has_header_and_one_line_per_row() {
    let csv = MockDataset::new().spot_csv();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("Timestamp,m5.large|us-east-1a"));
    assert_eq!(lines[2], "2023-03-01 00:10:00,0.0350,0.0700,,");
}

#[test]
fn named_fixtures() {
    let mock = MockDataset::new();
    assert!(aggregate_update_intervals(&mock.table("constant").unwrap()).is_empty());
    assert!(mock.table("empty").unwrap().is_empty());
    assert_eq!(mock.table("skewed").unwrap().len(), 1);
    assert!(mock.table("unknown").is_none());
}
