use spotstat_core::{OrderedSeries, SpotstatError, Table};

#[test]
fn mismatched_parts_are_not_a_series() {
    let err = OrderedSeries::<i64, f64>::try_from_parts(vec![1, 2, 3], vec![Some(1.0)]).unwrap_err();
    assert!(matches!(err, SpotstatError::InvalidArg(ref msg) if msg.contains("expected a series")));
}

#[test]
fn accessors_follow_insertion_order() {
    let mut s = OrderedSeries::new();
    s.push(30_i64, Some("b"));
    s.push(10, None);
    s.push(20, Some("a"));
    assert_eq!(s.len(), 3);
    assert_eq!(s.count_present(), 2);
    assert_eq!(s.index(), &[30, 10, 20]);
    assert_eq!(s.first(), Some((&30, Some(&"b"))));
    assert_eq!(s.last(), Some((&20, Some(&"a"))));
    assert_eq!(s.get(1), Some((&10, None)));
    assert_eq!(s.get(3), None);

    let dense = s.dropna();
    assert_eq!(dense.index(), &[30, 20]);
    assert!(dense.values().iter().all(Option::is_some));
}

#[test]
fn duplicate_table_names_are_rejected() {
    let mut table: Table<i64, u32> = Table::new();
    table.insert("m5.large", OrderedSeries::new()).unwrap();
    let err = table.insert("m5.large", OrderedSeries::new()).unwrap_err();
    assert!(matches!(err, SpotstatError::InvalidArg(_)));
    assert_eq!(table.len(), 1);
}

#[test]
fn columns_share_the_row_index() {
    let index = vec![0_i64, 60, 120];
    let table = Table::try_from_columns(
        &index,
        vec![
            ("a".to_string(), vec![Some(1), Some(1), Some(2)]),
            ("b".to_string(), vec![None, Some(3), None]),
        ],
    )
    .unwrap();
    assert_eq!(table.names().collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(table.get("b").unwrap().index(), index.as_slice());
    assert_eq!(table.get("b").unwrap().count_present(), 1);
    assert!(table.get("c").is_none());
}

#[test]
fn short_column_is_rejected_with_its_name() {
    let err = Table::try_from_columns(&[0_i64, 1], vec![("short".to_string(), vec![Some(1)])])
        .unwrap_err();
    assert!(matches!(err, SpotstatError::InvalidArg(ref msg) if msg.contains("short")));
}

#[test]
fn wide_tables_look_up_by_name() {
    let mut table: Table<i64, u32> = Table::new();
    for i in 0..5_000_u32 {
        table
            .insert(format!("i{i}"), OrderedSeries::from_pairs([(0_i64, Some(i))]))
            .unwrap();
    }
    assert_eq!(table.len(), 5_000);
    assert_eq!(table.get("i4321").unwrap().values(), &[Some(4321)]);
    assert!(table.get("i5000").is_none());
    assert!(table.insert("i0", OrderedSeries::new()).is_err());
    assert_eq!(table.names().last(), Some("i4999"));
}
