use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use proptest::prelude::*;
use spotstat_core::{
    NegativeIntervalPolicy, OrderedSeries, SpotstatError, Statistic, TimePoint, interval_seconds,
    summarize_interval_seconds, summarize_interval_seconds_with,
};

fn t(sec: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(sec, 0).unwrap()
}

fn events(secs: &[i64]) -> OrderedSeries<DateTime<Utc>, &'static str> {
    OrderedSeries::from_observed(secs.iter().map(|s| (t(*s), "x")))
}

#[test]
fn adjacent_differences_of_three_events() {
    let t0 = 1_700_000_000;
    let s = OrderedSeries::from_observed([(t(t0), "A"), (t(t0 + 10), "B"), (t(t0 + 40), "C")]);
    assert_eq!(interval_seconds(&s), vec![10.0, 30.0]);

    let summary = summarize_interval_seconds(&s, "x");
    assert_eq!(summary.len(), 1);
    assert_eq!(summary.get("x", Statistic::Count), Some(2.0));
    assert_eq!(summary.get("x", Statistic::Mean), Some(20.0));
    assert_eq!(summary.get("x", Statistic::Min), Some(10.0));
    assert_eq!(summary.get("x", Statistic::Max), Some(30.0));
}

#[test]
fn intervals_of_ten_and_forty_seconds() {
    let s = events(&[0, 10, 50]);
    let summary = summarize_interval_seconds(&s, "x");
    assert_eq!(summary.get("x", Statistic::Count), Some(2.0));
    assert_eq!(summary.get("x", Statistic::Mean), Some(25.0));
    assert_eq!(summary.get("x", Statistic::Min), Some(10.0));
    assert_eq!(summary.get("x", Statistic::Max), Some(40.0));
}

#[test]
fn zero_or_one_event_gives_empty_statistics() {
    for secs in [&[][..], &[100_i64][..]] {
        let summary = summarize_interval_seconds(&events(secs), "solo");
        let stats = summary.column("solo").copied().unwrap();
        assert_eq!(stats.count, 0);
        assert!(stats.is_undefined());
    }
}

#[test]
fn fractional_seconds_are_kept() {
    let base = t(1_000);
    let s = OrderedSeries::from_observed([
        (base, 1),
        (base + TimeDelta::milliseconds(1_500), 2),
        (base + TimeDelta::milliseconds(1_750), 3),
    ]);
    assert_eq!(interval_seconds(&s), vec![1.5, 0.25]);
}

#[test]
fn naive_and_epoch_timestamps_share_semantics() {
    let d = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let a = d.and_hms_opt(23, 59, 0).unwrap();
    let b = d.succ_opt().unwrap().and_hms_opt(0, 1, 30).unwrap();
    assert_eq!(b.seconds_since(a), 150.0);
    assert_eq!(10_i64.seconds_since(250), -240.0);
}

#[test]
fn negative_intervals_pass_through_by_default() {
    let s = events(&[100, 40, 160]);
    assert_eq!(interval_seconds(&s), vec![-60.0, 120.0]);
    let summary = summarize_interval_seconds(&s, "skew");
    assert_eq!(summary.get("skew", Statistic::Min), Some(-60.0));

    let warned = summarize_interval_seconds_with(&s, "skew", NegativeIntervalPolicy::Warn).unwrap();
    assert_eq!(warned, summary);
}

#[test]
fn reject_policy_reports_first_negative_position() {
    let s = events(&[0, 60, 30, 10]);
    let err = summarize_interval_seconds_with(&s, "skew", NegativeIntervalPolicy::Reject).unwrap_err();
    assert_eq!(
        err,
        SpotstatError::NegativeInterval {
            series: "skew".into(),
            position: 1
        }
    );
}

#[test]
fn zero_duration_intervals_are_not_rejected() {
    let s = events(&[0, 0, 60]);
    let summary =
        summarize_interval_seconds_with(&s, "dup", NegativeIntervalPolicy::Reject).unwrap();
    assert_eq!(summary.get("dup", Statistic::Min), Some(0.0));
}

proptest! {
    #[test]
    fn count_is_events_minus_one(steps in proptest::collection::vec(0i64..86_400, 0..100)) {
        let mut cur = 1_600_000_000i64;
        let mut secs = Vec::with_capacity(steps.len());
        for d in &steps {
            cur += d;
            secs.push(cur);
        }
        let s = events(&secs);
        let summary = summarize_interval_seconds(&s, "p");
        let expected = secs.len().saturating_sub(1);
        prop_assert_eq!(summary.column("p").unwrap().count, expected);
        prop_assert_eq!(interval_seconds(&s).len(), expected);
    }

    #[test]
    fn translation_invariance(secs in proptest::collection::vec(0i64..10_000_000, 0..50), offset in -1_000_000i64..1_000_000) {
        let mut sorted = secs.clone();
        sorted.sort_unstable();
        let shifted: Vec<i64> = sorted.iter().map(|s| s + offset).collect();
        prop_assert_eq!(
            summarize_interval_seconds(&events(&sorted), "p"),
            summarize_interval_seconds(&events(&shifted), "p")
        );
    }

    #[test]
    fn mean_times_count_spans_first_to_last(secs in proptest::collection::vec(0i64..10_000_000, 2..50)) {
        let mut sorted = secs;
        sorted.sort_unstable();
        let stats = *summarize_interval_seconds(&events(&sorted), "p").column("p").unwrap();
        #[allow(clippy::cast_precision_loss)]
        let span = (sorted[sorted.len() - 1] - sorted[0]) as f64;
        #[allow(clippy::cast_precision_loss)]
        let total = stats.mean.unwrap() * stats.count as f64;
        prop_assert!((total - span).abs() < 1e-6 * span.max(1.0));
    }
}
