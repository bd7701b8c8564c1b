use crate::OrderedSeries;

/// Collapse runs of consecutive equal values into their first entry.
///
/// Missing values are dropped first; each remaining entry is kept only if its
/// value differs from the last kept value. The first present entry is always
/// kept. Equality is exact (`PartialEq`), so a value that recurs after changing
/// away is kept again: only consecutive repeats collapse.
///
/// ```
/// use spotstat_core::{OrderedSeries, remove_consecutive_repeated_entries};
///
/// let prices = OrderedSeries::from_observed([(1_i64, 5), (2, 5), (3, 7), (4, 7), (5, 5)]);
/// let changes = remove_consecutive_repeated_entries(&prices);
/// assert_eq!(changes.index(), &[1, 3, 5]);
/// ```
#[must_use]
pub fn remove_consecutive_repeated_entries<T, V>(series: &OrderedSeries<T, V>) -> OrderedSeries<T, V>
where
    T: Clone,
    V: PartialEq + Clone,
{
    let mut out = OrderedSeries::with_capacity(series.count_present());
    let mut last: Option<&V> = None;
    for (ts, value) in series.iter() {
        let Some(v) = value else {
            continue;
        };
        if last.is_some_and(|prev| prev == v) {
            continue;
        }
        out.push(ts.clone(), Some(v.clone()));
        last = Some(v);
    }
    out
}
