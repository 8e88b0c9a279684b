// File: crates/iap-core/src/rollup.rs
// Summary: Group-by-then-sum rollups over record slices (single and nested keys).

use std::collections::BTreeMap;

/// Sum `measure` per key. Rows whose key extractor returns `None` (missing
/// or blank on the grouping dimension) are excluded before aggregation.
/// Keys come back sorted because the result is an ordered map.
pub fn rollup_sum<T, K, FK, FM>(rows: &[T], key: FK, measure: FM) -> BTreeMap<K, f64>
where
    K: Ord,
    FK: Fn(&T) -> Option<K>,
    FM: Fn(&T) -> f64,
{
    let mut out: BTreeMap<K, f64> = BTreeMap::new();
    for row in rows {
        if let Some(k) = key(row) {
            *out.entry(k).or_insert(0.0) += measure(row);
        }
    }
    out
}

/// Two-level rollup: outer key -> inner key -> sum. A row is excluded when
/// either extractor returns `None`.
pub fn rollup_sum2<T, K1, K2, F1, F2, FM>(
    rows: &[T],
    outer: F1,
    inner: F2,
    measure: FM,
) -> BTreeMap<K1, BTreeMap<K2, f64>>
where
    K1: Ord,
    K2: Ord,
    F1: Fn(&T) -> Option<K1>,
    F2: Fn(&T) -> Option<K2>,
    FM: Fn(&T) -> f64,
{
    let mut out: BTreeMap<K1, BTreeMap<K2, f64>> = BTreeMap::new();
    for row in rows {
        if let (Some(k1), Some(k2)) = (outer(row), inner(row)) {
            *out.entry(k1).or_default().entry(k2).or_insert(0.0) += measure(row);
        }
    }
    out
}

/// Look up a nested sum, treating missing combinations as 0 rather than
/// absent. Consumers that need "absent" (e.g. the smoother) should query the
/// inner map directly instead.
pub fn nested_value<K1: Ord, K2: Ord>(
    map: &BTreeMap<K1, BTreeMap<K2, f64>>,
    outer: &K1,
    inner: &K2,
) -> f64 {
    map.get(outer).and_then(|m| m.get(inner)).copied().unwrap_or(0.0)
}

/// Total across all inner keys for one outer key (0 when the key is absent).
pub fn outer_total<K1: Ord, K2: Ord>(map: &BTreeMap<K1, BTreeMap<K2, f64>>, outer: &K1) -> f64 {
    map.get(outer).map(|m| m.values().sum()).unwrap_or(0.0)
}
