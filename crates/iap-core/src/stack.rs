// File: crates/iap-core/src/stack.rs
// Summary: Stack layout converting per-category segment totals into cumulative bands.

use std::collections::BTreeMap;

/// One segment's contribution within a category's cumulative total.
/// Invariant: end >= start; band k starts where band k-1 ends.
#[derive(Clone, Debug, PartialEq)]
pub struct StackBand<C, S> {
    pub category: C,
    pub segment: S,
    pub start: f64,
    pub end: f64,
}

/// Build cumulative bands per category in the fixed `order` (never sorted by
/// value). A category missing a segment gets a zero-height band, not an
/// omission. Categories come out in sorted key order, independent of segment
/// order.
pub fn stack_layout<C, S>(
    totals: &BTreeMap<C, BTreeMap<S, f64>>,
    order: &[S],
) -> Vec<StackBand<C, S>>
where
    C: Ord + Clone,
    S: Ord + Copy,
{
    let mut bands = Vec::with_capacity(totals.len() * order.len());
    for (category, segments) in totals {
        let mut cursor = 0.0;
        for &segment in order {
            let value = segments.get(&segment).copied().unwrap_or(0.0);
            bands.push(StackBand {
                category: category.clone(),
                segment,
                start: cursor,
                end: cursor + value,
            });
            cursor += value;
        }
    }
    bands
}

/// Largest band top across all categories; 0 for empty input. Used for the
/// stacked chart's y domain.
pub fn max_band_end<C, S>(bands: &[StackBand<C, S>]) -> f64 {
    bands.iter().fold(0.0, |acc, b| acc.max(b.end))
}
