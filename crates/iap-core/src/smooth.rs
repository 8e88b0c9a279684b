// File: crates/iap-core/src/smooth.rs
// Summary: Trailing moving-average smoothing over ordered multi-series points.

/// Default smoothing window for the line chart.
pub const DEFAULT_WINDOW: usize = 5;

/// One point on a shared ordinal axis (e.g. age) carrying a value per named
/// series. `values` is parallel to whatever series-name list the caller
/// maintains; `None` means "no data here", which downstream consumers must
/// treat as "do not plot", never as 0.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiSeriesPoint {
    pub ordinal: f64,
    pub values: Vec<Option<f64>>,
}

impl MultiSeriesPoint {
    pub fn new(ordinal: f64, values: Vec<Option<f64>>) -> Self {
        Self { ordinal, values }
    }
}

/// Trailing moving average over `rows`, per series. For index i the window is
/// [max(0, i-window+1), i]: naturally shorter at the start, no padding, no
/// lookahead. Undefined (None or NaN) inputs are excluded from the mean; a
/// window with zero defined values yields `None` for that series.
///
/// Rows must already be in ordinal order; missing ordinals are not
/// interpolated, only observed rows appear in the output.
pub fn moving_average(rows: &[MultiSeriesPoint], window: usize) -> Vec<MultiSeriesPoint> {
    let w = window.max(1);
    let n_series = rows.first().map(|r| r.values.len()).unwrap_or(0);

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let lo = i + 1 - w.min(i + 1);
            let slice = &rows[lo..=i];
            let values = (0..n_series)
                .map(|s| {
                    let mut sum = 0.0;
                    let mut count = 0usize;
                    for r in slice {
                        if let Some(v) = r.values.get(s).copied().flatten() {
                            if !v.is_nan() {
                                sum += v;
                                count += 1;
                            }
                        }
                    }
                    if count == 0 { None } else { Some(sum / count as f64) }
                })
                .collect();
            MultiSeriesPoint { ordinal: row.ordinal, values }
        })
        .collect()
}
