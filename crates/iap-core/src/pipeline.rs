// File: crates/iap-core/src/pipeline.rs
// Summary: Pure recompute pass deriving all four chart views from filtered records.

use std::collections::BTreeMap;

use crate::axis::{extent, Axis};
use crate::record::{non_blank, Gender, Record, SpendingSegment};
use crate::rollup::{nested_value, rollup_sum, rollup_sum2};
use crate::selection::SelectionState;
use crate::smooth::{moving_average, MultiSeriesPoint, DEFAULT_WINDOW};
use crate::stack::{max_band_end, stack_layout, StackBand};

/// Knobs shared by the whole pipeline. Defaults mirror the dashboard's
/// shipped configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineOptions {
    /// Ages below this are excluded from the scatter and line charts.
    pub min_age: i32,
    /// Trailing moving-average window for the line chart.
    pub smoothing_window: usize,
    /// Fixed bottom-to-top segment order for the stacked bar chart.
    pub stack_order: Vec<SpendingSegment>,
    /// Target tick count used when rounding y domains to nice numbers.
    pub tick_count: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            min_age: 10,
            smoothing_window: DEFAULT_WINDOW,
            stack_order: SpendingSegment::STACK_ORDER.to_vec(),
            tick_count: 10,
        }
    }
}

/// Series slots in `LineView` points, in plot order.
pub const LINE_SERIES: [&str; 4] = ["Whale", "Dolphin", "Minnow", "Total"];
pub const SERIES_WHALE: usize = 0;
pub const SERIES_DOLPHIN: usize = 1;
pub const SERIES_MINNOW: usize = 2;
pub const SERIES_TOTAL: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPoint {
    pub age: i32,
    pub amount: f64,
    pub segment: SpendingSegment,
}

/// Age-vs-amount scatter with a log y scale. Jitter, if any, is applied by
/// the view collaborator at mark placement time and never feeds back here.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterView {
    pub points: Vec<ScatterPoint>,
    pub x: Axis,
    pub y: Axis,
}

/// Smoothed per-segment spending totals by age. `points[i].values` is
/// parallel to `LINE_SERIES`; `None` means "gap in the line", not zero.
#[derive(Clone, Debug, PartialEq)]
pub struct LineView {
    pub series: Vec<&'static str>,
    pub points: Vec<MultiSeriesPoint>,
    pub x: Axis,
    pub y: Axis,
}

/// Per-genre segment totals stacked in a fixed order.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedView {
    pub bands: Vec<StackBand<String, SpendingSegment>>,
    pub categories: Vec<String>,
    pub y: Axis,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroupedBar {
    pub genre: String,
    pub gender: Gender,
    pub total: f64,
}

/// Per-genre totals split by gender (Other excluded, as in the source data's
/// published dashboard).
#[derive(Clone, Debug, PartialEq)]
pub struct GroupedView {
    pub bars: Vec<GroupedBar>,
    pub categories: Vec<String>,
    pub genders: Vec<Gender>,
    pub y: Axis,
}

/// Everything the rendering collaborator needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub scatter: ScatterView,
    pub line: LineView,
    pub stacked: StackedView,
    pub grouped: GroupedView,
}

/// Derive all four views from the base records under the given selection.
/// Pure: identical inputs give identical outputs, so re-renders are
/// idempotent.
pub fn recompute(
    records: &[Record],
    selection: &SelectionState,
    opts: &PipelineOptions,
) -> DashboardData {
    let filtered: Vec<&Record> = records.iter().filter(|r| selection.matches(r)).collect();
    log::debug!(
        "recompute: {} of {} records pass filter '{}'",
        filtered.len(),
        records.len(),
        selection.filter_label()
    );

    DashboardData {
        scatter: scatter_view(&filtered, opts),
        line: line_view(&filtered, opts),
        stacked: stacked_view(&filtered, opts),
        grouped: grouped_view(&filtered, opts),
    }
}

fn scatter_view(records: &[&Record], opts: &PipelineOptions) -> ScatterView {
    let points: Vec<ScatterPoint> = records
        .iter()
        .filter(|r| r.age >= opts.min_age && r.purchase_amount > 0.0)
        .map(|r| ScatterPoint { age: r.age, amount: r.purchase_amount, segment: r.segment })
        .collect();

    let x_max = points
        .iter()
        .map(|p| p.age as f64)
        .fold(f64::NEG_INFINITY, f64::max);
    let x_max = if x_max.is_finite() { x_max } else { opts.min_age as f64 + 1.0 };
    let y_max = points.iter().map(|p| p.amount).fold(0.0, f64::max);

    ScatterView {
        points,
        x: Axis::new("Age", opts.min_age as f64, x_max),
        y: Axis::new_log10("In-App Purchase Amount ($)", 0.1, y_max),
    }
}

fn line_view(records: &[&Record], opts: &PipelineOptions) -> LineView {
    // Spending per (age, segment) and per age overall. The per-segment lookup
    // keeps "absent" as None so gaps survive into the smoother.
    let by_age_segment = rollup_sum2(
        records,
        |r| Some(r.age),
        |r| Some(r.segment),
        |r| r.purchase_amount,
    );
    let by_age = rollup_sum(records, |r| Some(r.age), |r| r.purchase_amount);

    let raw: Vec<MultiSeriesPoint> = by_age
        .iter()
        .filter(|(&age, _)| age >= opts.min_age)
        .map(|(&age, &total)| {
            let segments = by_age_segment.get(&age);
            let value_of = |seg: SpendingSegment| -> Option<f64> {
                segments.and_then(|m| m.get(&seg)).copied()
            };
            MultiSeriesPoint::new(
                age as f64,
                vec![
                    value_of(SpendingSegment::Whale),
                    value_of(SpendingSegment::Dolphin),
                    value_of(SpendingSegment::Minnow),
                    Some(total),
                ],
            )
        })
        .collect();

    let points = moving_average(&raw, opts.smoothing_window);

    let (x_min, x_max) =
        extent(points.iter().map(|p| p.ordinal)).unwrap_or((opts.min_age as f64, opts.min_age as f64 + 1.0));
    let y_max = points
        .iter()
        .flat_map(|p| [p.values[SERIES_TOTAL], p.values[SERIES_WHALE]])
        .flatten()
        .fold(0.0, f64::max);

    LineView {
        series: LINE_SERIES.to_vec(),
        points,
        x: Axis::new("Age", x_min, x_max),
        y: Axis::new("Moving Avg. of Total Spending ($)", 0.0, y_max).nice(opts.tick_count),
    }
}

fn stacked_view(records: &[&Record], opts: &PipelineOptions) -> StackedView {
    let totals = rollup_sum2(
        records,
        |r| non_blank(&r.genre).map(str::to_string),
        |r| Some(r.segment),
        |r| r.purchase_amount,
    );

    let categories: Vec<String> = totals.keys().cloned().collect();
    let bands = stack_layout(&totals, &opts.stack_order);
    let y_max = max_band_end(&bands);

    StackedView {
        bands,
        categories,
        y: Axis::new("In-App Purchase Amount ($)", 0.0, y_max).nice(opts.tick_count),
    }
}

const BAR_GENDERS: [Gender; 2] = [Gender::Male, Gender::Female];

fn grouped_view(records: &[&Record], opts: &PipelineOptions) -> GroupedView {
    let eligible: Vec<&Record> = records
        .iter()
        .filter(|r| matches!(r.gender, Gender::Male | Gender::Female))
        .copied()
        .collect();

    let totals = rollup_sum2(
        &eligible,
        |r| non_blank(&r.genre).map(str::to_string),
        |r| Some(r.gender),
        |r| r.purchase_amount,
    );

    let categories: Vec<String> = totals.keys().cloned().collect();
    let mut bars = Vec::with_capacity(categories.len() * BAR_GENDERS.len());
    let mut y_max = 0.0f64;
    for genre in &categories {
        for &gender in &BAR_GENDERS {
            let total = nested_value(&totals, genre, &gender);
            y_max = y_max.max(total);
            bars.push(GroupedBar { genre: genre.clone(), gender, total });
        }
    }

    GroupedView {
        bars,
        categories,
        genders: BAR_GENDERS.to_vec(),
        y: Axis::new("Total In-App Purchase ($)", 0.0, y_max).nice(opts.tick_count),
    }
}
