// File: crates/iap-core/src/lib.rs
// Summary: Core library entry point; exports the aggregation pipeline and selection API.

pub mod axis;
pub mod dashboard;
pub mod pipeline;
pub mod record;
pub mod rollup;
pub mod selection;
pub mod smooth;
pub mod stack;

pub use axis::{Axis, ScaleKind};
pub use dashboard::Dashboard;
pub use pipeline::{
    recompute, DashboardData, GroupedView, LineView, PipelineOptions, ScatterView, StackedView,
    LINE_SERIES,
};
pub use record::{Gender, Record, SpendingSegment};
pub use rollup::{nested_value, outer_total, rollup_sum, rollup_sum2};
pub use selection::{MarkEmphasis, SelectionState};
pub use smooth::{moving_average, MultiSeriesPoint};
pub use stack::{stack_layout, StackBand};
