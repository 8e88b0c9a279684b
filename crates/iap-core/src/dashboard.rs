// File: crates/iap-core/src/dashboard.rs
// Summary: Owns base records + selection state and keeps derived view data current.

use crate::pipeline::{recompute, DashboardData, PipelineOptions};
use crate::record::{Record, SpendingSegment};
use crate::selection::{MarkEmphasis, SelectionState};

/// Single-threaded coordinator for the four charts. Construction is the
/// data-load completion entry point: until then no chart state exists.
/// Every filter mutation synchronously recomputes the whole pipeline from
/// the unfiltered base records before returning, so interactions can never
/// observe a stale frame.
pub struct Dashboard {
    records: Vec<Record>,
    selection: SelectionState,
    opts: PipelineOptions,
    data: DashboardData,
}

impl Dashboard {
    pub fn new(records: Vec<Record>, opts: PipelineOptions) -> Self {
        let selection = SelectionState::new();
        let data = recompute(&records, &selection, &opts);
        Self { records, selection, opts, data }
    }

    pub fn with_defaults(records: Vec<Record>) -> Self {
        Self::new(records, PipelineOptions::default())
    }

    /// Toggle a genre in the filter set and rebuild all views. A genre absent
    /// from the base data still toggles; the result is a valid empty frame.
    pub fn toggle_category(&mut self, genre: &str) -> &DashboardData {
        self.selection.toggle(genre);
        self.refresh()
    }

    /// Drop the whole genre filter and rebuild all views.
    pub fn clear_selection(&mut self) -> &DashboardData {
        self.selection.clear();
        self.refresh()
    }

    /// Change the hover highlight. Presentation-only: no re-aggregation, the
    /// current view data stays valid as-is.
    pub fn set_active(&mut self, segment: Option<SpendingSegment>) {
        self.selection.set_active(segment);
    }

    /// Highlight decision for a mark tagged with `segment`.
    pub fn emphasis(&self, segment: SpendingSegment) -> MarkEmphasis {
        self.selection.emphasis(segment)
    }

    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn filter_label(&self) -> String {
        self.selection.filter_label()
    }

    pub fn active_label(&self) -> Option<&'static str> {
        self.selection.active_label()
    }

    fn refresh(&mut self) -> &DashboardData {
        self.data = recompute(&self.records, &self.selection, &self.opts);
        &self.data
    }
}
