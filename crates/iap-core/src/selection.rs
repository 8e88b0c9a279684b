// File: crates/iap-core/src/selection.rs
// Summary: Cross-chart selection state (genre filter set + active segment highlight).

use std::collections::BTreeSet;

use crate::record::{Record, SpendingSegment};

/// Per-mark highlight decision derived from the active segment. Purely
/// presentational; the view collaborator maps this to opacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkEmphasis {
    Full,
    Dimmed,
}

/// Cross-chart interaction state. Two orthogonal slots:
/// an ordered set of selected genres acting as a global record filter
/// (empty = show all), and an optional hovered segment used only for
/// highlight emphasis. Initialized empty; never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    selected: BTreeSet<String>,
    active: Option<SpendingSegment>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the genre if absent, remove it if present. Selecting a genre the
    /// dataset doesn't contain is fine: the filter just matches nothing.
    pub fn toggle(&mut self, genre: &str) {
        if !self.selected.remove(genre) {
            self.selected.insert(genre.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn set_active(&mut self, segment: Option<SpendingSegment>) {
        self.active = segment;
    }

    pub fn active(&self) -> Option<SpendingSegment> {
        self.active
    }

    pub fn is_selected(&self, genre: &str) -> bool {
        self.selected.contains(genre)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether a record passes the genre filter (everything passes when the
    /// selection is empty).
    pub fn matches(&self, record: &Record) -> bool {
        self.selected.is_empty() || self.selected.contains(record.genre.as_str())
    }

    /// Highlight decision for a mark tagged with `segment`: full emphasis
    /// when nothing is active or the tags match, dimmed otherwise.
    pub fn emphasis(&self, segment: SpendingSegment) -> MarkEmphasis {
        match self.active {
            None => MarkEmphasis::Full,
            Some(a) if a == segment => MarkEmphasis::Full,
            Some(_) => MarkEmphasis::Dimmed,
        }
    }

    /// Filter label for the selection UI: sorted, comma-joined genres, or
    /// "All" when the filter is empty. Derived fresh on every call.
    pub fn filter_label(&self) -> String {
        if self.selected.is_empty() {
            "All".to_string()
        } else {
            self.selected.iter().cloned().collect::<Vec<_>>().join(", ")
        }
    }

    /// Label for the highlighted segment, if any.
    pub fn active_label(&self) -> Option<&'static str> {
        self.active.map(|s| s.label())
    }
}
