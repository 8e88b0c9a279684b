// File: crates/iap-core/src/record.rs
// Summary: Purchase record model (gender, spending segment) and field parsing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Player gender as reported in the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Spender tier ranked by spend intensity (Whale highest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpendingSegment {
    Whale,
    Dolphin,
    Minnow,
}

impl SpendingSegment {
    /// Stack order used by the stacked bar chart: Whale at the bottom.
    pub const STACK_ORDER: [SpendingSegment; 3] =
        [SpendingSegment::Whale, SpendingSegment::Dolphin, SpendingSegment::Minnow];

    pub const fn label(&self) -> &'static str {
        match self {
            SpendingSegment::Whale => "Whale",
            SpendingSegment::Dolphin => "Dolphin",
            SpendingSegment::Minnow => "Minnow",
        }
    }
}

impl fmt::Display for SpendingSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for categorical fields that don't match any known value.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {field} value '{value}'")]
pub struct UnknownFieldValue {
    pub field: &'static str,
    pub value: String,
}

impl FromStr for Gender {
    type Err = UnknownFieldValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            other => Err(UnknownFieldValue { field: "Gender", value: other.to_string() }),
        }
    }
}

impl FromStr for SpendingSegment {
    type Err = UnknownFieldValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Whale" => Ok(SpendingSegment::Whale),
            "Dolphin" => Ok(SpendingSegment::Dolphin),
            "Minnow" => Ok(SpendingSegment::Minnow),
            other => Err(UnknownFieldValue { field: "SpendingSegment", value: other.to_string() }),
        }
    }
}

/// One in-app purchase row. Immutable once loaded; the loader collaborator
/// performs all string->number coercion before constructing these.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub age: i32,
    pub purchase_amount: f64,
    pub genre: String,
    pub gender: Gender,
    pub segment: SpendingSegment,
    pub session_count: u32,
}

/// Missing-key policy for categorical grouping dimensions: empty strings,
/// whitespace-only strings, and the literal "null" all count as missing.
pub fn non_blank(s: &str) -> Option<&str> {
    let t = s.trim();
    if t.is_empty() || t == "null" {
        None
    } else {
        Some(t)
    }
}
