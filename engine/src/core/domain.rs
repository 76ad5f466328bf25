//! Schedule snapshot model.
//!
//! A snapshot is the backend's precomputed muhurat table for a single
//! calendar day. Rows come in two shapes, distinguished once at
//! deserialization time: split rows carry two disjoint sub-intervals as
//! four discrete clock labels, combined rows carry a single
//! `"<start> to <end>"` window. The engine never mutates a snapshot; it
//! is replaced wholesale when a new table is fetched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which of a split row's two sub-intervals is being addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubSlot {
    First,
    Second,
}

/// A row whose muhurat occupies two disjoint time blocks in the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitRow {
    /// Muhurat name, e.g. "Rahu Kalam".
    #[serde(rename = "muhurat")]
    pub label: String,
    /// First block boundaries, as `"H:MM AM|PM"` clock labels.
    pub start1: String,
    pub end1: String,
    /// Second block boundaries.
    pub start2: String,
    pub end2: String,
    /// Inauspicious on any day.
    #[serde(default)]
    pub inauspicious: bool,
    /// Inauspicious only on specific weekdays.
    #[serde(rename = "weekdayInauspicious", default)]
    pub weekday_inauspicious: bool,
    /// Position of the muhurat in the traditional day ordering.
    #[serde(default)]
    pub sequence: u32,
}

/// A row with a single sub-interval encoded as one combined text window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedRow {
    /// Category label, e.g. "Abhijit Muhurat".
    #[serde(rename = "muhurat")]
    pub label: String,
    /// Combined window text, `"<start> to <end>"`.
    #[serde(rename = "time")]
    pub window: String,
}

impl CombinedRow {
    /// Splits the window into its start and end clock labels.
    /// Returns `None` when the text does not contain a `" to "` separator.
    pub fn bounds(&self) -> Option<(&str, &str)> {
        self.window
            .split_once(" to ")
            .map(|(s, e)| (s.trim(), e.trim()))
    }

    /// The start portion of the window, falling back to the raw text when
    /// the separator is missing. Display-only; matching goes through
    /// [`bounds`](Self::bounds).
    pub fn start_text(&self) -> &str {
        self.bounds().map(|(s, _)| s).unwrap_or(self.window.trim())
    }
}

/// One calendar slot of the daily schedule, in either shape.
///
/// The variant is fixed when the JSON snapshot is deserialized (serde
/// picks it from the fields present) and never re-inferred afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScheduleRow {
    Split(SplitRow),
    Combined(CombinedRow),
}

impl ScheduleRow {
    /// The muhurat name of this row.
    pub fn label(&self) -> &str {
        match self {
            Self::Split(r) => &r.label,
            Self::Combined(r) => &r.label,
        }
    }

    /// The row's sub-intervals in chronological row order, as
    /// `(slot, start_label, end_label)` triples. A combined row whose
    /// window text lacks the separator contributes no sub-interval.
    pub fn slot_bounds(&self) -> Vec<(Option<SubSlot>, &str, &str)> {
        match self {
            Self::Split(r) => vec![
                (Some(SubSlot::First), r.start1.as_str(), r.end1.as_str()),
                (Some(SubSlot::Second), r.start2.as_str(), r.end2.as_str()),
            ],
            Self::Combined(r) => r
                .bounds()
                .map(|(s, e)| vec![(None, s, e)])
                .unwrap_or_default(),
        }
    }

    /// Raw start label for the given slot, for display in previews.
    /// Combined rows ignore the slot argument.
    pub fn start_label(&self, slot: Option<SubSlot>) -> &str {
        match (self, slot) {
            (Self::Split(r), Some(SubSlot::Second)) => &r.start2,
            (Self::Split(r), _) => &r.start1,
            (Self::Combined(r), _) => r.start_text(),
        }
    }
}

/// An immutable schedule snapshot for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// The local calendar day this table was computed for.
    pub date: NaiveDate,
    /// Rows in chronological order. Order is trusted, not validated.
    pub rows: Vec<ScheduleRow>,
}

impl DaySchedule {
    pub fn new(date: NaiveDate, rows: Vec<ScheduleRow>) -> Self {
        Self { date, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
