//! Derived, per-tick view types.
//!
//! Everything here is recomputed from scratch on every driver tick and
//! has no lifecycle beyond that tick. `PartialEq` derives exist so that
//! resolution can be checked for idempotence.

use serde::{Deserialize, Serialize};

use super::domain::SubSlot;

/// The sub-interval containing the current wall-clock time.
///
/// `slot` is `None` for combined (single-interval) rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivePeriod {
    pub row_index: usize,
    pub slot: Option<SubSlot>,
    /// Boundaries in minutes since local midnight, `[0, 1440)`.
    pub start_minute: u16,
    pub end_minute: u16,
    pub label: String,
}

impl ActivePeriod {
    /// True when the interval spans local midnight, i.e. its end minute
    /// is numerically below its start minute.
    pub fn crosses_midnight(&self) -> bool {
        self.end_minute < self.start_minute
    }
}

/// Time left in the active period, broken down for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingTime {
    pub hours: u16,
    pub minutes: u16,
    pub total_minutes: u16,
}

impl RemainingTime {
    pub fn from_minutes(total_minutes: u16) -> Self {
        Self {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
            total_minutes,
        }
    }
}

/// Preview of the chronologically next sub-interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextPreview {
    pub label: String,
    /// The target's start boundary as it appeared in the schedule,
    /// e.g. `"07:30 AM"`.
    pub start_label: String,
}

/// Active period together with its derived progress figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodStatus {
    pub period: ActivePeriod,
    pub remaining: RemainingTime,
    /// Completion percentage, clamped to `[0, 100]`.
    pub progress_percent: f64,
}

/// One tick's fully resolved display state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedView {
    /// `None` when no sub-interval contains the sampled minute.
    pub status: Option<PeriodStatus>,
    pub next: Option<NextPreview>,
    /// The minute-of-day this view was resolved for.
    pub minute_of_day: u16,
}

/// What the driver publishes to its consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiveView {
    /// The snapshot being viewed is not for the current calendar day;
    /// live tracking does not apply.
    NotApplicable,
    Resolved(ResolvedView),
}
