//! Elapsed/remaining time and completion percentage for an active period.
//!
//! All arithmetic is in whole minutes. For a midnight-crossing interval
//! the day boundary splits the computation into two sub-cases: `now`
//! already past midnight (`now < end`) or still before it
//! (`now >= start`); the duration is the same in both.

use crate::core::view::{ActivePeriod, PeriodStatus, RemainingTime};
use crate::time::MINUTES_PER_DAY;

/// Total length of the period in minutes, midnight-aware.
pub fn duration_minutes(period: &ActivePeriod) -> u16 {
    if period.crosses_midnight() {
        MINUTES_PER_DAY - period.start_minute + period.end_minute
    } else {
        period.end_minute - period.start_minute
    }
}

/// Minutes from `now` until the period ends.
pub fn remaining_minutes(period: &ActivePeriod, now: u16) -> u16 {
    if period.crosses_midnight() {
        if now < period.end_minute {
            period.end_minute - now
        } else {
            MINUTES_PER_DAY - now + period.end_minute
        }
    } else {
        period.end_minute.saturating_sub(now)
    }
}

/// Minutes since the period started.
pub fn elapsed_minutes(period: &ActivePeriod, now: u16) -> u16 {
    if period.crosses_midnight() {
        if now < period.end_minute {
            MINUTES_PER_DAY - period.start_minute + now
        } else {
            now - period.start_minute
        }
    } else {
        now.saturating_sub(period.start_minute)
    }
}

/// Completion percentage clamped to `[0, 100]`.
///
/// A degenerate period (`duration == 0`) reports 0% instead of dividing.
pub fn progress_percent(period: &ActivePeriod, now: u16) -> f64 {
    let duration = duration_minutes(period);
    if duration == 0 {
        return 0.0;
    }
    let elapsed = elapsed_minutes(period, now);
    (f64::from(elapsed) / f64::from(duration) * 100.0).clamp(0.0, 100.0)
}

/// Bundles a matched period with its derived figures for the view.
pub fn status(period: ActivePeriod, now: u16) -> PeriodStatus {
    let remaining = RemainingTime::from_minutes(remaining_minutes(&period, now));
    let progress_percent = progress_percent(&period, now);
    PeriodStatus {
        period,
        remaining,
        progress_percent,
    }
}
