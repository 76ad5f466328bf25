//! Next-period resolution.

use crate::core::domain::{DaySchedule, ScheduleRow, SubSlot};
use crate::core::view::{ActivePeriod, NextPreview};
use crate::parsing::clock::minute_of_day;

/// Resolves the chronologically next sub-interval as a display preview.
///
/// With an active period: a split row's first block advances to its
/// second; anything else advances to the next row's first sub-interval,
/// wrapping from the last row back to row 0 (tomorrow's first period).
/// Combined rows have only one block, so they always advance to the next
/// row.
///
/// With no active period: the first sub-interval whose parseable start
/// lies strictly after `now`, in row order; if the day has no further
/// period, wraps to the first row.
///
/// Returns `None` only for an empty schedule.
pub fn next_preview(
    schedule: &DaySchedule,
    active: Option<&ActivePeriod>,
    now: u16,
) -> Option<NextPreview> {
    if schedule.rows.is_empty() {
        return None;
    }

    match active {
        Some(period) => {
            if period.slot == Some(SubSlot::First) {
                if let Some(row @ ScheduleRow::Split(_)) = schedule.rows.get(period.row_index) {
                    return Some(preview(row, Some(SubSlot::Second)));
                }
            }
            let next_index = (period.row_index + 1) % schedule.rows.len();
            Some(preview(&schedule.rows[next_index], Some(SubSlot::First)))
        }
        None => {
            for row in &schedule.rows {
                for (_, start_label, _) in row.slot_bounds() {
                    match minute_of_day(start_label) {
                        Some(start) if start > now => {
                            return Some(NextPreview {
                                label: row.label().to_string(),
                                start_label: start_label.to_string(),
                            });
                        }
                        _ => {}
                    }
                }
            }
            Some(preview(&schedule.rows[0], Some(SubSlot::First)))
        }
    }
}

fn preview(row: &ScheduleRow, slot: Option<SubSlot>) -> NextPreview {
    NextPreview {
        label: row.label().to_string(),
        start_label: row.start_label(slot).to_string(),
    }
}
