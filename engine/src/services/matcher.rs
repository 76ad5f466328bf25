//! Active-period matching.

use crate::core::domain::DaySchedule;
use crate::core::view::ActivePeriod;
use crate::parsing::clock::minute_of_day;

/// Half-open containment test over minutes-of-day.
///
/// Ordinary intervals use `[start, end)`. When `end < start` the interval
/// crosses local midnight and containment becomes
/// `now >= start || now < end`.
pub fn contains(now: u16, start: u16, end: u16) -> bool {
    if end < start {
        now >= start || now < end
    } else {
        start <= now && now < end
    }
}

/// Finds the sub-interval containing `now`, scanning rows in schedule
/// order and a split row's first block before its second.
///
/// A sub-interval with an unparseable boundary label is disqualified
/// from matching; the scan continues with the remaining sub-intervals.
/// Overlaps are not validated away: the first match wins, which keeps
/// the result deterministic.
pub fn find_active(schedule: &DaySchedule, now: u16) -> Option<ActivePeriod> {
    for (row_index, row) in schedule.rows.iter().enumerate() {
        for (slot, start_label, end_label) in row.slot_bounds() {
            let (start, end) = match (minute_of_day(start_label), minute_of_day(end_label)) {
                (Some(s), Some(e)) => (s, e),
                _ => {
                    log::debug!(
                        "skipping sub-interval of '{}' (row {}): unparseable boundary '{}'..'{}'",
                        row.label(),
                        row_index,
                        start_label,
                        end_label
                    );
                    continue;
                }
            };
            if contains(now, start, end) {
                return Some(ActivePeriod {
                    row_index,
                    slot,
                    start_minute: start,
                    end_minute: end,
                    label: row.label().to_string(),
                });
            }
        }
    }
    None
}
