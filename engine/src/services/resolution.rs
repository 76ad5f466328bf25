//! One-tick resolution: matcher + progress + next-period in one pass.

use chrono::NaiveDateTime;

use crate::core::domain::DaySchedule;
use crate::core::view::ResolvedView;
use crate::services::{matcher, progress, upcoming};
use crate::time::minute_of;

/// Resolves the full display view for a given minute-of-day.
///
/// Pure and deterministic: identical inputs yield identical views. An
/// empty schedule resolves to a view with no status and no preview.
pub fn resolve_view(schedule: &DaySchedule, now: u16) -> ResolvedView {
    let active = matcher::find_active(schedule, now);
    let next = upcoming::next_preview(schedule, active.as_ref(), now);
    let status = active.map(|period| progress::status(period, now));
    ResolvedView {
        status,
        next,
        minute_of_day: now,
    }
}

/// Resolves the view for a local timestamp.
pub fn resolve_at(schedule: &DaySchedule, at: &NaiveDateTime) -> ResolvedView {
    resolve_view(schedule, minute_of(at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::{CombinedRow, ScheduleRow};
    use chrono::NaiveDate;

    fn combined(label: &str, window: &str) -> ScheduleRow {
        ScheduleRow::Combined(CombinedRow {
            label: label.to_string(),
            window: window.to_string(),
        })
    }

    fn schedule(rows: Vec<ScheduleRow>) -> DaySchedule {
        DaySchedule::new(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(), rows)
    }

    #[test]
    fn test_active_view_carries_status_and_preview() {
        let sched = schedule(vec![
            combined("Morning", "09:00 AM to 10:00 AM"),
            combined("Noon", "12:00 PM to 01:00 PM"),
        ]);
        let view = resolve_view(&sched, 570);
        let status = view.status.unwrap();
        assert_eq!(status.period.label, "Morning");
        assert_eq!(status.remaining.total_minutes, 30);
        assert_eq!(status.progress_percent, 50.0);
        assert_eq!(view.next.unwrap().label, "Noon");
    }

    #[test]
    fn test_idle_view_still_previews_upcoming() {
        let sched = schedule(vec![combined("Noon", "12:00 PM to 01:00 PM")]);
        let view = resolve_view(&sched, 600);
        assert!(view.status.is_none());
        assert_eq!(view.next.unwrap().label, "Noon");
    }

    #[test]
    fn test_empty_schedule_view() {
        let view = resolve_view(&schedule(vec![]), 600);
        assert!(view.status.is_none());
        assert!(view.next.is_none());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let sched = schedule(vec![combined("Morning", "09:00 AM to 10:00 AM")]);
        assert_eq!(resolve_view(&sched, 570), resolve_view(&sched, 570));
        assert_eq!(resolve_view(&sched, 0), resolve_view(&sched, 0));
    }

    #[test]
    fn test_resolve_at_uses_minute_of_day() {
        let sched = schedule(vec![combined("Morning", "09:00 AM to 10:00 AM")]);
        let at = NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(9, 30, 42)
            .unwrap();
        let view = resolve_at(&sched, &at);
        assert_eq!(view.minute_of_day, 570);
        assert!(view.status.is_some());
    }
}
