//! Core data model: the schedule snapshot and the per-tick derived views.

pub mod domain;
pub mod view;

pub use domain::{CombinedRow, DaySchedule, ScheduleRow, SplitRow, SubSlot};
pub use view::{ActivePeriod, LiveView, NextPreview, PeriodStatus, RemainingTime, ResolvedView};
