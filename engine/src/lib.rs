//! Live period-resolution engine for daily muhurat schedules.
//!
//! A muhurat schedule is an ordered list of named time intervals
//! (auspicious or inauspicious periods) covering one calendar day. Given
//! such a schedule and the current wall-clock time, this crate determines
//! which interval is active, how much of it remains, what fraction has
//! elapsed, and which interval comes next — including intervals that
//! cross local midnight.
//!
//! The crate is split into pure resolution services and a thin async
//! driver around them:
//!
//! - [`core`]: the schedule snapshot model and the derived view types
//! - [`parsing`]: clock-label normalization and JSON snapshot ingestion
//! - [`services`]: matching, progress, and next-period resolution
//! - [`driver`]: a cancellable once-per-second resolution loop
//! - [`store`]: a pluggable persisted view-state interface
//!
//! Resolution itself is synchronous and side-effect free; all timing and
//! publication concerns live in [`driver`].

pub mod core;
pub mod driver;
pub mod parsing;
pub mod services;
pub mod store;
pub mod time;

pub use crate::core::domain::{CombinedRow, DaySchedule, ScheduleRow, SplitRow, SubSlot};
pub use crate::core::view::{
    ActivePeriod, LiveView, NextPreview, PeriodStatus, RemainingTime, ResolvedView,
};
pub use crate::driver::{DriverConfig, LiveDriver, LiveHandle};
pub use crate::services::resolution::{resolve_at, resolve_view};
pub use crate::time::{Clock, SystemClock};
