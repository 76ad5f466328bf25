//! Wall-clock helpers and the injectable clock abstraction.

use chrono::{Local, NaiveDateTime, Timelike};

/// Minutes in one calendar day; all minute-of-day values lie below this.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Minute-of-day of a local timestamp, `[0, 1440)`. Seconds are
/// truncated; the schedule's resolution is whole minutes.
pub fn minute_of(at: &NaiveDateTime) -> u16 {
    (at.hour() * 60 + at.minute()) as u16
}

/// Formats a minute-of-day back into the schedule's `"H:MM AM|PM"`
/// label form, for consumers rendering derived boundaries.
pub fn format_minute(minute: u16) -> String {
    let minute = minute % MINUTES_PER_DAY;
    let (h24, m) = (minute / 60, minute % 60);
    let meridiem = if h24 < 12 { "AM" } else { "PM" };
    let hour = match h24 % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour}:{m:02} {meridiem}")
}

/// Source of the current local date and time.
///
/// The driver samples this afresh on every tick. Production code uses
/// [`SystemClock`]; tests substitute a fixed or scripted clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// System clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
