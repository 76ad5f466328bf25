//! Clock-label normalization.

use crate::time::MINUTES_PER_DAY;

/// Parses a `"H:MM AM|PM"` clock label into minutes since local midnight.
///
/// Accepted inputs are exactly two whitespace-separated tokens: a
/// `hour:minute` pair (no leading zero required) and a case-insensitive
/// meridiem. `12 AM` maps to 0 and `12 PM` to 720; PM adds twelve hours
/// to 1–11.
///
/// Returns `None` for anything else — wrong token count, non-numeric
/// parts, hour outside 1–12, minute above 59, empty or whitespace-only
/// input. Never panics.
pub fn minute_of_day(label: &str) -> Option<u16> {
    let mut tokens = label.split_whitespace();
    let clock = tokens.next()?;
    let meridiem = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }

    let pm = if meridiem.eq_ignore_ascii_case("PM") {
        true
    } else if meridiem.eq_ignore_ascii_case("AM") {
        false
    } else {
        return None;
    };

    let (hour_text, minute_text) = clock.split_once(':')?;
    let hour: u16 = hour_text.parse().ok()?;
    let minute: u16 = minute_text.parse().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    let hour = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    let total = hour * 60 + minute;
    debug_assert!(total < MINUTES_PER_DAY);
    Some(total)
}
