//! Parsers for schedule input data.
//!
//! - [`clock`]: normalize `"H:MM AM|PM"` clock labels to minutes-of-day
//! - [`json_parser`]: ingest a JSON schedule snapshot in either row shape
//!
//! Both parsers degrade instead of failing hard: a malformed clock label
//! yields an explicit absence, and only structurally invalid JSON is an
//! error.

pub mod clock;
pub mod json_parser;

#[cfg(test)]
mod clock_tests;

pub use clock::minute_of_day;
pub use json_parser::{parse_schedule_json, parse_schedule_json_str};
