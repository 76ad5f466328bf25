//! JSON schedule snapshot ingestion.
//!
//! The backend API returns the day's muhurat table as a JSON array whose
//! objects are in one of the two row shapes. Serde's untagged
//! deserialization fixes each row's variant here, once; nothing later in
//! the pipeline re-inspects the raw shape.

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::domain::ScheduleRow;

/// Parses a JSON array of schedule rows.
///
/// Split rows are recognized by their four discrete boundary fields,
/// combined rows by their single `"time"` window. A row matching neither
/// shape fails the whole parse; boundary *values* are not validated here
/// (unparseable clock labels are handled at match time).
pub fn parse_schedule_json_str(json: &str) -> Result<Vec<ScheduleRow>> {
    let rows: Vec<ScheduleRow> =
        serde_json::from_str(json).context("invalid schedule snapshot JSON")?;
    Ok(rows)
}

/// Reads and parses a schedule snapshot from a JSON file.
pub fn parse_schedule_json(path: &Path) -> Result<Vec<ScheduleRow>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schedule file: {}", path.display()))?;
    parse_schedule_json_str(&contents)
}
