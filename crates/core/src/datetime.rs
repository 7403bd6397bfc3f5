//! Parsing and display of session date/times.
//!
//! Forms submit either RFC 3339 timestamps or the offset-less
//! `datetime-local` shape (`2026-10-16T14:30`), which is read in the
//! local time zone.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

use crate::types::Timestamp;

/// Offset-less layouts accepted in addition to RFC 3339.
const LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Display layout for date/times, matching the short `pt-BR` form.
const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M";

/// Parse a date/time as typed in a form or stored by the backend.
///
/// Returns `None` for blank or malformed input, and for local times that
/// do not exist (skipped by a DST transition).
pub fn parse_date_time(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
}

/// Format a stored date/time for display in local time.
///
/// Unparsable values are shown as they are.
pub fn format_date_time(raw: &str) -> String {
    match parse_date_time(raw) {
        Some(ts) => ts.with_timezone(&Local).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}
