// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for activity date/time handling.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats accepted for a zone-less activity timestamp, most specific first.
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Drop everything from the first `.` onward.
///
/// The server may return fractional seconds and a zone suffix
/// (`2024-01-01T10:00:00.000Z`); the cached form keeps only the text before
/// the dot (`2024-01-01T10:00:00`). Input without a dot is returned as is.
pub fn truncate_fraction(date: &str) -> &str {
    match date.find('.') {
        Some(idx) => &date[..idx],
        None => date,
    }
}

/// Parse an activity timestamp for ordering.
///
/// Accepts the truncated zone-less form, RFC3339 (converted to UTC), and a
/// bare date (midnight). Returns `None` for anything else.
pub fn parse_activity_date(date: &str) -> Option<NaiveDateTime> {
    let date = date.trim();

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(date, format) {
            return Some(parsed);
        }
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.naive_utc());
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
