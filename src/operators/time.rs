// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `_time`: closeness in time.
//!
//! Both sides parse as timestamps; the gap in seconds (millisecond precision) goes
//! through [`log_score`] against `max_time`. Anything that doesn't parse is bad data
//! and scores 0, on either side.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use tracing::trace;

use super::{operand_value, LeafScore};
use crate::error::Result;
use crate::scoring::log_score;
use crate::types::Leaf;

/// Naive layouts, tried after the offset-carrying ones. Read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (`2024-03-01T12:00:00+01:00`), the same without a colon in the
/// offset, naive date-times, and bare dates (midnight UTC).
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Seconds between two instants, ignoring direction.
pub fn seconds_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    (a - b).num_milliseconds().unsigned_abs() as f64 / 1000.0
}

pub fn time(value: Option<&Value>, leaf: &Leaf) -> Result<LeafScore> {
    let operand = operand_value(leaf)?;

    let Some(reference) = operand.as_str().and_then(parse_timestamp) else {
        trace!(field = %leaf.field, %operand, "operand is not a timestamp");
        return Ok(LeafScore::zero());
    };
    let Some(value) = value else {
        return Ok(LeafScore::zero());
    };
    let Some(instant) = value.as_str().and_then(parse_timestamp) else {
        trace!(field = %leaf.field, %value, "document value is not a timestamp");
        return Ok(LeafScore::zero());
    };

    let gap = seconds_between(instant, reference);
    Ok(LeafScore::of(log_score(gap, leaf.modifiers.max_time)))
}
