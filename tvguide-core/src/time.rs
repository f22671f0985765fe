//! Timestamp handling for schedule entries and guide output.
//!
//! Guide timestamps are always rendered as `YYYYMMDDHHMMSS ±HHMM`. Schedule
//! sources hand us wall-clock strings in a handful of shapes; those without
//! a zone are read as local time at the channel's UTC offset.

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike, Utc,
};

use crate::error::CoreError;

/// XMLTV timestamp format.
pub const XMLTV_FORMAT: &str = "%Y%m%d%H%M%S %z";

/// XMLTV date-only format.
pub const XMLTV_DATE_FORMAT: &str = "%Y%m%d";

/// Zoned shapes. The instant is kept and re-expressed at the channel offset.
const ZONED_FORMATS: &[&str] = &["%Y%m%d%H%M%S %z", "%Y%m%d%H%M%S%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Zone-less shapes, read as wall-clock time at the channel offset.
const NAIVE_FORMATS: &[&str] = &[
    "%Y%m%d%H%M%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y%m%d%H%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d", "%Y/%m/%d", "%d %B %Y", "%B %d, %Y", "%b %d, %Y"];

/// The zero offset.
pub fn utc_offset() -> FixedOffset {
    Utc.fix()
}

/// Parse a channel UTC offset.
///
/// Accepts `±HHMM`, `±HH:MM`, `±HH`, `Z`, `UTC`, `GMT` and the empty string.
pub fn parse_offset(raw: &str) -> Result<FixedOffset, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || matches!(trimmed.to_ascii_uppercase().as_str(), "Z" | "UTC" | "GMT") {
        return Ok(utc_offset());
    }

    let (sign, rest) = if let Some(rest) = trimmed.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = trimmed.strip_prefix('-') {
        (-1, rest)
    } else {
        return Err(CoreError::invalid_offset(raw));
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::invalid_offset(raw));
    }

    let (hours, minutes) = match digits.len() {
        1 | 2 => (digits.parse::<i32>(), Ok(0)),
        4 => (digits[..2].parse::<i32>(), digits[2..].parse::<i32>()),
        _ => return Err(CoreError::invalid_offset(raw)),
    };
    let (hours, minutes) = match (hours, minutes) {
        (Ok(h), Ok(m)) if h <= 23 && m < 60 => (h, m),
        _ => return Err(CoreError::invalid_offset(raw)),
    };

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| CoreError::invalid_offset(raw))
}

/// Parse a raw schedule timestamp and pin it to `offset`.
pub fn parse_schedule_time(
    raw: &str,
    offset: FixedOffset,
) -> Result<DateTime<FixedOffset>, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::invalid_timestamp(raw));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&offset));
    }
    for fmt in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, fmt) {
            return Ok(dt.with_timezone(&offset));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return offset
                .from_local_datetime(&naive)
                .single()
                .ok_or_else(|| CoreError::invalid_timestamp(raw));
        }
    }

    Err(CoreError::invalid_timestamp(raw))
}

/// Parse a release date down to day granularity.
///
/// A bare year is read as January 1st of that year.
pub fn parse_release_date(raw: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = raw.trim();

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Ok(date);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(naive.date());
        }
    }
    if trimmed.len() == 4 {
        if let Some(date) = trimmed
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        {
            return Ok(date);
        }
    }

    Err(CoreError::invalid_date(raw))
}

/// Render a timestamp in XMLTV form (`20240101120000 -0500`).
pub fn format_xmltv(dt: &DateTime<FixedOffset>) -> String {
    dt.format(XMLTV_FORMAT).to_string()
}

/// Render a date in XMLTV form (`20240101`).
pub fn format_xmltv_date(date: &NaiveDate) -> String {
    date.format(XMLTV_DATE_FORMAT).to_string()
}

/// Truncate a timestamp to the start of its hour, keeping the offset.
pub fn top_of_hour(dt: &DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    dt.with_minute(0)?.with_second(0)?.with_nanosecond(0)
}

#[cfg(test)]
#[path = "tests/time_tests.rs"]
mod tests;
