//! Calendar dates for timeslots
//!
//! [`DateZone`] decides how a slot start is rendered and how date strings
//! without an explicit offset are interpreted. [`DateParser`] is the
//! capability the `time` command uses to turn free-form text into a Unix
//! timestamp; [`ChronoDateParser`] is the default implementation.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Time zone used for rendering and for naive date strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateZone {
    /// The host's local time zone
    #[default]
    Local,
    Utc,
}

impl DateZone {
    /// Render a Unix timestamp as `YYYY-MM-DD HH:MM:SS <zone>`.
    pub fn format_unix(self, unix_time: i64) -> String {
        let Some(utc) = DateTime::<Utc>::from_timestamp(unix_time, 0) else {
            return format!("@{}", unix_time);
        };
        match self {
            DateZone::Utc => utc.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            DateZone::Local => utc
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S %:z")
                .to_string(),
        }
    }

    /// Interpret a wall-clock date-time in this zone.
    ///
    /// Returns `None` for local times skipped by a DST transition; ambiguous
    /// local times resolve to the earlier instant.
    fn resolve(self, naive: NaiveDateTime) -> Option<i64> {
        match self {
            DateZone::Utc => Some(naive.and_utc().timestamp()),
            DateZone::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.timestamp()),
        }
    }
}

/// Maps a textual date to Unix seconds, floored to whole seconds.
pub trait DateParser {
    fn parse_unix(&self, text: &str) -> Option<i64>;
}

// Naive forms tried after the offset-carrying formats. `%.f` also matches an
// absent fraction.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%B %d %Y %H:%M",
];

// ISO calendar dates name a UTC day regardless of the configured zone
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// `%B` also accepts the abbreviated month name when parsing
const MONTH_NAME_DATE_FORMATS: &[&str] = &["%B %d, %Y", "%B %d %Y"];

/// Date parser built on chrono.
///
/// Accepted inputs, tried in order:
/// - RFC 3339, e.g. `2025-01-01T12:00:00Z` or `2025-01-01T13:00:00+01:00`
/// - RFC 2822, e.g. `Wed, 01 Jan 2025 12:00:00 +0000`
/// - `YYYY-MM-DD HH:MM:SS[.fff]`, `YYYY-MM-DDTHH:MM:SS[.fff]`
/// - `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM`
/// - `January 1, 2025 12:00[:00]`, `Jan 1 2025 12:00[:00]`
/// - `YYYY-MM-DD` (midnight UTC)
/// - `January 1, 2025`, `Jan 1 2025` (midnight)
///
/// Other forms without an offset are read in the parser's [`DateZone`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoDateParser {
    zone: DateZone,
}

impl ChronoDateParser {
    pub fn new(zone: DateZone) -> Self {
        Self { zone }
    }
}

impl DateParser for ChronoDateParser {
    fn parse_unix(&self, text: &str) -> Option<i64> {
        // timestamp() floors sub-second precision toward the slot start
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(dt.timestamp());
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
            return Some(dt.timestamp());
        }
        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
                return self.zone.resolve(naive);
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, ISO_DATE_FORMAT) {
            return DateZone::Utc.resolve(date.and_hms_opt(0, 0, 0)?);
        }
        for format in MONTH_NAME_DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(text, format) {
                return self.zone.resolve(date.and_hms_opt(0, 0, 0)?);
            }
        }
        None
    }
}
