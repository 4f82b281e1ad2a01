use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::fmt;
use std::time::SystemTime;
use thiserror::Error;
use tracing::debug;

/// Largest distance from the epoch, in milliseconds, accepted for numeric input.
pub const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M%#z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid date input: {input}")]
pub struct InvalidInputError {
    pub input: String,
}

/// Anything that can be turned into an absolute instant.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Instant(DateTime<Utc>),
    /// Integer milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// Milliseconds since the Unix epoch; may be fractional or non-finite.
    Millis(f64),
    Text(String),
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::Instant(dt) => write!(f, "{}", dt.to_rfc3339()),
            DateInput::EpochMillis(ms) => write!(f, "{ms}"),
            DateInput::Millis(ms) if ms.is_infinite() => {
                f.write_str(if *ms > 0.0 { "Infinity" } else { "-Infinity" })
            }
            DateInput::Millis(ms) => write!(f, "{ms}"),
            DateInput::Text(s) => f.write_str(s),
        }
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        DateInput::Instant(dt)
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        DateInput::Instant(dt.with_timezone(&Utc))
    }
}

impl From<SystemTime> for DateInput {
    fn from(t: SystemTime) -> Self {
        DateInput::Instant(DateTime::<Utc>::from(t))
    }
}

impl From<i64> for DateInput {
    fn from(ms: i64) -> Self {
        DateInput::EpochMillis(ms)
    }
}

impl From<f64> for DateInput {
    fn from(ms: f64) -> Self {
        DateInput::Millis(ms)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

/// Resolve an input to an absolute UTC instant.
pub fn normalize(input: &DateInput) -> Result<DateTime<Utc>, InvalidInputError> {
    let parsed = match input {
        DateInput::Instant(dt) => return Ok(*dt),
        DateInput::EpochMillis(ms) => from_epoch_millis(*ms),
        DateInput::Millis(ms) => from_millis(*ms),
        DateInput::Text(s) => parse_text(s),
    };

    parsed.ok_or_else(|| {
        debug!(input = %input, "Rejected date input");
        InvalidInputError {
            input: input.to_string(),
        }
    })
}

pub fn is_valid_input(input: &DateInput) -> bool {
    normalize(input).is_ok()
}

fn from_epoch_millis(ms: i64) -> Option<DateTime<Utc>> {
    if ms.unsigned_abs() > MAX_EPOCH_MILLIS.unsigned_abs() {
        return None;
    }
    DateTime::from_timestamp_millis(ms)
}

fn from_millis(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() || ms.abs() > MAX_EPOCH_MILLIS as f64 {
        return None;
    }
    // Fractional milliseconds truncate toward zero; the cast is exact within the range above.
    from_epoch_millis(ms.trunc() as i64)
}

fn parse_text(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    // A trailing `Z` on a reduced-precision time is plain UTC.
    let s = s.strip_suffix(['Z', 'z']).unwrap_or(s);

    // Offset-less forms are read as UTC so results don't depend on the host zone.
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }

    parse_calendar_date(s).map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`, each meaning the first day of the period.
fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }

    let (year, month) = match s.split_once('-') {
        Some((year, month)) => (year, month),
        None => (s, "01"),
    };
    let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if year.len() != 4 || month.len() != 2 || !is_digits(year) || !is_digits(month) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}
