use chrono::{DateTime, Utc};

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Signed distance from a subject instant to a reference instant.
///
/// Positive values mean the subject lies in the past. Every unit is floored
/// from the same millisecond delta, so `-1500ms` is `-2s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedDuration {
    pub milliseconds: i64,
    pub seconds: i64,
    pub minutes: i64,
    pub hours: i64,
    pub days: i64,
}

impl ElapsedDuration {
    pub fn from_millis(milliseconds: i64) -> Self {
        Self {
            milliseconds,
            seconds: milliseconds.div_euclid(MILLIS_PER_SECOND),
            minutes: milliseconds.div_euclid(MILLIS_PER_MINUTE),
            hours: milliseconds.div_euclid(MILLIS_PER_HOUR),
            days: milliseconds.div_euclid(MILLIS_PER_DAY),
        }
    }

    pub fn is_future(&self) -> bool {
        self.milliseconds < 0
    }
}

pub fn diff(subject: &DateTime<Utc>, reference: &DateTime<Utc>) -> ElapsedDuration {
    ElapsedDuration::from_millis(reference.timestamp_millis() - subject.timestamp_millis())
}
