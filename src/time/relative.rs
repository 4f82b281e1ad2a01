use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::trace;

use super::calendar::{format_date, is_same_year, start_of_day};
use super::elapsed::diff;
use super::input::{DateInput, InvalidInputError, normalize};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Failed to format time: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Source of the reference instant when none is given explicitly.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Instant to measure against. `None` means the clock is read per call.
    pub reference_date: Option<DateTime<Utc>>,
    /// Render future instants as `"in 5m"` instead of a calendar date.
    pub include_future: bool,
}

impl FormatOptions {
    pub fn with_reference_date(self, reference_date: DateTime<Utc>) -> Self {
        Self {
            reference_date: Some(reference_date),
            ..self
        }
    }

    pub fn with_future(self, include_future: bool) -> Self {
        Self {
            include_future,
            ..self
        }
    }
}

/// Format a timestamp as a human-readable relative time string.
pub fn format_relative_time(
    input: impl Into<DateInput>,
    options: &FormatOptions,
) -> Result<String, FormatError> {
    format_relative_time_with_clock(input, options, &SystemClock)
}

pub fn format_relative_time_with_clock(
    input: impl Into<DateInput>,
    options: &FormatOptions,
    clock: &impl Clock,
) -> Result<String, FormatError> {
    let date = normalize(&input.into())?;
    let reference = options.reference_date.unwrap_or_else(|| clock.now());
    let elapsed = diff(&date, &reference);

    if elapsed.is_future() {
        if options.include_future {
            return Ok(format_future(elapsed.seconds.unsigned_abs()));
        }
        trace!(ms = elapsed.milliseconds, "Future instant, using date");
        return Ok(format_date(&date, !is_same_year(&date, &reference)));
    }

    if elapsed.seconds < 1 {
        return Ok("Just now".to_string());
    }

    if elapsed.seconds < 60 {
        return Ok(format!("{}s ago", elapsed.seconds));
    }

    if elapsed.minutes < 60 {
        return Ok(format!("{}m ago", elapsed.minutes));
    }

    if elapsed.hours < 24 {
        return Ok(format!("{}h ago", elapsed.hours));
    }

    // Compare calendar days, not raw hours, once a full day has passed.
    let include_year = !is_same_year(&start_of_day(&date), &start_of_day(&reference));
    trace!(hours = elapsed.hours, include_year, "Falling back to date");
    Ok(format_date(&date, include_year))
}

fn format_future(seconds: u64) -> String {
    if seconds < 60 {
        return format!("in {}s", seconds);
    }

    if seconds < 3_600 {
        return format!("in {}m", seconds / 60);
    }

    if seconds < 86_400 {
        return format!("in {}h", seconds / 3_600);
    }

    format!("in {}d", seconds / 86_400)
}
