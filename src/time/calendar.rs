use chrono::{DateTime, Datelike, NaiveTime, Utc};

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format an instant as `"Mon D"` or `"Mon D, YYYY"`.
///
/// Always reads UTC calendar fields, so a timestamp stored as UTC midnight
/// renders the same day on every host.
pub fn format_date(dt: &DateTime<Utc>, include_year: bool) -> String {
    let month = MONTH_NAMES[dt.month0() as usize];
    let day = dt.day();

    if include_year {
        return format!("{} {}, {}", month, day, dt.year());
    }

    format!("{} {}", month, day)
}

pub fn is_same_year(a: &DateTime<Utc>, b: &DateTime<Utc>) -> bool {
    a.year() == b.year()
}

/// UTC midnight of the day containing `dt`.
pub fn start_of_day(dt: &DateTime<Utc>) -> DateTime<Utc> {
    dt.date_naive().and_time(NaiveTime::MIN).and_utc()
}
