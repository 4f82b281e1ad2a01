use chrono::{FixedOffset, TimeZone, Utc};
use reltime::time::{DateInput, is_valid_input, normalize};
use std::time::{Duration, UNIX_EPOCH};

#[test]
fn test_instant_passes_through() {
    let dt = Utc.with_ymd_and_hms(2025, 5, 30, 12, 0, 0).unwrap();
    assert_eq!(normalize(&DateInput::from(dt)).unwrap(), dt);
}

#[test]
fn test_offset_instant_converted_to_utc() {
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let dt = offset.with_ymd_and_hms(2025, 5, 30, 14, 0, 0).unwrap();
    let expected = Utc.with_ymd_and_hms(2025, 5, 30, 12, 0, 0).unwrap();
    assert_eq!(normalize(&DateInput::from(dt)).unwrap(), expected);
}

#[test]
fn test_system_time() {
    let t = UNIX_EPOCH + Duration::from_secs(86_400);
    let expected = Utc.with_ymd_and_hms(1970, 1, 2, 0, 0, 0).unwrap();
    assert_eq!(normalize(&DateInput::from(t)).unwrap(), expected);
}

#[test]
fn test_epoch_millis() {
    let dt = normalize(&DateInput::from(1_748_606_400_000i64)).unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2025, 5, 30, 12, 0, 0).unwrap());
}

#[test]
fn test_negative_epoch_millis() {
    let dt = normalize(&DateInput::from(-86_400_000i64)).unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(1969, 12, 31, 0, 0, 0).unwrap());
}

#[test]
fn test_fractional_millis_truncate() {
    let dt = normalize(&DateInput::from(1_500.9f64)).unwrap();
    assert_eq!(dt.timestamp_millis(), 1_500);
}

#[test]
fn test_non_finite_millis_rejected() {
    assert!(normalize(&DateInput::from(f64::NAN)).is_err());
    assert!(normalize(&DateInput::from(f64::INFINITY)).is_err());
    assert!(normalize(&DateInput::from(f64::NEG_INFINITY)).is_err());
}

#[test]
fn test_out_of_range_millis_rejected() {
    assert!(normalize(&DateInput::from(8.64e15 + 1.0)).is_err());
    assert!(normalize(&DateInput::from(i64::MAX)).is_err());
}

#[test]
fn test_rfc3339_text() {
    let dt = normalize(&DateInput::from("2025-05-30T12:00:00Z")).unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2025, 5, 30, 12, 0, 0).unwrap());

    let dt = normalize(&DateInput::from("2025-05-30T12:00:00.250Z")).unwrap();
    assert_eq!(dt.timestamp_millis() % 1_000, 250);

    let dt = normalize(&DateInput::from("2025-05-30T14:00:00+02:00")).unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2025, 5, 30, 12, 0, 0).unwrap());
}

#[test]
fn test_rfc2822_text() {
    let dt = normalize(&DateInput::from("Fri, 30 May 2025 12:00:00 +0000")).unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2025, 5, 30, 12, 0, 0).unwrap());
}

#[test]
fn test_naive_text_is_utc() {
    let expected = Utc.with_ymd_and_hms(2025, 5, 30, 12, 0, 0).unwrap();
    assert_eq!(normalize(&DateInput::from("2025-05-30T12:00:00")).unwrap(), expected);
    assert_eq!(normalize(&DateInput::from("2025-05-30 12:00:00")).unwrap(), expected);
    assert_eq!(normalize(&DateInput::from("2025-05-30T12:00")).unwrap(), expected);
}

#[test]
fn test_date_only_is_utc_midnight() {
    let dt = normalize(&DateInput::from("2024-02-01")).unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
}

#[test]
fn test_reduced_precision_dates() {
    assert_eq!(
        normalize(&DateInput::from("2024")).unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(
        normalize(&DateInput::from("2024-03")).unwrap(),
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
    );
    assert!(normalize(&DateInput::from("2024-13")).is_err());
    assert!(normalize(&DateInput::from("24")).is_err());
}

#[test]
fn test_minute_precision_with_zone() {
    let expected = Utc.with_ymd_and_hms(2025, 5, 30, 12, 0, 0).unwrap();
    assert_eq!(normalize(&DateInput::from("2025-05-30T12:00Z")).unwrap(), expected);
    assert_eq!(
        normalize(&DateInput::from("2025-05-30T14:00+02:00")).unwrap(),
        expected
    );
}

#[test]
fn test_basic_format_offset() {
    let expected = Utc.with_ymd_and_hms(2025, 5, 30, 10, 0, 0).unwrap();
    assert_eq!(
        normalize(&DateInput::from("2025-05-30T12:00:00+0200")).unwrap(),
        expected
    );
    assert_eq!(
        normalize(&DateInput::from("2025-05-30T12:00:00.000+02:00")).unwrap(),
        expected
    );
    assert_eq!(
        normalize(&DateInput::from("2025-05-30T12:00+0200")).unwrap(),
        expected
    );
}

#[test]
fn test_surrounding_whitespace_ignored() {
    assert!(normalize(&DateInput::from("  2024-02-01\n")).is_ok());
}

#[test]
fn test_garbage_text_rejected() {
    let err = normalize(&DateInput::from("invalid-date")).unwrap_err();
    assert_eq!(err.input, "invalid-date");
    assert_eq!(err.to_string(), "Invalid date input: invalid-date");

    assert!(normalize(&DateInput::from("")).is_err());
    assert!(normalize(&DateInput::from("2024-13-01")).is_err());
    assert!(normalize(&DateInput::from("2023-02-29")).is_err());
}

#[test]
fn test_error_message_includes_number() {
    let err = normalize(&DateInput::from(f64::NAN)).unwrap_err();
    assert_eq!(err.to_string(), "Invalid date input: NaN");
}

#[test]
fn test_error_message_keeps_exact_integer() {
    let err = normalize(&DateInput::from(9_007_199_254_740_993i64)).unwrap_err();
    assert_eq!(err.input, "9007199254740993");
    assert_eq!(err.to_string(), "Invalid date input: 9007199254740993");

    let err = normalize(&DateInput::from(i64::MIN)).unwrap_err();
    assert_eq!(err.input, i64::MIN.to_string());
}

#[test]
fn test_error_message_for_infinity() {
    let err = normalize(&DateInput::from(f64::INFINITY)).unwrap_err();
    assert_eq!(err.to_string(), "Invalid date input: Infinity");
    let err = normalize(&DateInput::from(f64::NEG_INFINITY)).unwrap_err();
    assert_eq!(err.to_string(), "Invalid date input: -Infinity");
}

#[test]
fn test_epoch_range_limits() {
    assert!(normalize(&DateInput::from(8_000_000_000_000_000i64)).is_ok());
    assert!(normalize(&DateInput::from(-8_000_000_000_000_000i64)).is_ok());
    assert!(normalize(&DateInput::from(8_640_000_000_000_001i64)).is_err());
    assert!(normalize(&DateInput::from(-8_640_000_000_000_001i64)).is_err());
}

#[test]
fn test_is_valid_input() {
    assert!(is_valid_input(&DateInput::from("2024-02-29")));
    assert!(is_valid_input(&DateInput::from(0i64)));
    assert!(!is_valid_input(&DateInput::from("not a date")));
    assert!(!is_valid_input(&DateInput::from(f64::NAN)));
}
