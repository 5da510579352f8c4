use rshiftchart::errors::AppError;
use rshiftchart::utils::time::{
    ShiftWindow, bucket_of, format_minutes, format_minutes_12h, is_within_window,
    parse_time_to_minutes,
};

#[test]
fn test_parse_valid_times() {
    assert_eq!(parse_time_to_minutes("00:00").unwrap(), 0);
    assert_eq!(parse_time_to_minutes("08:00").unwrap(), 480);
    assert_eq!(parse_time_to_minutes("9:05").unwrap(), 545);
    assert_eq!(parse_time_to_minutes(" 23:59 ").unwrap(), 1439);
}

#[test]
fn test_parse_twelve_hour_labels() {
    assert_eq!(parse_time_to_minutes("12:00 AM").unwrap(), 0);
    assert_eq!(parse_time_to_minutes("12:30 PM").unwrap(), 750);
    assert_eq!(parse_time_to_minutes("3:05 PM").unwrap(), 905);
    assert_eq!(parse_time_to_minutes("11:55 PM").unwrap(), 1435);
    assert!(matches!(
        parse_time_to_minutes("13:00 PM"),
        Err(AppError::TimeOutOfRange(_))
    ));
    assert!(matches!(
        parse_time_to_minutes("0:10 AM"),
        Err(AppError::TimeOutOfRange(_))
    ));
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        parse_time_to_minutes("25:00"),
        Err(AppError::TimeOutOfRange(_))
    ));
    assert!(matches!(
        parse_time_to_minutes("12:60"),
        Err(AppError::TimeOutOfRange(_))
    ));
    assert!(matches!(
        parse_time_to_minutes(""),
        Err(AppError::EmptyTimeString)
    ));
    assert!(matches!(
        parse_time_to_minutes("   "),
        Err(AppError::EmptyTimeString)
    ));
    assert!(matches!(
        parse_time_to_minutes("9:5:3"),
        Err(AppError::InvalidTimeFormat(_))
    ));
    assert!(matches!(
        parse_time_to_minutes("0800"),
        Err(AppError::InvalidTimeFormat(_))
    ));
    assert!(matches!(
        parse_time_to_minutes("ab:cd"),
        Err(AppError::InvalidTimeFormat(_))
    ));
}

#[test]
fn test_parse_rejects_signs_and_non_digits() {
    for input in ["+8:00", "8:+05", "-1:00", "08:-5", "8 0:00", "0x8:00", "08:5e"] {
        assert!(
            matches!(parse_time_to_minutes(input), Err(AppError::InvalidTimeFormat(_))),
            "{input:?} should be rejected as malformed"
        );
    }
    assert!(matches!(
        parse_time_to_minutes("+3:05 PM"),
        Err(AppError::InvalidTimeFormat(_))
    ));
}

#[test]
fn test_time_errors_are_client_errors() {
    for input in ["25:00", "", "9:5:3"] {
        let err = parse_time_to_minutes(input).unwrap_err();
        assert!(err.is_client_error(), "{input:?} should be a client error");
        assert!(err.for_field("startTime").is_client_error());
    }
}

#[test]
fn test_format_12_hour() {
    assert_eq!(format_minutes_12h(0), "12:00 AM");
    assert_eq!(format_minutes_12h(5), "12:05 AM");
    assert_eq!(format_minutes_12h(720), "12:00 PM");
    assert_eq!(format_minutes_12h(905), "3:05 PM");
    assert_eq!(format_minutes_12h(1439), "11:59 PM");
}

#[test]
fn test_format_wraps_out_of_range_values() {
    assert_eq!(format_minutes_12h(-5), "11:55 PM");
    assert_eq!(format_minutes_12h(1440), "12:00 AM");
    assert_eq!(format_minutes_12h(1445), "12:05 AM");
    assert_eq!(format_minutes_12h(1440 * 3 + 61), "1:01 AM");
}

#[test]
fn test_format_then_parse_recovers_every_minute() {
    for m in 0..1440 {
        let label = format_minutes_12h(m);
        assert_eq!(
            parse_time_to_minutes(&label).unwrap() as i64,
            m,
            "round trip failed for {label}"
        );
    }
}

#[test]
fn test_bucket_of() {
    assert_eq!(bucket_of(480), 480);
    assert_eq!(bucket_of(484), 480);
    assert_eq!(bucket_of(487), 485);
    assert_eq!(bucket_of(1439), 1435);
    // across midnight on the continuous axis
    assert_eq!(bucket_of(1443), 1440);
    assert_eq!(format_minutes_12h(bucket_of(1443)), "12:00 AM");
}

#[test]
fn test_is_within_window() {
    assert!(is_within_window(600, 720, 600));
    assert!(is_within_window(600, 720, 720));
    assert!(!is_within_window(600, 720, 725));
    assert!(!is_within_window(600, 720, 595));

    // overnight
    assert!(is_within_window(1380, 40, 1400));
    assert!(is_within_window(1380, 40, 0));
    assert!(is_within_window(1380, 40, 40));
    assert!(!is_within_window(1380, 40, 45));
    assert!(!is_within_window(1380, 40, 1375));
}

#[test]
fn test_shift_window_resolution() {
    let day = ShiftWindow::parse("08:00", "16:00").unwrap();
    assert!(!day.overnight);
    assert_eq!(day.length_minutes(), 480);

    let night = ShiftWindow::parse("22:00", "02:00").unwrap();
    assert!(night.overnight);
    assert_eq!(night.start, 1320);
    assert_eq!(night.end, 1680);

    let zero = ShiftWindow::parse("08:00", "08:00").unwrap();
    assert!(!zero.overnight);
    assert_eq!(zero.steps().count(), 1);
}

#[test]
fn test_shift_window_reports_field() {
    let err = ShiftWindow::parse("08:00", "24:10").unwrap_err();
    match err {
        AppError::Field { field, source } => {
            assert_eq!(field, "endTime");
            assert!(matches!(*source, AppError::TimeOutOfRange(_)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_format_minutes_duration() {
    assert_eq!(format_minutes(480), "08:00");
    assert_eq!(format_minutes(-45), "-00:45");
}
