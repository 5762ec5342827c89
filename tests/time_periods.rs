#![forbid(unsafe_code)]
use planning::{Day, ErrorKind, RosterError, Time, TimePeriod};

#[test]
fn time_parses_strict_two_digit_form() {
    assert_eq!(Time::parse("09:30").unwrap().to_string(), "09:30");
    assert_eq!(Time::parse("00:00").unwrap().to_string(), "00:00");
    assert_eq!(Time::parse("23:59").unwrap().to_string(), "23:59");
}

#[test]
fn time_rejects_malformed_text() {
    for bad in ["9:30", "09:3", "0930", "ab:cd", "09-30", "", " 09:30", "09:30 ", "009:30"] {
        let err = Time::parse(bad).unwrap_err();
        assert!(matches!(err, RosterError::InvalidTimeFormat(_)), "{bad}");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}

#[test]
fn time_rejects_out_of_range_values() {
    // forme correcte, cadran impossible
    for bad in ["24:00", "25:10", "09:60", "99:99"] {
        let err = Time::parse(bad).unwrap_err();
        assert!(matches!(err, RosterError::InvalidTime(_)), "{bad}");
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}

#[test]
fn time_orders_within_the_day() {
    let a = Time::parse("08:00").unwrap();
    let b = Time::parse("08:01").unwrap();
    assert!(a.is_before(b));
    assert!(!b.is_before(a));
    assert!(!a.is_before(a));
    assert!(a < b);
}

#[test]
fn day_parses_exact_names_only() {
    assert_eq!(Day::parse("Monday").unwrap(), Day::Monday);
    assert_eq!(Day::parse("Sunday").unwrap(), Day::Sunday);
    for bad in ["monday", "MONDAY", "Mon", "Funday", ""] {
        assert!(matches!(Day::parse(bad), Err(RosterError::InvalidDay(_))), "{bad}");
    }
}

#[test]
fn period_requires_strictly_increasing_bounds() {
    assert!(TimePeriod::parse("Monday", "09:00", "17:00").is_ok());

    let same = TimePeriod::parse("Monday", "09:00", "09:00").unwrap_err();
    assert!(matches!(same, RosterError::InvalidRange { .. }));

    let backwards = TimePeriod::parse("Monday", "17:00", "09:00").unwrap_err();
    assert!(matches!(backwards, RosterError::InvalidRange { .. }));
    assert_eq!(backwards.kind(), ErrorKind::InvalidInput);
}

#[test]
fn period_parse_reports_day_before_times() {
    let err = TimePeriod::parse("Birthday", "xx", "17:00").unwrap_err();
    assert!(matches!(err, RosterError::InvalidDay(_)));
}

#[test]
fn overlap_is_symmetric_and_open() {
    let a = period("Monday", "09:00", "12:00");
    let b = period("Monday", "11:00", "14:00");
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));

    // bornes partagées : pas de chevauchement
    let c = period("Monday", "12:00", "14:00");
    assert!(!a.overlaps(&c));
    assert!(!c.overlaps(&a));
}

#[test]
fn overlap_never_crosses_days() {
    let a = period("Monday", "09:00", "12:00");
    let b = period("Tuesday", "09:00", "12:00");
    assert!(!a.overlaps(&b));
    assert!(!a.is_within(&b));
    assert!(!b.is_within(&a));
}

#[test]
fn containment_is_closed() {
    let hours = period("Monday", "09:00", "17:00");
    assert!(period("Monday", "09:00", "17:00").is_within(&hours));
    assert!(period("Monday", "10:00", "11:00").is_within(&hours));
    assert!(!period("Monday", "08:59", "12:00").is_within(&hours));
    assert!(!period("Monday", "10:00", "17:01").is_within(&hours));
}

#[test]
fn containment_implies_no_overlap_outside() {
    let inner = period("Monday", "10:00", "11:00");
    let outer = period("Monday", "09:00", "17:00");
    assert!(inner.is_within(&outer));

    let before = period("Monday", "09:00", "10:00");
    let after = period("Monday", "11:00", "12:00");
    assert!(!inner.overlaps(&before));
    assert!(!inner.overlaps(&after));
}

#[test]
fn periods_sort_by_day_then_start() {
    let mut periods = vec![
        period("Sunday", "08:00", "09:00"),
        period("Monday", "12:00", "13:00"),
        period("Monday", "09:00", "10:00"),
        period("Friday", "07:00", "08:00"),
    ];
    periods.sort();

    let printed: Vec<String> = periods.iter().map(|p| p.to_string()).collect();
    assert_eq!(
        printed,
        [
            "Monday[09:00-10:00]",
            "Monday[12:00-13:00]",
            "Friday[07:00-08:00]",
            "Sunday[08:00-09:00]",
        ]
    );
}

#[test]
fn period_displays_day_and_hours_forms() {
    let p = period("Wednesday", "08:30", "14:05");
    assert_eq!(p.to_string(), "Wednesday[08:30-14:05]");
    assert_eq!(p.hours(), "08:30-14:05");
}

fn period(day: &str, start: &str, end: &str) -> TimePeriod {
    TimePeriod::parse(day, start, end).unwrap()
}
