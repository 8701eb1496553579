use dayvec_calendar::{
    CalendarError, NaiveDate, add_days, dateify, day_sequence, days_diff, parse_iso_date,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn iso_roundtrip_full_leap_year() {
    for date in day_sequence(ymd(2012, 1, 1), 366) {
        let s = date.format("%Y-%m-%d").to_string();
        assert_eq!(
            parse_iso_date(&s).unwrap(),
            date,
            "roundtrip failed for {s}"
        );
    }
}

#[test]
fn add_days_inverts_days_diff() {
    let base = ymd(2013, 6, 2);
    for offset in [-800_i64, -31, -1, 0, 1, 29, 365, 1000] {
        let shifted = add_days(base, offset).unwrap();
        assert_eq!(
            days_diff(shifted, base),
            offset,
            "days_diff({shifted}, {base}) should be {offset}"
        );
    }
}

#[test]
fn sequence_matches_add_days() {
    let start = ymd(2013, 12, 25);
    let dates = day_sequence(start, 20);
    assert_eq!(dates.len(), 20);
    for (i, &d) in dates.iter().enumerate() {
        assert_eq!(d, add_days(start, i as i64).unwrap());
    }
}

#[test]
fn dateify_rejects_with_input_echoed() {
    let err = dateify("2013-06-31").unwrap_err();
    match err {
        CalendarError::InvalidIsoDate { input, .. } => assert_eq!(input, "2013-06-31"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn dateify_option_of_string() {
    let given: Option<String> = Some("2013-06-07".to_string());
    assert_eq!(dateify(given).unwrap(), Some(ymd(2013, 6, 7)));
    let absent: Option<String> = None;
    assert_eq!(dateify(absent).unwrap(), None);
}
