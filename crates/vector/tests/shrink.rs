//! Resizes that only trim: results borrow the source buffer.

use dayvec_vector::{DateVector, NaiveDate};

const NONE: Option<&str> = None;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 2013-06-02 ..= 2013-06-06 holding [2, 3, 4, 5, 6].
fn source() -> DateVector<'static, i64> {
    DateVector::from_vec("2013-06-02", vec![2, 3, 4, 5, 6]).unwrap()
}

#[test]
fn trim_front() {
    let a = source();
    let b = a.resize("2013-06-03", NONE).unwrap().unwrap();
    assert_eq!(b.values().to_vec(), vec![3, 4, 5, 6]);
    assert_eq!(b.first_day(), Some(ymd(2013, 6, 3)));
    assert_eq!(b.last_day(), Some(ymd(2013, 6, 6)));
    assert!(b.is_view());
    assert!(a.shares_memory(&b));
}

#[test]
fn trim_back() {
    let a = source();
    let b = a.resize(NONE, "2013-06-04").unwrap().unwrap();
    assert_eq!(b.values().to_vec(), vec![2, 3, 4]);
    assert_eq!(b.first_day(), Some(ymd(2013, 6, 2)));
    assert_eq!(b.last_day(), Some(ymd(2013, 6, 4)));
    assert!(a.shares_memory(&b));
}

#[test]
fn trim_both() {
    let a = source();
    let b = a.resize("2013-06-03", "2013-06-04").unwrap().unwrap();
    assert_eq!(b.values().to_vec(), vec![3, 4]);
    assert!(a.shares_memory(&b));
}

#[test]
fn trim_to_single_day() {
    let a = source();
    let first = a.resize("2013-06-06", NONE).unwrap().unwrap();
    assert_eq!(first.values().to_vec(), vec![6]);
    assert_eq!(first.first_day(), first.last_day());

    let last = a.resize(NONE, "2013-06-02").unwrap().unwrap();
    assert_eq!(last.values().to_vec(), vec![2]);
    assert_eq!(last.last_day(), Some(ymd(2013, 6, 2)));
}

#[test]
fn trimmed_view_points_into_source() {
    let a = source();
    let b = a.resize("2013-06-04", NONE).unwrap().unwrap();
    // Index 0 of the view is index 2 of the source.
    assert!(std::ptr::eq(&b[0], &a[2]));
}

#[test]
fn noop_is_shallow_copy() {
    let a = source();
    let b = a.resize(NONE, NONE).unwrap().unwrap();
    assert_eq!(b, a);
    assert_eq!(b.first_day(), a.first_day());
    assert_eq!(b.last_day(), a.last_day());
    assert_eq!(b.len(), a.len());
    assert!(b.is_view());
    assert!(a.shares_memory(&b));
}

#[test]
fn explicit_same_bounds_is_noop() {
    let a = source();
    let b = a.resize(ymd(2013, 6, 2), ymd(2013, 6, 6)).unwrap().unwrap();
    assert_eq!(b, a);
    assert!(a.shares_memory(&b));
}

#[test]
fn view_of_view_still_shares() {
    let a = source();
    let b = a.resize("2013-06-03", NONE).unwrap().unwrap();
    let c = b.resize(NONE, "2013-06-05").unwrap().unwrap();
    assert_eq!(c.values().to_vec(), vec![3, 4, 5]);
    assert!(a.shares_memory(&c));
}

#[test]
fn into_owned_breaks_sharing() {
    let a = source();
    let b = a.resize("2013-06-03", NONE).unwrap().unwrap().into_owned();
    assert!(!b.is_view());
    assert!(!a.shares_memory(&b));
    assert_eq!(b.values().to_vec(), vec![3, 4, 5, 6]);
}

#[test]
fn shrink_over_borrowed_buffer() {
    let raw = ndarray::Array1::from_vec(vec![1.0_f64, 2.0, 3.0, 4.0]);
    let a = DateVector::new("2012-02-28", raw.view()).unwrap();
    // 02-28, 02-29, 03-01, 03-02
    let b = a.resize("2012-02-29", "2012-03-01").unwrap().unwrap();
    assert_eq!(b.values().to_vec(), vec![2.0, 3.0]);
    assert_eq!(b.values().as_ptr(), raw.as_ptr().wrapping_add(1));
}
