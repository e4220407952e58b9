//! Overdue evaluation against the real system date.
//!
//! These tests build "today", "yesterday" and "tomorrow" at run time, the way a to-do app
//! evaluating its list would. The fixed-date cases live next to the code they test.

use chrono::{Duration, Local, NaiveDate};

use past_due::clock::SystemClock;
use past_due::due_date::is_overdue;
use past_due::Task;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[test]
fn missing_due_date_is_not_overdue() {
    assert_eq!(is_overdue(None, false, today()), false);
}

#[test]
fn completed_tasks_are_never_overdue() {
    assert_eq!(is_overdue(Some("2020-01-01"), true, today()), false);
    assert_eq!(is_overdue(Some("1990-01-01"), true, today()), false);
}

#[test]
fn invalid_due_dates_are_not_overdue() {
    assert_eq!(is_overdue(Some("invalid-date"), false, today()), false);
    assert_eq!(is_overdue(Some("2025-13-45"), false, today()), false);
    assert_eq!(is_overdue(Some("not-a-date"), false, today()), false);
}

#[test]
fn due_today_is_not_overdue() {
    let due_date = ymd(today());
    assert_eq!(is_overdue(Some(due_date.as_str()), false, today()), false);
}

#[test]
fn due_in_the_future_is_not_overdue() {
    let tomorrow = ymd(today() + Duration::days(1));
    assert_eq!(is_overdue(Some(tomorrow.as_str()), false, today()), false);
    assert_eq!(is_overdue(Some("2099-12-31"), false, today()), false);
}

#[test]
fn due_in_the_past_is_overdue() {
    let yesterday = ymd(today() - Duration::days(1));
    assert_eq!(is_overdue(Some(yesterday.as_str()), false, today()), true);
    assert_eq!(is_overdue(Some("2020-01-01"), false, today()), true);
}

#[test]
fn time_of_day_does_not_make_today_overdue() {
    let today = today();
    for time in &["T00:00:00Z", "T12:30:45Z", "T23:59:59Z"] {
        let due_date = format!("{}{}", ymd(today), time);
        assert_eq!(is_overdue(Some(due_date.as_str()), false, today), false);
    }
}

#[test]
fn yesterday_is_overdue_whatever_its_time_of_day() {
    let today = today();
    let yesterday = today - Duration::days(1);
    for time in &["T00:00:00Z", "T23:59:59Z"] {
        let due_date = format!("{}{}", ymd(yesterday), time);
        assert_eq!(is_overdue(Some(due_date.as_str()), false, today), true);
    }
}

#[test]
fn tasks_evaluate_against_the_system_clock() {
    let clock = SystemClock;

    let late = Task::new("Send the invoice".to_string(), Some("2020-01-01".to_string()), false);
    assert_eq!(late.is_overdue(&clock), true);

    let done = Task::new("Send the invoice".to_string(), Some("2020-01-01".to_string()), true);
    assert_eq!(done.is_overdue(&clock), false);

    let future = Task::new("Plan the next century".to_string(), Some("2099-12-31".to_string()), false);
    assert_eq!(future.is_overdue(&clock), false);
}
