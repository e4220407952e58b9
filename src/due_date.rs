//! Parsing due dates and deciding whether they are overdue

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse due-date text into the calendar day it denotes.
///
/// Accepted forms are a plain calendar date (`2021-03-21`), an RFC 3339 date-time
/// (`2021-03-21T18:00:00Z`, numeric offsets are allowed too), and a naive date-time without any
/// timezone marker (`2021-03-21T18:00:00`). \
/// The result is always the calendar day *as written in the text*: the time of day and the UTC
/// offset are discarded, not converted. Overdue evaluation compares whole days, so shifting a due
/// date into another timezone first would move some of them onto a neighbouring day.
///
/// Text that does not denote a real calendar date (`"next Tuesday"`, `"2025-13-45"`...) yields
/// `None`.
pub fn parse_due_date(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Some(date_time.date_naive());
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(date_time.date());
    }
    log::debug!("Unable to parse due date '{}', treating it as unset", text);
    None
}

/// Tell whether a task with this due date and completion flag is overdue on `today`.
///
/// A task is overdue when its due date denotes a calendar day strictly before `today`. A due date
/// of `today` itself is not overdue yet, whatever its time-of-day component. \
/// Completed tasks are never overdue, however far in the past their due date is. Neither are tasks
/// with no due date, or with due-date text [`parse_due_date`] does not recognize. This function has
/// no failure mode: every missing or invalid input degrades to `false`.
///
/// `today` is usually obtained from a [`Clock`](crate::clock::Clock).
pub fn is_overdue(due_date: Option<&str>, completed: bool, today: NaiveDate) -> bool {
    // Completion wins over any date
    if completed {
        return false;
    }

    let text = match due_date {
        None => return false,
        Some(text) => text,
    };

    match parse_due_date(text) {
        None => false,
        Some(due_day) => due_day < today,
    }
}
