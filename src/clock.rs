//! Time sources, so that "today" is injected rather than read ambiently

use chrono::{Local, NaiveDate};

/// A source for the current date.
///
/// Overdue evaluation depends on what day it is. Reading that day through this trait, instead of
/// reaching for the wall clock from within the evaluation, keeps the decision a plain function of
/// its inputs that tests can pin to a known date.
pub trait Clock {
    /// Today's calendar date
    fn today(&self) -> NaiveDate;
}

/// The real wall clock. "Today" is the current date in the local timezone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on a given date.
///
/// Tests use this so that "yesterday" or "tomorrow" do not shift while they run.
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
