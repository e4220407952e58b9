//! This crate decides whether a to-do task is overdue.
//!
//! The decision itself lives in the [`due_date`] module: a task is overdue when its due date
//! denotes a calendar day strictly before today, and the task is not completed. The comparison is
//! date-only (a due date anywhere between 00:00:00 and 23:59:59 on a given day behaves the same),
//! and completion always wins over the date. \
//! Due dates are text, as handed over by whatever data source feeds the application. Text that does
//! not denote a real calendar date never causes an error: such tasks simply evaluate as "not
//! overdue", so callers can display an overdue marker without any defensive error handling.
//!
//! Because "today" moves, the evaluation reads it from a [`Clock`](clock::Clock) rather than from
//! the wall clock directly. Use [`SystemClock`](clock::SystemClock) in applications, and
//! [`FixedClock`](clock::FixedClock) wherever tests need a day that does not change under them.
//!
//! The [`Task`] model ties these together, the same way a to-do app would.

pub mod clock;
pub mod due_date;
mod task;
pub use task::CompletionStatus;
pub use task::Task;
