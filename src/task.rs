//! To-do tasks and their due dates

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::due_date;

/// The completion of a task is two facts: whether it is done, and possibly when it was done.
/// A completion date on a task that still needs action makes no sense. This enum provides an API
/// that forbids such impossible combinations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CompletionStatus {
    Completed(Option<DateTime<Utc>>),
    Uncompleted,
}
impl CompletionStatus {
    pub fn is_completed(&self) -> bool {
        match self {
            CompletionStatus::Completed(_) => true,
            _ => false,
        }
    }
}

/// A to-do task
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    /// Persistent, globally unique identifier for this task
    uid: String,

    /// The time this task was created
    creation_date: DateTime<Utc>,
    /// The last time this task was modified
    last_modified: DateTime<Utc>,
    /// The completion status of this task
    completion_status: CompletionStatus,

    /// The display name of the task
    name: String,

    /// The due date, as supplied by the data source.
    /// This stays text on purpose: sources routinely hand over values that are not valid dates,
    /// and those must quietly evaluate as "no due date" rather than be rejected when the task is
    /// built. See [`crate::due_date::parse_due_date`] for the recognized forms.
    due_date: Option<String>,
}


impl Task {
    /// Create a brand new Task. This will pick a new (random) UID.
    pub fn new(name: String, due_date: Option<String>, completed: bool) -> Self {
        let new_uid = Uuid::new_v4().to_hyphenated().to_string();
        let new_completion_status = if completed {
                CompletionStatus::Completed(Some(Utc::now()))
            } else { CompletionStatus::Uncompleted };
        Self {
            uid: new_uid,
            name,
            due_date,
            completion_status: new_completion_status,
            creation_date: Utc::now(),
            last_modified: Utc::now(),
        }
    }

    pub fn uid(&self) -> &str       { &self.uid         }
    pub fn name(&self) -> &str      { &self.name        }
    pub fn completed(&self) -> bool { self.completion_status.is_completed() }
    pub fn due_date(&self) -> Option<&str>        { self.due_date.as_deref() }
    pub fn creation_date(&self) -> &DateTime<Utc> { &self.creation_date }
    pub fn last_modified(&self) -> &DateTime<Utc> { &self.last_modified }
    pub fn completion_status(&self) -> &CompletionStatus { &self.completion_status }

    fn update_last_modified(&mut self) {
        self.last_modified = Utc::now();
    }

    /// Rename a task.
    /// This updates its "last modified" field
    pub fn set_name(&mut self, new_name: String) {
        self.update_last_modified();
        self.name = new_name;
    }

    /// Change or clear the due date.
    /// This updates its "last modified" field
    pub fn set_due_date(&mut self, new_due_date: Option<String>) {
        self.update_last_modified();
        self.due_date = new_due_date;
    }

    /// Set the completion status
    pub fn set_completion_status(&mut self, new_completion_status: CompletionStatus) {
        self.update_last_modified();
        self.completion_status = new_completion_status;
    }

    /// Tell whether this task is overdue, as of the given clock's today.
    ///
    /// A task is overdue when its due date denotes a calendar day strictly before today and it is
    /// not completed yet. Tasks with no due date, or with due-date text that does not denote a
    /// real date, are never overdue.
    pub fn is_overdue(&self, clock: &dyn Clock) -> bool {
        due_date::is_overdue(self.due_date(), self.completed(), clock.today())
    }
}
