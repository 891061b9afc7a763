//! Task, subtask and task attachment records.
//!
//! # Invariants
//! - A task belongs to exactly one project; subtasks and attachments belong
//!   to exactly one task.
//! - `status` only moves between `Pending` and `Done`.

use crate::model::user::UserId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

pub type TaskId = Uuid;
pub type SubtaskId = Uuid;
pub type AttachmentId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Done,
}

impl TaskStatus {
    /// The opposite status; used by check-off toggles.
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Done,
            Self::Done => Self::Pending,
        }
    }
}

/// File kind shown in attachment lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Document,
    Image,
}

/// Why a file was attached: background material or proof of work done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentCategory {
    Reference,
    Work,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: AttachmentId,
    pub kind: AttachmentKind,
    pub category: AttachmentCategory,
    pub file_name: String,
    pub size_bytes: u64,
    pub uploaded_by: UserId,
    pub caption: Option<String>,
}

impl Attachment {
    pub fn new(
        kind: AttachmentKind,
        category: AttachmentCategory,
        file_name: impl Into<String>,
        size_bytes: u64,
        uploaded_by: UserId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            category,
            file_name: file_name.into(),
            size_bytes,
            uploaded_by,
            caption: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: SubtaskId,
    pub title: String,
    pub is_done: bool,
    pub assignees: BTreeSet<UserId>,
    pub created_by: UserId,
}

impl Subtask {
    pub fn new(title: impl Into<String>, created_by: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            is_done: false,
            assignees: BTreeSet::new(),
            created_by,
        }
    }
}

/// Unit of crew work inside a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub assignees: BTreeSet<UserId>,
    pub status: TaskStatus,
    /// Unix epoch milliseconds.
    pub due_date: Option<i64>,
    pub subtasks: Vec<Subtask>,
    pub attachments: Vec<Attachment>,
    pub notes: String,
    pub created_by: UserId,
    /// Users who have seen/accepted the assignment. Seeded, not derived.
    pub acknowledged_by: BTreeSet<UserId>,
}

impl Task {
    /// Creates a pending task with no assignees.
    pub fn new(title: impl Into<String>, created_by: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            assignees: BTreeSet::new(),
            status: TaskStatus::Pending,
            due_date: None,
            subtasks: Vec::new(),
            attachments: Vec::new(),
            notes: String::new(),
            created_by,
            acknowledged_by: BTreeSet::new(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Moves the task to `status`.
    ///
    /// Returns `false` without touching the task when it already has that
    /// status.
    pub fn set_status(&mut self, status: TaskStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        true
    }

    pub fn is_assigned_to(&self, user_id: UserId) -> bool {
        self.assignees.contains(&user_id)
    }

    pub fn is_acknowledged_by(&self, user_id: UserId) -> bool {
        self.acknowledged_by.contains(&user_id)
    }

    pub fn completed_subtask_count(&self) -> usize {
        self.subtasks.iter().filter(|subtask| subtask.is_done).count()
    }

    /// Whether the due date lies before `now_ms` while the task is still open.
    pub fn is_overdue(&self, now_ms: i64) -> bool {
        !self.is_done() && self.due_date.is_some_and(|due| due < now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::{Subtask, Task, TaskStatus};
    use uuid::Uuid;

    #[test]
    fn set_status_reports_whether_it_changed() {
        let mut task = Task::new("Frame north wall", Uuid::new_v4());

        assert!(task.set_status(TaskStatus::Done));
        assert!(task.is_done());
        assert!(!task.set_status(TaskStatus::Done));
        assert!(task.set_status(TaskStatus::Done.toggled()));
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn overdue_ignores_done_tasks() {
        let mut task = Task::new("Order rebar", Uuid::new_v4());
        task.due_date = Some(1_000);

        assert!(task.is_overdue(2_000));
        assert!(!task.is_overdue(500));

        task.set_status(TaskStatus::Done);
        assert!(!task.is_overdue(2_000));
    }

    #[test]
    fn completed_subtask_count_counts_done_flags() {
        let creator = Uuid::new_v4();
        let mut task = Task::new("Pour slab", creator);
        let mut forms = Subtask::new("Set forms", creator);
        forms.is_done = true;
        task.subtasks.push(forms);
        task.subtasks.push(Subtask::new("Cure", creator));

        assert_eq!(task.completed_subtask_count(), 1);
    }
}
