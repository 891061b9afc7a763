//! Project aggregate: members, tasks, chat messages and shared files.
//!
//! # Responsibility
//! - Own the tasks, messages and attachments of one job site.
//! - Check cross-references that must resolve inside the project.
//!
//! # Invariants
//! - Task creators and message senders are project members.
//! - `ProjectAttachment::linked_task_id`, when set, names a task of the same
//!   project. The link is a lookup key, not ownership.

use crate::model::task::{AttachmentKind, Task, TaskId};
use crate::model::user::UserId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type ProjectId = Uuid;
pub type MessageId = Uuid;
pub type ProjectAttachmentId = Uuid;

/// Validation failures for a project aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    NilId,
    BlankName,
    /// A task or message names an author who is not a member.
    NonMemberAuthor(UserId),
    /// A project attachment links to a task outside this project.
    DanglingTaskLink {
        attachment_id: ProjectAttachmentId,
        task_id: TaskId,
    },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "project id must not be nil"),
            Self::BlankName => write!(f, "project name must not be blank"),
            Self::NonMemberAuthor(user_id) => {
                write!(f, "author {user_id} is not a project member")
            }
            Self::DanglingTaskLink {
                attachment_id,
                task_id,
            } => write!(
                f,
                "attachment {attachment_id} links to task {task_id} outside the project"
            ),
        }
    }
}

impl Error for ProjectValidationError {}

/// Chat message posted to a project thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub sender_id: UserId,
    /// Unix epoch milliseconds.
    pub sent_at: i64,
    /// Whether the sender is the viewing user. Kept in sync by the store on
    /// seeding, project updates and user switches.
    pub is_from_current_user: bool,
}

impl Message {
    pub fn new(content: impl Into<String>, sender_id: UserId, sent_at: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender_id,
            sent_at,
            is_from_current_user: false,
        }
    }

    pub fn is_from(&self, user_id: UserId) -> bool {
        self.sender_id == user_id
    }
}

/// File shared at project level, optionally pointing at one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAttachment {
    pub id: ProjectAttachmentId,
    pub kind: AttachmentKind,
    pub file_name: String,
    pub size_bytes: u64,
    pub uploaded_by: UserId,
    /// Unix epoch milliseconds.
    pub uploaded_at: i64,
    pub linked_task_id: Option<TaskId>,
}

impl ProjectAttachment {
    pub fn new(
        kind: AttachmentKind,
        file_name: impl Into<String>,
        size_bytes: u64,
        uploaded_by: UserId,
        uploaded_at: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            file_name: file_name.into(),
            size_bytes,
            uploaded_by,
            uploaded_at,
            linked_task_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub members: BTreeSet<UserId>,
    pub tasks: Vec<Task>,
    pub messages: Vec<Message>,
    pub attachments: Vec<ProjectAttachment>,
    /// Per-user set of tasks the user has not opened yet. Seeded, not derived.
    pub unread_task_ids: BTreeMap<UserId, BTreeSet<TaskId>>,
    /// Unix epoch milliseconds.
    pub last_activity_at: i64,
    pub last_activity_preview: String,
}

impl Project {
    /// Creates an empty project owned by `creator`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        creator: UserId,
        created_at: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            members: BTreeSet::from([creator]),
            tasks: Vec::new(),
            messages: Vec::new(),
            attachments: Vec::new(),
            unread_task_ids: BTreeMap::new(),
            last_activity_at: created_at,
            last_activity_preview: String::new(),
        }
    }

    pub fn is_member(&self, user_id: UserId) -> bool {
        self.members.contains(&user_id)
    }

    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn task_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == task_id)
    }

    /// Number of tasks `user_id` has not opened yet.
    pub fn unread_count_for(&self, user_id: UserId) -> usize {
        self.unread_task_ids.get(&user_id).map_or(0, BTreeSet::len)
    }

    pub fn is_task_unread_for(&self, user_id: UserId, task_id: TaskId) -> bool {
        self.unread_task_ids
            .get(&user_id)
            .is_some_and(|unread| unread.contains(&task_id))
    }

    pub fn open_task_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_done()).count()
    }

    /// Project attachments linked to `task_id`.
    pub fn attachments_for_task(&self, task_id: TaskId) -> impl Iterator<Item = &ProjectAttachment> {
        self.attachments
            .iter()
            .filter(move |attachment| attachment.linked_task_id == Some(task_id))
    }

    pub fn latest_message(&self) -> Option<&Message> {
        self.messages.iter().max_by_key(|message| message.sent_at)
    }

    /// Recomputes `is_from_current_user` on every message for `viewer`.
    pub fn mark_messages_for_viewer(&mut self, viewer: UserId) {
        for message in &mut self.messages {
            message.is_from_current_user = message.is_from(viewer);
        }
    }

    /// Stamps the project's last-activity summary.
    pub fn touch(&mut self, at: i64, preview: impl Into<String>) {
        self.last_activity_at = at;
        self.last_activity_preview = preview.into();
    }

    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id.is_nil() {
            return Err(ProjectValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(ProjectValidationError::BlankName);
        }

        let authors = self
            .tasks
            .iter()
            .map(|task| task.created_by)
            .chain(self.messages.iter().map(|message| message.sender_id));
        for author in authors {
            if !self.is_member(author) {
                return Err(ProjectValidationError::NonMemberAuthor(author));
            }
        }

        for attachment in &self.attachments {
            if let Some(task_id) = attachment.linked_task_id {
                if self.task(task_id).is_none() {
                    return Err(ProjectValidationError::DanglingTaskLink {
                        attachment_id: attachment.id,
                        task_id,
                    });
                }
            }
        }

        Ok(())
    }
}
