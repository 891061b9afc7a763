//! Activity feed entries and their display formatting.
//!
//! # Responsibility
//! - Record domain events (task lifecycle, chat) as immutable log entries.
//! - Map each event kind to a description, icon and color token.
//!
//! # Invariants
//! - Activities are immutable after creation; fields are read-only.
//! - An activity references its project/task by id and owns neither.

use crate::model::project::ProjectId;
use crate::model::task::TaskId;
use crate::model::user::{first_name_of, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ActivityId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    TaskAssigned,
    TaskCompleted,
    TaskReopened,
    TaskCreated,
    MessageSent,
}

impl ActivityKind {
    /// Human-readable one-line summary.
    ///
    /// Uses the first name token of `actor_name`. Task kinds fall back to a
    /// generic noun when `task_title` is missing; `MessageSent` quotes the
    /// preview or falls back to "sent a message".
    pub fn description(
        self,
        actor_name: &str,
        task_title: Option<&str>,
        message_preview: Option<&str>,
    ) -> String {
        let actor = first_name_of(actor_name);
        match self {
            Self::TaskAssigned => {
                format!("{actor} assigned {}", task_title.unwrap_or("a task"))
            }
            Self::TaskCompleted => {
                format!("{actor} completed {}", task_title.unwrap_or("a task"))
            }
            Self::TaskReopened => {
                format!("{actor} reopened {}", task_title.unwrap_or("a task"))
            }
            Self::TaskCreated => {
                format!("{actor} created {}", task_title.unwrap_or("a new task"))
            }
            Self::MessageSent => match message_preview {
                Some(preview) if !preview.trim().is_empty() => {
                    format!("{actor}: {}", preview.trim())
                }
                _ => format!("{actor} sent a message"),
            },
        }
    }

    /// Symbol identifier the UI renders next to the entry.
    pub fn icon(self) -> &'static str {
        match self {
            Self::TaskAssigned => "person.badge.plus",
            Self::TaskCompleted => "checkmark.circle.fill",
            Self::TaskReopened => "arrow.uturn.backward.circle",
            Self::TaskCreated => "plus.circle.fill",
            Self::MessageSent => "bubble.left.fill",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::TaskAssigned => "blue",
            Self::TaskCompleted => "green",
            Self::TaskReopened => "orange",
            Self::TaskCreated => "purple",
            Self::MessageSent => "gray",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    id: ActivityId,
    kind: ActivityKind,
    timestamp: i64,
    actor_id: UserId,
    project_id: ProjectId,
    task_id: Option<TaskId>,
    message_preview: Option<String>,
}

impl Activity {
    pub fn new(
        kind: ActivityKind,
        timestamp: i64,
        actor_id: UserId,
        project_id: ProjectId,
        task_id: Option<TaskId>,
        message_preview: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            timestamp,
            actor_id,
            project_id,
            task_id,
            message_preview,
        }
    }

    pub fn id(&self) -> ActivityId {
        self.id
    }

    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Unix epoch milliseconds.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn actor_id(&self) -> UserId {
        self.actor_id
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    pub fn task_id(&self) -> Option<TaskId> {
        self.task_id
    }

    pub fn message_preview(&self) -> Option<&str> {
        self.message_preview.as_deref()
    }

    pub fn icon(&self) -> &'static str {
        self.kind.icon()
    }

    pub fn color(&self) -> &'static str {
        self.kind.color()
    }
}

#[cfg(test)]
mod tests {
    use super::ActivityKind;

    #[test]
    fn task_descriptions_use_first_name_and_title() {
        let text = ActivityKind::TaskCompleted.description(
            "David Chen",
            Some("Install window frames"),
            None,
        );
        assert_eq!(text, "David completed Install window frames");
    }

    #[test]
    fn task_descriptions_fall_back_without_title() {
        assert_eq!(
            ActivityKind::TaskAssigned.description("Sarah Mitchell", None, None),
            "Sarah assigned a task"
        );
        assert_eq!(
            ActivityKind::TaskCreated.description("Sarah Mitchell", None, None),
            "Sarah created a new task"
        );
    }

    #[test]
    fn message_description_uses_preview_or_fallback() {
        assert_eq!(
            ActivityKind::MessageSent.description("James Wilson", None, Some(" On site at 7 ")),
            "James: On site at 7"
        );
        assert_eq!(
            ActivityKind::MessageSent.description("James Wilson", None, Some("  ")),
            "James sent a message"
        );
    }

    #[test]
    fn every_kind_has_distinct_icon_and_color() {
        let kinds = [
            ActivityKind::TaskAssigned,
            ActivityKind::TaskCompleted,
            ActivityKind::TaskReopened,
            ActivityKind::TaskCreated,
            ActivityKind::MessageSent,
        ];
        let icons: std::collections::HashSet<_> = kinds.iter().map(|kind| kind.icon()).collect();
        let colors: std::collections::HashSet<_> = kinds.iter().map(|kind| kind.color()).collect();
        assert_eq!(icons.len(), kinds.len());
        assert_eq!(colors.len(), kinds.len());
    }
}
