//! Crew store: the data layer behind every screen.
//!
//! # Responsibility
//! - Register the demo crew and track which member is "logged in".
//! - Hold projects indexed by id while keeping their display order.
//! - Keep the activity feed most-recent-first and derive per-user views.
//!
//! # Invariants
//! - `users` is never empty and `current_user_index` always points into it.
//! - `project_order` and `projects` hold exactly the same ids.
//! - New activities are inserted at index 0 regardless of their timestamp.
//! - Seeding (`load_projects`, `load_mock_activities`) only fills empty lists.

use crate::model::activity::{Activity, ActivityId, ActivityKind};
use crate::model::now_epoch_ms;
use crate::model::project::{Project, ProjectId};
use crate::model::task::{TaskId, TaskStatus};
use crate::model::user::{User, UserId};
use crate::store::fixtures;
use crate::store::{StoreError, StoreResult};
use log::{info, warn};
use std::collections::HashMap;

/// Request model for appending a feed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub kind: ActivityKind,
    pub actor_id: UserId,
    pub project_id: ProjectId,
    pub task_id: Option<TaskId>,
    pub message_preview: Option<String>,
}

impl NewActivity {
    pub fn new(kind: ActivityKind, actor_id: UserId, project_id: ProjectId) -> Self {
        Self {
            kind,
            actor_id,
            project_id,
            task_id: None,
            message_preview: None,
        }
    }

    pub fn with_task(mut self, task_id: TaskId) -> Self {
        self.task_id = Some(task_id);
        self
    }

    pub fn with_message_preview(mut self, preview: impl Into<String>) -> Self {
        self.message_preview = Some(preview.into());
        self
    }
}

/// In-memory store for users, projects and the activity feed.
///
/// Owned by the application entry point and lent to the UI layer. All
/// mutation goes through `&mut self`, which gives a single writer at a time.
#[derive(Debug, Clone)]
pub struct CrewStore {
    users: Vec<User>,
    current_user_index: usize,
    projects: HashMap<ProjectId, Project>,
    project_order: Vec<ProjectId>,
    activities: Vec<Activity>,
}

impl Default for CrewStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CrewStore {
    /// Creates an unseeded store over the demo crew, first member selected.
    pub fn new() -> Self {
        Self::from_users_unchecked(fixtures::demo_users())
    }

    /// Creates an unseeded store over a caller-provided crew.
    ///
    /// # Errors
    /// - `PreconditionFailed` when `users` is empty or repeats an id.
    /// - `InvalidUser` when any user fails validation.
    pub fn with_users(users: Vec<User>) -> StoreResult<Self> {
        if users.is_empty() {
            return Err(StoreError::PreconditionFailed(
                "store needs at least one user",
            ));
        }
        for (index, user) in users.iter().enumerate() {
            user.validate()?;
            if users[..index].iter().any(|other| other.id == user.id) {
                return Err(StoreError::PreconditionFailed("user ids must be unique"));
            }
        }
        Ok(Self::from_users_unchecked(users))
    }

    fn from_users_unchecked(users: Vec<User>) -> Self {
        Self {
            users,
            current_user_index: 0,
            projects: HashMap::new(),
            project_order: Vec::new(),
            activities: Vec::new(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, user_id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == user_id)
    }

    pub fn current_user(&self) -> &User {
        &self.users[self.current_user_index]
    }

    /// Position of the current user in `users()`.
    pub fn current_user_index(&self) -> usize {
        self.current_user_index
    }

    /// Selects another registered user as the viewing identity.
    ///
    /// Current-user-relative reads reflect the new selection on next call.
    ///
    /// # Errors
    /// - `UnknownUser` when `user_id` is not registered; selection unchanged.
    pub fn switch_user(&mut self, user_id: UserId) -> StoreResult<()> {
        let Some(index) = self.users.iter().position(|user| user.id == user_id) else {
            warn!(
                "event=switch_user module=store status=error error_code=unknown_user user_id={user_id}"
            );
            return Err(StoreError::UnknownUser(user_id));
        };
        self.current_user_index = index;
        for project in self.projects.values_mut() {
            project.mark_messages_for_viewer(user_id);
        }
        info!("event=switch_user module=store status=ok user_index={index}");
        Ok(())
    }

    /// Seeds fixture projects when the store has none.
    ///
    /// Returns `true` when seeding ran, `false` when projects already existed.
    pub fn load_projects(&mut self) -> bool {
        if !self.projects.is_empty() {
            return false;
        }
        let viewer = self.current_user().id;
        for mut project in fixtures::mock_projects(&self.users, now_epoch_ms()) {
            project.mark_messages_for_viewer(viewer);
            self.insert_project(project);
        }
        info!(
            "event=seed module=store status=ok kind=projects count={}",
            self.project_order.len()
        );
        true
    }

    /// Projects in insertion order.
    pub fn projects(&self) -> Vec<&Project> {
        self.project_order
            .iter()
            .filter_map(|id| self.projects.get(id))
            .collect()
    }

    pub fn project(&self, project_id: ProjectId) -> Option<&Project> {
        self.projects.get(&project_id)
    }

    /// Projects the current user is a member of, in insertion order.
    pub fn projects_for_current_user(&self) -> Vec<&Project> {
        let user_id = self.current_user().id;
        self.projects()
            .into_iter()
            .filter(|project| project.is_member(user_id))
            .collect()
    }

    /// Creates a project owned by the current user and appends it.
    ///
    /// # Errors
    /// - `InvalidProject` when `name` is blank.
    pub fn add_project(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> StoreResult<ProjectId> {
        let name = name.into().trim().to_string();
        let description = description.into().trim().to_string();
        let project = Project::new(name, description, self.current_user().id, now_epoch_ms());
        project.validate()?;

        let project_id = project.id;
        self.insert_project(project);
        info!("event=project_create module=store status=ok project_id={project_id}");
        Ok(project_id)
    }

    /// Replaces the stored project that has the same id.
    ///
    /// # Errors
    /// - `ProjectNotFound` when no project has `project.id`; nothing is
    ///   inserted.
    /// - `InvalidProject` when the replacement fails validation.
    /// - `UnknownUser` when a member is not registered.
    pub fn update_project(&mut self, mut project: Project) -> StoreResult<()> {
        if !self.projects.contains_key(&project.id) {
            warn!(
                "event=project_update module=store status=error error_code=project_not_found project_id={}",
                project.id
            );
            return Err(StoreError::ProjectNotFound(project.id));
        }
        project.validate()?;
        if let Some(unknown) = project
            .members
            .iter()
            .find(|member| self.user(**member).is_none())
        {
            return Err(StoreError::UnknownUser(*unknown));
        }

        project.mark_messages_for_viewer(self.current_user().id);
        let project_id = project.id;
        self.projects.insert(project_id, project);
        info!("event=project_update module=store status=ok project_id={project_id}");
        Ok(())
    }

    /// Full feed, most recently added first.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Feed without the current user's own entries.
    pub fn activities_for_current_user(&self) -> Vec<&Activity> {
        let user_id = self.current_user().id;
        self.activities
            .iter()
            .filter(|activity| activity.actor_id() != user_id)
            .collect()
    }

    /// Appends an activity stamped with the current time at the head of the
    /// feed.
    ///
    /// # Errors
    /// - `UnknownUser` when the actor is not registered.
    /// - `ProjectNotFound` when the project does not exist.
    /// - `TaskNotFound` when `task_id` is not a task of that project.
    pub fn add_activity(&mut self, request: NewActivity) -> StoreResult<ActivityId> {
        if self.user(request.actor_id).is_none() {
            return Err(StoreError::UnknownUser(request.actor_id));
        }
        let project = self
            .projects
            .get(&request.project_id)
            .ok_or(StoreError::ProjectNotFound(request.project_id))?;
        if let Some(task_id) = request.task_id {
            if project.task(task_id).is_none() {
                return Err(StoreError::TaskNotFound {
                    project_id: request.project_id,
                    task_id,
                });
            }
        }

        let activity = Activity::new(
            request.kind,
            now_epoch_ms(),
            request.actor_id,
            request.project_id,
            request.task_id,
            request.message_preview,
        );
        let activity_id = activity.id();
        self.activities.insert(0, activity);
        info!(
            "event=activity_add module=store status=ok kind={:?} activity_id={activity_id}",
            request.kind
        );
        Ok(activity_id)
    }

    /// Seeds the fixture feed when it is empty.
    ///
    /// Returns `true` when seeding ran, `false` when the feed was non-empty.
    ///
    /// # Errors
    /// - `PreconditionFailed` when fewer than two projects exist.
    pub fn load_mock_activities(&mut self) -> StoreResult<bool> {
        if !self.activities.is_empty() {
            return Ok(false);
        }
        if self.project_order.len() < 2 {
            warn!(
                "event=seed module=store status=error kind=activities error_code=not_enough_projects count={}",
                self.project_order.len()
            );
            return Err(StoreError::PreconditionFailed(
                "mock activities need at least two projects",
            ));
        }

        let activities =
            fixtures::mock_activities(&self.users, &self.projects(), now_epoch_ms());
        self.activities = activities;
        info!(
            "event=seed module=store status=ok kind=activities count={}",
            self.activities.len()
        );
        Ok(true)
    }

    /// Renders the feed line for `activity`, resolving names from the store.
    ///
    /// Unknown actors render as "Someone"; missing tasks use the kind's
    /// fallback phrase.
    pub fn describe_activity(&self, activity: &Activity) -> String {
        let actor_name = self
            .user(activity.actor_id())
            .map_or("Someone", User::first_name);
        let task_title = activity.task_id().and_then(|task_id| {
            self.project(activity.project_id())
                .and_then(|project| project.task(task_id))
                .map(|task| task.title.as_str())
        });
        activity
            .kind()
            .description(actor_name, task_title, activity.message_preview())
    }

    /// Unread tasks for the current user summed across projects.
    pub fn unread_task_count_for_current_user(&self) -> usize {
        let user_id = self.current_user().id;
        self.projects
            .values()
            .map(|project| project.unread_count_for(user_id))
            .sum()
    }

    /// Marks a task done as the current user and records it in the feed.
    ///
    /// # Errors
    /// - `ProjectNotFound` / `TaskNotFound` for unknown ids.
    /// - `PreconditionFailed` when the task is already done.
    pub fn complete_task(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> StoreResult<ActivityId> {
        self.transition_task(project_id, task_id, TaskStatus::Done)
    }

    /// Moves a done task back to pending as the current user.
    ///
    /// # Errors
    /// - `ProjectNotFound` / `TaskNotFound` for unknown ids.
    /// - `PreconditionFailed` when the task is already pending.
    pub fn reopen_task(&mut self, project_id: ProjectId, task_id: TaskId) -> StoreResult<ActivityId> {
        self.transition_task(project_id, task_id, TaskStatus::Pending)
    }

    /// Flips a task between pending and done as the current user, the way a
    /// check-off control does.
    ///
    /// # Errors
    /// - `ProjectNotFound` / `TaskNotFound` for unknown ids.
    pub fn toggle_task(&mut self, project_id: ProjectId, task_id: TaskId) -> StoreResult<ActivityId> {
        let current = self
            .project(project_id)
            .ok_or(StoreError::ProjectNotFound(project_id))?
            .task(task_id)
            .ok_or(StoreError::TaskNotFound {
                project_id,
                task_id,
            })?
            .status;
        self.transition_task(project_id, task_id, current.toggled())
    }

    fn transition_task(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
        status: TaskStatus,
    ) -> StoreResult<ActivityId> {
        let actor = self.current_user().clone();
        let kind = match status {
            TaskStatus::Done => ActivityKind::TaskCompleted,
            TaskStatus::Pending => ActivityKind::TaskReopened,
        };

        let project = self
            .projects
            .get_mut(&project_id)
            .ok_or(StoreError::ProjectNotFound(project_id))?;
        let task = project
            .task_mut(task_id)
            .ok_or(StoreError::TaskNotFound {
                project_id,
                task_id,
            })?;
        if !task.set_status(status) {
            return Err(StoreError::PreconditionFailed(match status {
                TaskStatus::Done => "task is already done",
                TaskStatus::Pending => "task is already pending",
            }));
        }
        let preview = kind.description(&actor.name, Some(task.title.as_str()), None);
        project.touch(now_epoch_ms(), preview);

        self.add_activity(NewActivity::new(kind, actor.id, project_id).with_task(task_id))
    }

    fn insert_project(&mut self, project: Project) {
        self.project_order.push(project.id);
        self.projects.insert(project.id, project);
    }
}
