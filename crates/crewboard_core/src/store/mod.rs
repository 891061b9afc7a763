//! In-memory crew store and its fixture seed.
//!
//! # Responsibility
//! - Hold users, the current-user selection, projects and the activity feed.
//! - Expose the read accessors and mutation entry points the UI layer calls.
//!
//! # Invariants
//! - Mutations report not-found and precondition failures as `StoreError`
//!   instead of silently dropping the request.
//! - The store is constructed and owned by the application entry point.

pub mod crew_store;
pub mod fixtures;

use crate::model::project::{ProjectId, ProjectValidationError};
use crate::model::task::TaskId;
use crate::model::user::{UserId, UserValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    UnknownUser(UserId),
    InvalidUser(UserValidationError),
    ProjectNotFound(ProjectId),
    TaskNotFound {
        project_id: ProjectId,
        task_id: TaskId,
    },
    InvalidProject(ProjectValidationError),
    PreconditionFailed(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownUser(id) => write!(f, "unknown user: {id}"),
            Self::InvalidUser(err) => write!(f, "{err}"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::TaskNotFound {
                project_id,
                task_id,
            } => write!(f, "task {task_id} not found in project {project_id}"),
            Self::InvalidProject(err) => write!(f, "{err}"),
            Self::PreconditionFailed(details) => write!(f, "precondition failed: {details}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidUser(err) => Some(err),
            Self::InvalidProject(err) => Some(err),
            Self::UnknownUser(_)
            | Self::ProjectNotFound(_)
            | Self::TaskNotFound { .. }
            | Self::PreconditionFailed(_) => None,
        }
    }
}

impl From<ProjectValidationError> for StoreError {
    fn from(value: ProjectValidationError) -> Self {
        Self::InvalidProject(value)
    }
}

impl From<UserValidationError> for StoreError {
    fn from(value: UserValidationError) -> Self {
        Self::InvalidUser(value)
    }
}
