//! Core data layer for CrewBoard.
//! This crate owns the domain model, the in-memory crew store and the
//! persisted app preferences the UI layer reads on launch.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::{Activity, ActivityId, ActivityKind};
pub use model::project::{
    Message, MessageId, Project, ProjectAttachment, ProjectAttachmentId, ProjectId,
    ProjectValidationError,
};
pub use model::task::{
    Attachment, AttachmentCategory, AttachmentId, AttachmentKind, Subtask, SubtaskId, Task,
    TaskId, TaskStatus,
};
pub use model::user::{User, UserId, UserValidationError};
pub use repo::flag_repo::{FlagRepository, RepoError, RepoResult, SqliteFlagRepository};
pub use service::launch_service::{LaunchService, HAS_LAUNCHED_BEFORE_KEY};
pub use store::crew_store::{CrewStore, NewActivity};
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
