//! Domain model for crews, projects, tasks and the activity feed.
//!
//! # Responsibility
//! - Define the value records the store owns and the UI layer reads.
//! - Keep per-entity invariants next to the data they constrain.
//!
//! # Invariants
//! - Every entity is identified by a stable, non-nil `Uuid`.
//! - Timestamps are Unix epoch milliseconds.
//! - Relationships between entities are expressed by id, never by pointer.

pub mod activity;
pub mod project;
pub mod task;
pub mod user;

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current wall-clock time as Unix epoch milliseconds.
///
/// Falls back to `0` if the system clock reports a time before the epoch.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
