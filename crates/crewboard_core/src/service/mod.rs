//! Use-case services over repositories.
//!
//! Services keep UI callers decoupled from storage details.

pub mod launch_service;
