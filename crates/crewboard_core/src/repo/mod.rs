//! Repository contracts over the preferences database.
//!
//! # Invariants
//! - SQL stays inside this layer; services see typed values only.
//! - Persisted values that do not decode are reported, never masked.

pub mod flag_repo;
