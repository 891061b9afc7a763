//! Crew member identity.
//!
//! # Invariants
//! - `id` is stable and never reassigned.
//! - `phone_number` holds digits with optional `+`, spaces, dashes and
//!   parentheses.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type UserId = Uuid;

static PHONE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 ()\-]{5,}[0-9]$").expect("valid phone regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    NilId,
    BlankName,
    InvalidPhoneNumber(String),
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "user id must not be nil"),
            Self::BlankName => write!(f, "user name must not be blank"),
            Self::InvalidPhoneNumber(value) => write!(f, "invalid phone number `{value}`"),
        }
    }
}

impl Error for UserValidationError {}

/// A crew member who can be assigned work, post messages and act in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub phone_number: String,
}

impl User {
    /// Creates a user with a generated id.
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// First whitespace-separated token of the display name.
    ///
    /// Returns the whole (trimmed) name when it has a single token.
    pub fn first_name(&self) -> &str {
        first_name_of(&self.name)
    }

    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.id.is_nil() {
            return Err(UserValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(UserValidationError::BlankName);
        }
        if !PHONE_NUMBER_RE.is_match(self.phone_number.trim()) {
            return Err(UserValidationError::InvalidPhoneNumber(
                self.phone_number.clone(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn first_name_of(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("")
}
