//! Boolean app flags keyed by a fixed string.
//!
//! # Invariants
//! - Keys are non-blank.
//! - Stored values are `0` or `1`; anything else is `InvalidData`.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidKey(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidKey(key) => write!(f, "invalid flag key `{key}`"),
            Self::InvalidData(message) => write!(f, "invalid persisted flag data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidKey(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

pub trait FlagRepository {
    /// Returns `None` when the flag was never written.
    fn get_flag(&self, key: &str) -> RepoResult<Option<bool>>;
    fn set_flag(&self, key: &str, value: bool) -> RepoResult<()>;
}

pub struct SqliteFlagRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFlagRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl FlagRepository for SqliteFlagRepository<'_> {
    fn get_flag(&self, key: &str) -> RepoResult<Option<bool>> {
        let key = normalize_key(key)?;
        let stored = self
            .conn
            .query_row(
                "SELECT value FROM app_flags WHERE key = ?1;",
                [key],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;

        stored
            .map(|value| match value {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(RepoError::InvalidData(format!(
                    "flag `{key}` holds {other}, expected 0 or 1"
                ))),
            })
            .transpose()
    }

    fn set_flag(&self, key: &str, value: bool) -> RepoResult<()> {
        let key = normalize_key(key)?;
        self.conn.execute(
            "INSERT INTO app_flags (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, i64::from(value)],
        )?;
        Ok(())
    }
}

fn normalize_key(key: &str) -> RepoResult<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(RepoError::InvalidKey(key.to_string()));
    }
    Ok(trimmed)
}
