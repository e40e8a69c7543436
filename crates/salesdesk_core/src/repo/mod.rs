//! Repository layer: SQL persistence for departments and sellers.
//!
//! # Responsibility
//! - Keep SQL text and row mapping inside the persistence boundary.
//! - Report store failures as typed `RepoError`s the caller can branch on.
//!
//! # Invariants
//! - Repositories borrow one connection and never open their own.
//! - Statements and row cursors live for one call only.
//! - Reading by id reports absence as `Ok(None)`.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department_repo;
mod schema;
pub mod seller_repo;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    /// Any store failure other than the cases below.
    Db(DbError),
    /// Delete blocked because other rows still reference the target.
    IntegrityViolation {
        table: &'static str,
        message: String,
    },
    /// A single-row write touched an unexpected number of rows.
    UnexpectedRowCount { expected: usize, actual: usize },
    /// Operation needs a store id the entity does not have yet.
    Unpersisted(&'static str),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl RepoError {
    pub fn is_integrity_violation(&self) -> bool {
        matches!(self, Self::IntegrityViolation { .. })
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::IntegrityViolation { table, message } => {
                write!(f, "integrity violation on `{table}`: {message}")
            }
            Self::UnexpectedRowCount { expected, actual } => write!(
                f,
                "unexpected error: expected {expected} affected row(s), got {actual}"
            ),
            Self::Unpersisted(entity) => write!(f, "{entity} has no id; save it first"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
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

pub(crate) fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    )
}
