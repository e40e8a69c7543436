//! Use-case services consumed by the front end.
//!
//! # Responsibility
//! - Validate entities before they reach a repository.
//! - Choose insert or update from entity identity (`save_or_update`).
//! - Stay storage-agnostic: every service is generic over its repository
//!   trait.

use crate::model::validation::ValidationError;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department_service;
pub mod seller_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
    /// Entity failed field validation; nothing was written.
    Validation(ValidationError),
    /// Repository failure, passed through unchanged.
    Repo(RepoError),
}

impl ServiceError {
    /// True when a delete was refused because the row is still referenced.
    pub fn is_integrity_violation(&self) -> bool {
        matches!(self, Self::Repo(err) if err.is_integrity_violation())
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
