//! Department entity.

use crate::model::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// Store-generated department identifier.
pub type DepartmentId = i64;

/// Organizational unit that owns zero or more sellers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// `None` until the department is inserted.
    pub id: Option<DepartmentId>,
    pub name: String,
}

impl Department {
    /// Creates a transient department.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Creates a department that already has a store identity.
    pub fn with_id(id: DepartmentId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks the fields required before persistence.
    ///
    /// The repository does not call this; services do.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        errors.require_non_blank("name", &self.name);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::Department;

    #[test]
    fn new_department_is_transient() {
        let department = Department::new("Books");
        assert_eq!(department.id, None);
        assert!(!department.is_persisted());
        assert!(Department::with_id(3, "Books").is_persisted());
    }

    #[test]
    fn blank_name_fails_validation() {
        let err = Department::new("  ").validate().unwrap_err();
        assert_eq!(err.field("name"), Some("Field can't be empty"));
        assert!(Department::new("Computers").validate().is_ok());
    }
}
