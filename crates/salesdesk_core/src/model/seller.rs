//! Seller entity.
//!
//! # Invariants
//! - `department` is shared: sellers read in one listing call that belong to
//!   the same department point at the same `Rc<Department>`.
//! - A seller is persisted only when its department has an id.

use crate::model::department::Department;
use crate::model::salary::Salary;
use crate::model::validation::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Store-generated seller identifier.
pub type SellerId = i64;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    /// `None` until the seller is inserted.
    pub id: Option<SellerId>,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub base_salary: Salary,
    pub department: Rc<Department>,
}

impl Seller {
    /// Creates a transient seller assigned to `department`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
        base_salary: Salary,
        department: Rc<Department>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            birth_date,
            base_salary,
            department,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks the fields required before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        errors.require_non_blank("name", &self.name);
        errors.require_non_blank("email", &self.email);
        if !self.email.trim().is_empty() && !EMAIL_RE.is_match(self.email.trim()) {
            errors.add("email", "Invalid email address");
        }
        if self.base_salary.is_negative() {
            errors.add("base_salary", "Salary can't be negative");
        }
        if !self.department.is_persisted() {
            errors.add("department", "Department must be saved first");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::Seller;
    use crate::model::department::Department;
    use crate::model::salary::Salary;
    use chrono::NaiveDate;
    use std::rc::Rc;

    fn seller(email: &str, department: Department) -> Seller {
        Seller::new(
            "Maria Green",
            email,
            NaiveDate::from_ymd_opt(1979, 12, 31).unwrap(),
            Salary::from_cents(350_000),
            Rc::new(department),
        )
    }

    #[test]
    fn valid_seller_passes() {
        let seller = seller("maria@gmail.com", Department::with_id(1, "Computers"));
        assert!(seller.validate().is_ok());
        assert!(!seller.is_persisted());
    }

    #[test]
    fn collects_every_failing_field() {
        let mut invalid = seller("not-an-address", Department::new("Unsaved"));
        invalid.name = String::new();
        invalid.base_salary = Salary::from_cents(-1);

        let err = invalid.validate().unwrap_err();
        assert_eq!(err.field("name"), Some("Field can't be empty"));
        assert_eq!(err.field("email"), Some("Invalid email address"));
        assert!(err.field("base_salary").is_some());
        assert!(err.field("department").is_some());
    }

    #[test]
    fn json_shape_nests_department_and_uses_iso_dates() {
        let mut seller = seller("maria@gmail.com", Department::with_id(2, "Electronics"));
        seller.id = Some(9);

        let value = serde_json::to_value(&seller).unwrap();
        assert_eq!(value["birth_date"], "1979-12-31");
        assert_eq!(value["base_salary"], "3500.00");
        assert_eq!(value["department"]["name"], "Electronics");
    }
}
