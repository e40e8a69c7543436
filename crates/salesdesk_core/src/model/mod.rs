//! Entity model for departments and the sellers assigned to them.
//!
//! # Invariants
//! - `id == None` marks a transient entity; the store assigns ids on insert.
//! - A seller always references exactly one department.

pub mod department;
pub mod salary;
pub mod seller;
pub mod validation;
