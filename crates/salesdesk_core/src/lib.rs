//! Core data access for SalesDesk.
//! Departments, the sellers assigned to them, and the services the front end
//! calls to list, save and remove both.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigError, DbConfig, LoggingConfig};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status};
pub use model::department::{Department, DepartmentId};
pub use model::salary::{Salary, SalaryParseError};
pub use model::seller::{Seller, SellerId};
pub use model::validation::ValidationError;
pub use repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
pub use repo::seller_repo::{SellerRepository, SqliteSellerRepository};
pub use repo::{RepoError, RepoResult};
pub use service::department_service::DepartmentService;
pub use service::seller_service::SellerService;
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
