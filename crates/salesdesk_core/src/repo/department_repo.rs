//! Department repository contract and SQLite implementation.
//!
//! # Invariants
//! - `insert` requires exactly one affected row and writes the generated id
//!   back onto the caller's entity.
//! - `update` does not check the affected-row count; updating an id that
//!   does not exist is a silent no-op.
//! - `delete_by_id` reports a foreign-key rejection as
//!   `RepoError::IntegrityViolation`.

use super::schema::{ensure_connection_ready, DEPARTMENT_COLUMNS};
use super::{is_foreign_key_violation, RepoError, RepoResult};
use crate::model::department::{Department, DepartmentId};
use log::{debug, warn};
use rusqlite::{params, Connection, Row};

const DEPARTMENT_SELECT_SQL: &str = "SELECT Id, Name FROM department";

/// Persistence contract for departments.
pub trait DepartmentRepository {
    /// Inserts `department` and assigns its new id.
    fn insert(&self, department: &mut Department) -> RepoResult<DepartmentId>;
    /// Replaces the name of the row with `department.id`.
    fn update(&self, department: &Department) -> RepoResult<()>;
    fn delete_by_id(&self, id: DepartmentId) -> RepoResult<()>;
    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    /// Returns every department in the store's natural order.
    fn find_all(&self) -> RepoResult<Vec<Department>>;
}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &[("department", DEPARTMENT_COLUMNS)])?;
        Ok(Self { conn })
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn insert(&self, department: &mut Department) -> RepoResult<DepartmentId> {
        let changed = self.conn.execute(
            "INSERT INTO department (Name) VALUES (?1);",
            params![department.name.as_str()],
        )?;
        if changed != 1 {
            return Err(RepoError::UnexpectedRowCount {
                expected: 1,
                actual: changed,
            });
        }

        let id = self.conn.last_insert_rowid();
        department.id = Some(id);
        debug!("event=department_insert module=repo status=ok id={id}");
        Ok(id)
    }

    fn update(&self, department: &Department) -> RepoResult<()> {
        let id = department.id.ok_or(RepoError::Unpersisted("department"))?;
        let changed = self.conn.execute(
            "UPDATE department SET Name = ?1 WHERE Id = ?2;",
            params![department.name.as_str(), id],
        )?;
        debug!("event=department_update module=repo status=ok id={id} rows={changed}");
        Ok(())
    }

    fn delete_by_id(&self, id: DepartmentId) -> RepoResult<()> {
        match self
            .conn
            .execute("DELETE FROM department WHERE Id = ?1;", [id])
        {
            Ok(changed) => {
                debug!("event=department_delete module=repo status=ok id={id} rows={changed}");
                Ok(())
            }
            Err(err) if is_foreign_key_violation(&err) => {
                warn!(
                    "event=department_delete module=repo status=error id={id} error_code=integrity_violation"
                );
                Err(RepoError::IntegrityViolation {
                    table: "department",
                    message: format!("department {id} is still referenced by sellers"),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE Id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_department_row(row)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self.conn.prepare(&format!("{DEPARTMENT_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();
        while let Some(row) = rows.next()? {
            departments.push(parse_department_row(row)?);
        }

        Ok(departments)
    }
}

fn parse_department_row(row: &Row<'_>) -> RepoResult<Department> {
    Ok(Department::with_id(row.get("Id")?, row.get::<_, String>("Name")?))
}
