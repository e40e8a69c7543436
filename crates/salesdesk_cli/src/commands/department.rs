//! `salesdesk department ...`

use super::{CliResult, Output};
use crate::table::Column;
use clap::{Args, Subcommand};
use rusqlite::Connection;
use salesdesk_core::{
    Department, DepartmentId, DepartmentService, RepoError, SqliteDepartmentRepository,
};
use std::error::Error;

pub const DEPARTMENT_COLUMNS: &[Column<Department>] = &[
    Column {
        header: "Id",
        value: |department| department.id.map(|id| id.to_string()).unwrap_or_default(),
    },
    Column {
        header: "Name",
        value: |department| department.name.clone(),
    },
];

#[derive(Debug, Args)]
pub struct DepartmentArgs {
    #[command(subcommand)]
    pub command: DepartmentCommand,
}

#[derive(Debug, Subcommand)]
pub enum DepartmentCommand {
    /// List every department
    List,
    /// Show one department
    Show { id: DepartmentId },
    /// Create a department
    Add { name: String },
    /// Rename a department
    Rename { id: DepartmentId, name: String },
    /// Delete a department that no seller belongs to
    Remove { id: DepartmentId },
}

pub fn execute(conn: &Connection, args: DepartmentArgs, output: Output) -> CliResult {
    let service = DepartmentService::new(SqliteDepartmentRepository::try_new(conn)?);

    match args.command {
        DepartmentCommand::List => output.list(DEPARTMENT_COLUMNS, &service.find_all()?),
        DepartmentCommand::Show { id } => {
            let department = load(&service, id)?;
            output.one(DEPARTMENT_COLUMNS, &department)
        }
        DepartmentCommand::Add { name } => {
            let mut department = Department::new(name);
            service.save_or_update(&mut department)?;
            output.one(DEPARTMENT_COLUMNS, &department)
        }
        DepartmentCommand::Rename { id, name } => {
            let mut department = load(&service, id)?;
            department.name = name;
            service.save_or_update(&mut department)?;
            output.one(DEPARTMENT_COLUMNS, &department)
        }
        DepartmentCommand::Remove { id } => {
            let department = load(&service, id)?;
            service
                .remove(&department)
                .map_err(|err| removal_error(&department, err))?;
            println!("Removed department {id}");
            Ok(())
        }
    }
}

pub(crate) fn load(
    service: &DepartmentService<SqliteDepartmentRepository<'_>>,
    id: DepartmentId,
) -> Result<Department, Box<dyn Error>> {
    service
        .find_by_id(id)?
        .ok_or_else(|| format!("department {id} not found").into())
}

/// Turns a blocked delete into a message naming the department.
fn removal_error(department: &Department, err: RepoError) -> Box<dyn Error> {
    if err.is_integrity_violation() {
        format!(
            "department `{}` is still in use by sellers; reassign or remove them first",
            department.name
        )
        .into()
    } else {
        err.into()
    }
}
