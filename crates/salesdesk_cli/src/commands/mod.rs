//! Subcommand handlers and shared output helpers.

use crate::table::{render, Column};
use serde::Serialize;

pub mod department;
pub mod seller;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    pub fn list<T: Serialize>(self, columns: &[Column<T>], rows: &[T]) -> CliResult {
        if self.json {
            println!("{}", serde_json::to_string_pretty(rows)?);
        } else if rows.is_empty() {
            println!("(no rows)");
        } else {
            print!("{}", render(columns, rows));
        }
        Ok(())
    }

    pub fn one<T: Serialize>(self, columns: &[Column<T>], row: &T) -> CliResult {
        self.list(columns, std::slice::from_ref(row))
    }
}
