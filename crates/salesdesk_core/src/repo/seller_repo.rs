//! Seller repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist sellers with their `DepartmentId` foreign key.
//! - Read sellers joined with their department in a single query, so a
//!   listing of N sellers never issues N extra department lookups.
//!
//! # Invariants
//! - Within one multi-row read, sellers of the same department share one
//!   `Rc<Department>`. The id → department map lives for that call only.
//! - `update` replaces every column including `DepartmentId` and performs no
//!   affected-row check.

use super::schema::{ensure_connection_ready, DEPARTMENT_COLUMNS, SELLER_COLUMNS};
use super::{RepoError, RepoResult};
use crate::model::department::{Department, DepartmentId};
use crate::model::salary::Salary;
use crate::model::seller::{Seller, SellerId};
use log::debug;
use rusqlite::{params, Connection, Params, Row};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::rc::Rc;

const SELLER_JOIN_SQL: &str = "SELECT
    seller.Id AS Id,
    seller.Name AS Name,
    seller.Email AS Email,
    seller.BirthDate AS BirthDate,
    seller.BaseSalary AS BaseSalary,
    seller.DepartmentId AS DepartmentId,
    department.Name AS DepName
FROM seller
INNER JOIN department ON seller.DepartmentId = department.Id";

/// Persistence contract for sellers.
pub trait SellerRepository {
    /// Inserts `seller` and assigns its new id.
    fn insert(&self, seller: &mut Seller) -> RepoResult<SellerId>;
    /// Replaces every column of the row with `seller.id`.
    fn update(&self, seller: &Seller) -> RepoResult<()>;
    fn delete_by_id(&self, id: SellerId) -> RepoResult<()>;
    fn find_by_id(&self, id: SellerId) -> RepoResult<Option<Seller>>;
    fn find_all(&self) -> RepoResult<Vec<Seller>>;
    /// Sellers of `department`, ordered by name.
    fn find_by_department(&self, department: &Department) -> RepoResult<Vec<Seller>>;
}

/// SQLite-backed seller repository.
pub struct SqliteSellerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSellerRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(
            conn,
            &[("department", DEPARTMENT_COLUMNS), ("seller", SELLER_COLUMNS)],
        )?;
        Ok(Self { conn })
    }

    fn query_sellers(&self, sql: &str, params: impl Params) -> RepoResult<Vec<Seller>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut departments: HashMap<DepartmentId, Rc<Department>> = HashMap::new();
        let mut sellers = Vec::new();

        while let Some(row) = rows.next()? {
            let department = shared_department(&mut departments, row)?;
            sellers.push(parse_seller_row(row, department)?);
        }

        Ok(sellers)
    }
}

impl SellerRepository for SqliteSellerRepository<'_> {
    fn insert(&self, seller: &mut Seller) -> RepoResult<SellerId> {
        let department_id = seller
            .department
            .id
            .ok_or(RepoError::Unpersisted("department"))?;

        let changed = self.conn.execute(
            "INSERT INTO seller (
                Name,
                Email,
                BirthDate,
                BaseSalary,
                DepartmentId
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                seller.name.as_str(),
                seller.email.as_str(),
                seller.birth_date,
                seller.base_salary.cents(),
                department_id,
            ],
        )?;
        if changed != 1 {
            return Err(RepoError::UnexpectedRowCount {
                expected: 1,
                actual: changed,
            });
        }

        let id = self.conn.last_insert_rowid();
        seller.id = Some(id);
        debug!("event=seller_insert module=repo status=ok id={id} department_id={department_id}");
        Ok(id)
    }

    fn update(&self, seller: &Seller) -> RepoResult<()> {
        let id = seller.id.ok_or(RepoError::Unpersisted("seller"))?;
        let department_id = seller
            .department
            .id
            .ok_or(RepoError::Unpersisted("department"))?;

        let changed = self.conn.execute(
            "UPDATE seller
             SET
                Name = ?1,
                Email = ?2,
                BirthDate = ?3,
                BaseSalary = ?4,
                DepartmentId = ?5
             WHERE Id = ?6;",
            params![
                seller.name.as_str(),
                seller.email.as_str(),
                seller.birth_date,
                seller.base_salary.cents(),
                department_id,
                id,
            ],
        )?;
        debug!("event=seller_update module=repo status=ok id={id} rows={changed}");
        Ok(())
    }

    fn delete_by_id(&self, id: SellerId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM seller WHERE Id = ?1;", [id])?;
        debug!("event=seller_delete module=repo status=ok id={id} rows={changed}");
        Ok(())
    }

    fn find_by_id(&self, id: SellerId) -> RepoResult<Option<Seller>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELLER_JOIN_SQL} WHERE seller.Id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            let department = Rc::new(parse_department_columns(row)?);
            return Ok(Some(parse_seller_row(row, department)?));
        }

        Ok(None)
    }

    fn find_all(&self) -> RepoResult<Vec<Seller>> {
        self.query_sellers(&format!("{SELLER_JOIN_SQL};"), [])
    }

    fn find_by_department(&self, department: &Department) -> RepoResult<Vec<Seller>> {
        let department_id = department.id.ok_or(RepoError::Unpersisted("department"))?;
        self.query_sellers(
            &format!("{SELLER_JOIN_SQL} WHERE seller.DepartmentId = ?1 ORDER BY seller.Name;"),
            [department_id],
        )
    }
}

fn shared_department(
    departments: &mut HashMap<DepartmentId, Rc<Department>>,
    row: &Row<'_>,
) -> RepoResult<Rc<Department>> {
    let department_id: DepartmentId = row.get("DepartmentId")?;
    let department = match departments.entry(department_id) {
        Entry::Occupied(entry) => Rc::clone(entry.get()),
        Entry::Vacant(entry) => Rc::clone(entry.insert(Rc::new(parse_department_columns(row)?))),
    };
    Ok(department)
}

fn parse_department_columns(row: &Row<'_>) -> RepoResult<Department> {
    Ok(Department::with_id(
        row.get("DepartmentId")?,
        row.get::<_, String>("DepName")?,
    ))
}

fn parse_seller_row(row: &Row<'_>, department: Rc<Department>) -> RepoResult<Seller> {
    Ok(Seller {
        id: Some(row.get("Id")?),
        name: row.get("Name")?,
        email: row.get("Email")?,
        birth_date: row.get("BirthDate")?,
        base_salary: Salary::from_cents(row.get("BaseSalary")?),
        department,
    })
}
