//! `salesdesk seller ...`

use super::{department, CliResult, Output};
use crate::table::Column;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use log::info;
use rusqlite::Connection;
use salesdesk_core::{
    DepartmentId, DepartmentService, Salary, Seller, SellerId, SellerService,
    SqliteDepartmentRepository, SqliteSellerRepository,
};
use std::rc::Rc;

const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

pub const SELLER_COLUMNS: &[Column<Seller>] = &[
    Column {
        header: "Id",
        value: |seller| seller.id.map(|id| id.to_string()).unwrap_or_default(),
    },
    Column {
        header: "Name",
        value: |seller| seller.name.clone(),
    },
    Column {
        header: "Email",
        value: |seller| seller.email.clone(),
    },
    Column {
        header: "Birth Date",
        value: |seller| seller.birth_date.format(DISPLAY_DATE_FORMAT).to_string(),
    },
    Column {
        header: "Base Salary",
        value: |seller| seller.base_salary.to_string(),
    },
    Column {
        header: "Department",
        value: |seller| seller.department.name.clone(),
    },
];

#[derive(Debug, Args)]
pub struct SellerArgs {
    #[command(subcommand)]
    pub command: SellerCommand,
}

#[derive(Debug, Subcommand)]
pub enum SellerCommand {
    /// List sellers, optionally only those of one department
    List {
        #[arg(long)]
        department: Option<DepartmentId>,
    },
    /// Show one seller
    Show { id: SellerId },
    /// Create a seller
    Add(AddArgs),
    /// Change fields of an existing seller
    Update(UpdateArgs),
    /// Delete a seller
    Remove { id: SellerId },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// YYYY-MM-DD
    #[arg(long)]
    pub birth_date: NaiveDate,
    /// Decimal amount, e.g. 3000.00
    #[arg(long)]
    pub salary: Salary,
    #[arg(long)]
    pub department: DepartmentId,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: SellerId,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub birth_date: Option<NaiveDate>,
    #[arg(long)]
    pub salary: Option<Salary>,
    #[arg(long)]
    pub department: Option<DepartmentId>,
}

pub fn execute(conn: &Connection, args: SellerArgs, output: Output) -> CliResult {
    let departments = DepartmentService::new(SqliteDepartmentRepository::try_new(conn)?);
    let sellers = SellerService::new(SqliteSellerRepository::try_new(conn)?);

    match args.command {
        SellerCommand::List { department: None } => {
            output.list(SELLER_COLUMNS, &sellers.find_all()?)
        }
        SellerCommand::List {
            department: Some(id),
        } => {
            let department = department::load(&departments, id)?;
            output.list(SELLER_COLUMNS, &sellers.find_by_department(&department)?)
        }
        SellerCommand::Show { id } => output.one(SELLER_COLUMNS, &load(&sellers, id)?),
        SellerCommand::Add(add) => {
            let department = Rc::new(department::load(&departments, add.department)?);
            let mut seller = Seller::new(
                add.name,
                add.email,
                add.birth_date,
                add.salary,
                department,
            );
            sellers.save_or_update(&mut seller)?;
            output.one(SELLER_COLUMNS, &seller)
        }
        SellerCommand::Update(update) => {
            let mut seller = load(&sellers, update.id)?;
            if let Some(name) = update.name {
                seller.name = name;
            }
            if let Some(email) = update.email {
                seller.email = email;
            }
            if let Some(birth_date) = update.birth_date {
                seller.birth_date = birth_date;
            }
            if let Some(salary) = update.salary {
                seller.base_salary = salary;
            }
            if let Some(id) = update.department {
                seller.department = Rc::new(department::load(&departments, id)?);
            }
            sellers.save_or_update(&mut seller)?;
            output.one(SELLER_COLUMNS, &seller)
        }
        SellerCommand::Remove { id } => {
            let seller = load(&sellers, id)?;
            sellers.remove(&seller)?;
            info!("event=cli_seller_remove module=cli status=ok id={id}");
            println!("Removed seller {id}");
            Ok(())
        }
    }
}

fn load(
    service: &SellerService<SqliteSellerRepository<'_>>,
    id: SellerId,
) -> Result<Seller, Box<dyn std::error::Error>> {
    service
        .find_by_id(id)?
        .ok_or_else(|| format!("seller {id} not found").into())
}
