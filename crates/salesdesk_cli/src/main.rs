//! SalesDesk command-line front end.
//!
//! # Responsibility
//! - List, show, create, edit and remove departments and sellers.
//! - Wire configuration, logging and the database connection before any
//!   command runs.

use clap::{Parser, Subcommand};
use salesdesk_core::{db, init_from_config, AppConfig};
use std::path::PathBuf;

mod commands;
mod table;

#[derive(Debug, Parser)]
#[command(name = "salesdesk", version)]
#[command(about = "SalesDesk - departments and sellers", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(long, global = true, env = "SALESDESK_CONFIG")]
    config: Option<PathBuf>,

    /// SQLite database file (overrides config and SALESDESK_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Department operations
    Department(commands::department::DepartmentArgs),
    /// Seller operations
    Seller(commands::seller::SellerArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> commands::CliResult {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.db {
        config.database.path = path;
    }
    init_from_config(&config.logging)?;

    let conn = db::connect(&config.database)?;
    let output = commands::Output { json: cli.json };

    match cli.command {
        Commands::Department(args) => commands::department::execute(&conn, args, output),
        Commands::Seller(args) => commands::seller::execute(&conn, args, output),
    }
}
