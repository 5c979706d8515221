use anyhow::Result;
use clap::{Parser, Subcommand};

use sitekick::cli::{
    handle_catalog_command, handle_client_command, handle_expense_command, handle_payment_command,
    handle_project_command, handle_quote_command, handle_report_command,
};
use sitekick::config::{paths::SiteKickPaths, settings::Settings};
use sitekick::storage::Storage;

#[derive(Parser)]
#[command(
    name = "sitekick",
    version,
    about = "Business management for contractors, from the terminal",
    long_about = "SiteKick tracks a contractor's projects, clients, quotes, expenses \
                  and payments in local files. Quotes are built from Work and \
                  Material line items; profit and balance due are derived from the \
                  raw records every time, never stored."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Project management commands
    #[command(subcommand)]
    Project(sitekick::cli::ProjectCommands),

    /// Client management commands
    #[command(subcommand)]
    Client(sitekick::cli::ClientCommands),

    /// Quote management commands
    #[command(subcommand)]
    Quote(sitekick::cli::QuoteCommands),

    /// Expense tracking commands
    #[command(subcommand)]
    Expense(sitekick::cli::ExpenseCommands),

    /// Payment tracking commands
    #[command(subcommand)]
    Payment(sitekick::cli::PaymentCommands),

    /// Item catalog commands
    #[command(subcommand)]
    Catalog(sitekick::cli::CatalogCommands),

    /// Reports
    #[command(subcommand)]
    Report(sitekick::cli::ReportCommands),

    /// Initialize SiteKick with a starter catalog
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SiteKickPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Project(cmd)) => {
            handle_project_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Client(cmd)) => {
            handle_client_command(&storage, cmd)?;
        }
        Some(Commands::Quote(cmd)) => {
            handle_quote_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Payment(cmd)) => {
            handle_payment_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Catalog(cmd)) => {
            handle_catalog_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing SiteKick at: {}", paths.data_dir().display());
            sitekick::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("A starter catalog of common Work and Material items has been created.");
            println!("Run 'sitekick catalog list' to see it.");
        }
        Some(Commands::Config) => {
            println!("SiteKick Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default unit:    {}", settings.default_unit);
            if !settings.business.is_empty() {
                println!("  Business:        {}", settings.business.company_name);
            }
        }
        None => {
            println!("SiteKick - Business management for contractors");
            println!();
            println!("Run 'sitekick --help' for usage information.");
            println!("Run 'sitekick init' to set up a fresh installation.");
        }
    }

    Ok(())
}
