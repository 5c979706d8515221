//! Report CLI commands
//!
//! Each report prints to the terminal by default; `--csv FILE` writes the
//! same data as CSV instead.

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{SiteKickError, SiteKickResult};
use crate::models::ProjectStatus;
use crate::reports::{BusinessOverviewReport, ProjectSummaryReport, QuoteBreakdownReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Line-by-line breakdown of one quote
    Quote {
        /// Quote ID or share code
        quote: String,
        /// Write CSV to this file instead of printing
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Full financial summary of one project
    Project {
        /// Project title or ID
        project: String,
        /// Write CSV to this file instead of printing
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Totals across all projects
    Overview {
        /// Filter by status (active, completed, archived)
        #[arg(short, long)]
        status: Option<String>,
        /// Write CSV to this file instead of printing
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> SiteKickResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        ReportCommands::Quote { quote, csv } => {
            let report = QuoteBreakdownReport::generate(storage, &quote)?;
            match csv {
                Some(path) => write_csv(&path, |w| report.export_csv(w))?,
                None => print!("{}", report.format_terminal(symbol)),
            }
        }

        ReportCommands::Project { project, csv } => {
            let report = ProjectSummaryReport::generate(storage, &project)?;
            match csv {
                Some(path) => write_csv(&path, |w| report.export_csv(w))?,
                None => print!("{}", report.format_terminal(symbol)),
            }
        }

        ReportCommands::Overview { status, csv } => {
            let status = match status {
                Some(s) => Some(ProjectStatus::parse(&s).ok_or_else(|| {
                    SiteKickError::Validation(format!(
                        "Invalid status: '{}'. Valid statuses: active, completed, archived",
                        s
                    ))
                })?),
                None => None,
            };

            let report = BusinessOverviewReport::generate(storage, status)?;
            match csv {
                Some(path) => write_csv(&path, |w| report.export_csv(w))?,
                None => print!("{}", report.format_terminal(symbol)),
            }
        }
    }

    Ok(())
}

fn write_csv<F>(path: &PathBuf, export: F) -> SiteKickResult<()>
where
    F: FnOnce(&mut File) -> SiteKickResult<()>,
{
    let mut file =
        File::create(path).map_err(|e| SiteKickError::Export(format!("{}: {}", path.display(), e)))?;
    export(&mut file)?;
    println!("Wrote {}", path.display());
    Ok(())
}
