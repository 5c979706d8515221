//! Reports for SiteKick
//!
//! Each report is a plain struct built from storage by `generate`, with
//! `format_terminal` for display and `export_csv` for files. Reports never
//! mutate storage and never cache; the numbers are recomputed every run.

pub mod business_overview;
pub mod project_summary;
pub mod quote_breakdown;

pub use business_overview::BusinessOverviewReport;
pub use project_summary::ProjectSummaryReport;
pub use quote_breakdown::QuoteBreakdownReport;
