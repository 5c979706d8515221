//! Display formatting for terminal output
//!
//! List views use `tabled`; detail views are hand-aligned. All currency
//! formatting goes through `Money`'s fixed-point display.

pub mod catalog;
pub mod client;
pub mod project;
pub mod quote;

pub use catalog::format_catalog_list;
pub use client::{format_client_details, format_client_list};
pub use project::{format_project_details, format_project_list};
pub use quote::{format_quote_detail, format_quote_list};
