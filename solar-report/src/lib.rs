//! Report rendering for solar suitability query results.
//!
//! Turns a [`solar_core::query::QueryResult`] into chart series, tables, a
//! text summary and a paginated export document.

pub mod config;
pub mod document;
pub mod field;
pub mod models;
pub mod notice;
pub mod report;
pub mod series;
pub mod summary;
pub mod table;

pub use config::ReportConfig;
pub use report::{Report, ReportSession};
