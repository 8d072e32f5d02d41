//! Core types and metrics calculation for solar suitability point queries.
//!
//! A query starts from a raw imagery sample and a validated monthly
//! reference table, and ends in an immutable [`query::QueryResult`] that the
//! report crate turns into charts, tables and export documents.

pub mod calculator;
pub mod error;
pub mod location;
pub mod month;
pub mod query;
pub mod reference_table;
pub mod sample;
pub mod utility;

pub use error::ConfigurationError;
