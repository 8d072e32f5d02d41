use thiserror::Error;

/// Structural problems with the reference data a deployment ships with.
///
/// These are raised while loading the monthly reference table or the utility
/// directory and stop the pipeline before any query is accepted.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("failed to read {source_name}: {source}")]
    Csv {
        source_name: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("{source_name} row {row}: {message}")]
    InvalidRow {
        source_name: &'static str,
        row: usize,
        message: String,
    },

    #[error("monthly reference table has {0} entries, expected 12")]
    WrongMonthCount(usize),

    #[error("monthly reference table lists {0} more than once")]
    DuplicateMonth(String),

    #[error("monthly insolation shares sum to {0}, expected 1")]
    ShareSum(f64),

    #[error("raw sample scale must be positive and finite, got {0}")]
    InvalidScale(f64),

    #[error("utility directory is empty")]
    EmptyDirectory,

    #[error("utility directory lists postal code {0} more than once")]
    DuplicatePostalCode(String),
}
