use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Schema error: required column '{0}' is missing")]
    MissingColumn(String),

    #[error("Type error at row {row}, column '{column}': cannot read '{value}' ({reason})")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
        reason: String,
    },

    #[error("Row {row} has an empty '{column}'")]
    EmptyField { row: usize, column: String },

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to open '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
