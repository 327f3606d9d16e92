use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Failed to persist catalog file: {0}")]
    PersistError(#[from] tempfile::PersistError),

    #[error("{field} '{value}' cannot be stored in the catalog file")]
    UnrepresentableField { field: &'static str, value: String },

    #[error("A movie with id {0} already exists")]
    DuplicateMovie(i32),

    #[error("Other error: {0}")]
    Other(String),
}

/// Why a single record line could not be turned into a movie or actor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("invalid {field} '{value}': {source}")]
    InvalidDate {
        field: &'static str,
        value: String,
        source: chrono::ParseError,
    },

    #[error("invalid {field} '{value}': {source}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        source: std::num::ParseFloatError,
    },
}
