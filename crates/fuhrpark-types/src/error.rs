//! Error types for fuhrpark
//!
//! One taxonomy for the whole application: the guards, the domain entities
//! and the services all report bad input through the same kinds, so the CLI
//! only has to render a single error type.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0} must not be blank")]
    Blank(String),

    #[error("{name} must be between {min} and {max}")]
    OutOfRange {
        name: String,
        min: String,
        max: String,
    },

    #[error("{0} must be greater than zero")]
    NotPositive(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    Duplicate(String),

    #[error("{0}")]
    UnknownReference(String),

    #[error("depreciation of {amount} exceeds the residual value of {residual}")]
    ValueUnderflow { amount: Decimal, residual: Decimal },
}

pub type Result<T> = std::result::Result<T, Error>;
