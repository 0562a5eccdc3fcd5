use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    InvalidRecord(String),
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidRecord(msg) => {
                write!(f, "invalid record: {msg}")
            }
            ModelError::OutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(f, "{field} out of range: {value} not in [{min}, {max}]")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
