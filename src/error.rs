//! Error types for the RTA-TB core

use thiserror::Error;

/// Main error type for the RTA-TB core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RtaTbError {
    #[error("Cannot add - a points value for this time already exists. ({0} ms)")]
    DuplicateKey(i32),

    #[error("Cannot add - Max IGT is not a valid time. ({0:?})")]
    InvalidTime(String),

    #[error("Cannot add - Points must be a whole number. ({0:?})")]
    NonNumericPoints(String),

    #[error("Cannot add - Points must be a positive number. ({0})")]
    NegativePoints(i32),

    #[error("Invalid setting {field}: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("Malformed configuration field {field}: {value:?}")]
    MalformedConfiguration { field: &'static str, value: String },

    #[error("Document error: {0}")]
    Document(String),
}

impl RtaTbError {
    /// True for the errors raised by the boundary validation layer
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RtaTbError::InvalidTime(_)
                | RtaTbError::NonNumericPoints(_)
                | RtaTbError::NegativePoints(_)
                | RtaTbError::InvalidSetting { .. }
        )
    }
}

impl From<serde_json::Error> for RtaTbError {
    fn from(err: serde_json::Error) -> Self {
        RtaTbError::Document(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<RtaTbError> for pyo3::PyErr {
    fn from(err: RtaTbError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyKeyError, PyValueError};

        match err {
            RtaTbError::DuplicateKey(_) => PyKeyError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Result type alias for the RTA-TB core
pub type Result<T> = std::result::Result<T, RtaTbError>;
