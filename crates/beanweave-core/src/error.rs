//! Error types for the class model

use thiserror::Error;

/// Result type alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Error type for loading and querying the class model
#[derive(Error, Debug)]
pub enum ModelError {
    /// A Java type string could not be parsed
    #[error("invalid type '{input}': {reason}")]
    InvalidType { input: String, reason: String },

    /// A class was looked up that is not part of the generated set
    #[error("unknown class: {0}")]
    UnknownClass(String),

    /// Two generated classes share a qualified name
    #[error("duplicate class: {0}")]
    DuplicateClass(String),

    /// The parent chain of a class loops back on itself
    #[error("cyclic inheritance involving {0}")]
    CyclicInheritance(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ModelError {
    /// Returns a stable numeric code for reporting
    pub fn error_code(&self) -> u32 {
        match self {
            ModelError::InvalidType { .. } => 1,
            ModelError::UnknownClass(_) => 2,
            ModelError::DuplicateClass(_) => 3,
            ModelError::CyclicInheritance(_) => 4,
            ModelError::Config(_) => 5,
            ModelError::Json(_) => 6,
            ModelError::Io(_) => 7,
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
