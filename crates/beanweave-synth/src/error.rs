//! Error types for synthesis runs

use beanweave_core::ModelError;
use thiserror::Error;

/// Result type alias for synthesis operations
pub type SynthResult<T> = Result<T, SynthError>;

/// Error type for synthesis runs
///
/// Everything here aborts the run. Recoverable conditions such as name
/// collisions are reported through [`crate::Outcome`] instead.
#[derive(Error, Debug)]
pub enum SynthError {
    /// A field has no schema property and is not the any-attribute map
    #[error("'{field}' not found in {known:?} of {class}")]
    UnknownProperty {
        class: String,
        field: String,
        known: Vec<String>,
    },

    /// A schema property has no backing field
    #[error("property '{field}' of {class} has no backing field")]
    MissingField { class: String, field: String },

    /// A pass option was requested that no synthesizer provides
    #[error("unknown pass option: {0}")]
    UnknownPass(String),

    /// A pass needs configuration that was not given
    #[error("-{option} requires {what}")]
    MissingArgument { option: String, what: String },

    /// Model error
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl SynthError {
    /// Returns a stable numeric code for reporting
    pub fn error_code(&self) -> u32 {
        match self {
            SynthError::UnknownProperty { .. } => 100,
            SynthError::MissingField { .. } => 101,
            SynthError::UnknownPass(_) => 102,
            SynthError::MissingArgument { .. } => 103,
            SynthError::Model(inner) => inner.error_code(),
        }
    }

    /// Whether the error reflects an inconsistent class model rather than a
    /// usage mistake.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            SynthError::UnknownPass(_) | SynthError::MissingArgument { .. }
        )
    }
}
