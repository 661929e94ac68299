//! Error types for arrkit operations.
//!
//! Every fallible operation reports one of two failure kinds: the inputs have
//! incompatible shapes, or the operation has nothing to return.

use thiserror::Error;

/// Main error type for arrkit operations.
///
/// # Examples
///
/// ```
/// use arrkit::error::ArrayError;
///
/// let err = ArrayError::ShapeMismatch {
///     expected: "3 coefficients".to_string(),
///     actual: "4".to_string(),
/// };
/// assert!(err.to_string().contains("shape mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// Input dimensions are incompatible with the operation.
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Expected shape description
        expected: String,
        /// Actual shape found
        actual: String,
    },

    /// The operation's candidate set is empty, so there is no value to return.
    #[error("empty result: {context}")]
    EmptyResult {
        /// What was being computed
        context: String,
    },
}

impl ArrayError {
    /// Create a shape mismatch error with descriptive context.
    #[must_use]
    pub fn shape_mismatch(context: &str, expected: impl ToString, actual: impl ToString) -> Self {
        Self::ShapeMismatch {
            expected: format!("{context}={}", expected.to_string()),
            actual: actual.to_string(),
        }
    }

    /// Create an empty result error.
    #[must_use]
    pub fn empty_result(context: &str) -> Self {
        Self::EmptyResult {
            context: context.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, ArrayError>;
