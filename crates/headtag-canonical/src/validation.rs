use thiserror::Error;

/// A value that failed a shape check.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// `value` does not have the shape required for `what`.
    #[error("malformed {what}: '{value}'")]
    Malformed {
        /// Kind of value being checked.
        what: &'static str,
        /// The rejected text.
        value: String,
    },
}
