use thiserror::Error;

use crate::constant::MAX_ARGUMENT_LENGTH;

/// A raw token, or the position of one, is structurally invalid.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The token is empty or longer than [`MAX_ARGUMENT_LENGTH`].
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value token was expected past the end of the argument list.
    #[error("missing value (index {index} is out of range for {count} arguments)")]
    OutOfRange {
        /// The index of the expected value token.
        index: usize,
        /// The number of arguments available.
        count: usize,
    },
}

/// Reject a token which is empty or longer than [`MAX_ARGUMENT_LENGTH`] bytes.
pub fn validate_argument(token: &str) -> Result<(), ValidationError> {
    if token.is_empty() {
        return Err(ValidationError::InvalidArgument(
            "argument cannot be empty".to_string(),
        ));
    }

    if token.len() > MAX_ARGUMENT_LENGTH {
        return Err(ValidationError::InvalidArgument(format!(
            "argument too long ({} > {MAX_ARGUMENT_LENGTH} bytes)",
            token.len()
        )));
    }

    Ok(())
}

/// Reject an `index` which does not address one of the `count` arguments.
pub fn validate_index(index: usize, count: usize) -> Result<(), ValidationError> {
    if index >= count {
        Err(ValidationError::OutOfRange { index, count })
    } else {
        Ok(())
    }
}
