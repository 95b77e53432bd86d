use tracing::debug;

use crate::errors::A2aSpecError;

/// Unwraps a required parameter, failing with `InvalidArgument` when it is absent.
pub fn require<T>(param: &str, value: Option<T>) -> Result<T, A2aSpecError> {
    match value {
        Some(value) => Ok(value),
        None => {
            debug!(param, "required parameter missing");
            Err(A2aSpecError::missing(param))
        }
    }
}
