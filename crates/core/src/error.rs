use crate::validation::ValidationError;

/// Errors raised by core domain logic.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}
