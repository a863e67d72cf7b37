//! Convenience result type alias for the Conspects client.

use crate::error::AppError;

/// A specialized `Result` type for Conspects operations.
pub type AppResult<T> = Result<T, AppError>;
