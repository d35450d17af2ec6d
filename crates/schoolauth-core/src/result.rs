//! Convenience result type alias for SchoolAuth.

use crate::error::AppError;

/// A specialized `Result` type for SchoolAuth operations.
pub type AppResult<T> = Result<T, AppError>;
