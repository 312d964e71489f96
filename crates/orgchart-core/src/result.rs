//! Convenience result type alias for OrgChart.

use crate::error::AppError;

/// A specialized `Result` type for OrgChart operations.
pub type AppResult<T> = Result<T, AppError>;
