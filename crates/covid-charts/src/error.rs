//! Application-wide error types using thiserror.

use covid_common::CovidError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Error raised by one of the library crates.
    #[error(transparent)]
    Covid(#[from] CovidError),

    /// Configuration lists no input file.
    #[error("No input files configured")]
    NoInput,
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;
