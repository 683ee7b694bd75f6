use std::io;

use thiserror::Error;

/// Errors raised by the grid model for malformed collaborator input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Top-level failures of the terminal front-end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("logger could not be installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}
