//! Application errors with suggestions and sysexits-compliant exit codes.

use std::io;

use thiserror::Error;
use tzclock_core::TzError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error(transparent)]
    Timezone(#[from] TzError),

    #[error("Event read failed")]
    EventRead,
}

impl AppError {
    /// Returns a helpful suggestion for resolving the error.
    pub fn suggestion(&self) -> String {
        match self {
            AppError::Terminal(_) => {
                "Terminal mode error. Try restarting your terminal.".to_string()
            }
            AppError::Timezone(_) => {
                "Use an IANA identifier such as 'Europe/Paris'. Run 'tzclock zones' to list them."
                    .to_string()
            }
            AppError::EventRead => {
                "Failed to read terminal events. Try restarting your terminal.".to_string()
            }
        }
    }

    /// Converts to UNIX sysexits.h-compliant exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Timezone(_) => 64,                       // EX_USAGE
            AppError::Terminal(_) | AppError::EventRead => 74, // EX_IOERR
        }
    }
}
