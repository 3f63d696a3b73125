#![deny(clippy::all)]

pub mod app;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod telemetry;

pub use commands::Cli;
pub use commands::Commands;
pub use commands::OutputFormat;
pub use commands::PickerStyle;
pub use error::AppError;
