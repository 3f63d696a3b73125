//! Tracing setup.
//!
//! `TZCLOCK_LOG` names a log file; when set, output goes there through a
//! non-blocking appender. Without it, non-interactive commands log to
//! stderr, while the interactive UI runs unsubscribed — stderr shares the
//! terminal with the alternate screen and would scribble over it.

use std::io::IsTerminal;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[derive(Debug)]
pub struct TelemetryGuard {
    _guard: Option<WorkerGuard>,
}

impl TelemetryGuard {
    fn disabled() -> Self {
        Self { _guard: None }
    }
}

/// Init for non-interactive commands: log file if configured, stderr
/// otherwise.
pub fn init(default_level: &str) -> TelemetryGuard {
    match file_writer() {
        Some((writer, guard)) => install(default_level, writer, Some(guard)),
        None => install(default_level, BoxMakeWriter::new(std::io::stderr), None),
    }
}

/// Init for the interactive UI: log file if configured, otherwise disabled.
pub fn init_for_ui(default_level: &str) -> TelemetryGuard {
    match file_writer() {
        Some((writer, guard)) => install(default_level, writer, Some(guard)),
        None => TelemetryGuard::disabled(),
    }
}

fn install(
    default_level: &str,
    writer: BoxMakeWriter,
    guard: Option<WorkerGuard>,
) -> TelemetryGuard {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(writer);

    if subscriber.try_init().is_err() {
        return TelemetryGuard::disabled();
    }

    TelemetryGuard { _guard: guard }
}

fn file_writer() -> Option<(BoxMakeWriter, WorkerGuard)> {
    let path = log_file_path_from_env()?;
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            Some((BoxMakeWriter::new(non_blocking), guard))
        }
        Err(err) => {
            eprintln!(
                "Warning: failed to open log file {}: {}",
                path.display(),
                err
            );
            None
        }
    }
}

fn log_file_path_from_env() -> Option<PathBuf> {
    std::env::var("TZCLOCK_LOG").ok().map(PathBuf::from)
}
