use rustyline::error::ReadlineError;
use showbiz_config::ConfigError;
use showbiz_core::CoreError;
use thiserror::Error;

/// Failures that end a shell session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
