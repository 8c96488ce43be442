use std::{
    io,
    path::{Path, PathBuf},
};

use showbiz_config::{Config, ConfigError, ConfigManager};
use showbiz_core::{Clock, CoreError, FinanceService, LoadSummary};
use showbiz_storage_text::TextRecordStorage;
use thiserror::Error;

use crate::cli::{commands, output, registry::CommandRegistry, system_clock::SystemClock};
use crate::errors::CliError;

/// Overrides the base directory holding `config/config.json` and the default records file.
pub const HOME_ENV: &str = "SHOWBIZ_HOME";
const APP_DIR: &str = "Showbiz";
const RECORDS_FILE_NAME: &str = "finance_records.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Failure of a single command; the shell reports it and keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(
        "{} could not be loaded at startup; run `load` after fixing it or `save <path>` to choose a file",
        .0.display()
    )]
    RecordsFileProtected(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl CommandError {
    /// Whether the failure came from how the command was typed.
    pub fn shows_usage_hint(&self) -> bool {
        matches!(self, Self::InvalidArguments(_))
    }
}

pub type CommandResult = Result<(), CommandError>;

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub finance: FinanceService,
    pub storage: TextRecordStorage,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub records_path: PathBuf,
    /// Set while the records file failed to load; nothing may overwrite it implicitly.
    pub records_file_protected: bool,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    /// Builds a context from the user's config and hydrates records from disk.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let home = std::env::var_os(HOME_ENV).map(PathBuf::from);
        let base = home.clone().unwrap_or_else(default_base_dir);
        let config_manager = ConfigManager::with_base_dir(base)?;
        let config = config_manager.load()?;
        let records_path = match (&config.records_file, &home) {
            (Some(path), _) => path.clone(),
            (None, Some(home)) => home.join(RECORDS_FILE_NAME),
            (None, None) => config.resolve_records_file(),
        };

        let mut context = Self::with_parts(
            mode,
            config_manager,
            config,
            records_path,
            Box::new(SystemClock),
        );
        context.hydrate();
        Ok(context)
    }

    /// Assembles a context without touching the filesystem.
    pub fn with_parts(
        mode: CliMode,
        config_manager: ConfigManager,
        config: Config,
        records_path: PathBuf,
        clock: Box<dyn Clock>,
    ) -> Self {
        output::set_color_enabled(mode == CliMode::Interactive);
        let finance =
            FinanceService::new(clock).with_category_kind_enforcement(config.enforce_category_kind);
        let storage = TextRecordStorage::new(config.codec_options());
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        Self {
            mode,
            registry,
            finance,
            storage,
            config_manager,
            config,
            records_path,
            records_file_protected: false,
            last_command: None,
            running: true,
        }
    }

    /// Loads the records file when it exists. A broken file leaves the store empty
    /// and protects the file from autosave until it is loaded or saved explicitly.
    pub fn hydrate(&mut self) {
        if !self.records_path.exists() {
            tracing::debug!(path = %self.records_path.display(), "no records file yet");
            return;
        }
        let path = self.records_path.clone();
        match self.load_from(&path) {
            Ok(summary) => tracing::info!(loaded = summary.loaded, "startup load complete"),
            Err(err) => {
                self.records_file_protected = true;
                tracing::warn!(path = %path.display(), error = %err, "startup load failed");
                output::warning(format!("Could not load {}: {err}", path.display()));
                output::hint("Autosave is paused so the file is not overwritten.");
            }
        }
    }

    pub fn load_from(&mut self, path: &Path) -> Result<LoadSummary, CoreError> {
        let summary = self.finance.load(&self.storage, path)?;
        if path == self.records_path {
            self.records_file_protected = false;
        }
        Ok(summary)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        format!("showbiz ({} records)> ", self.finance.store().len())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        match self.registry.handler(command) {
            Some(handler) => match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            },
            None => {
                self.suggest_command(raw);
                Ok(LoopControl::Continue)
            }
        }
    }

    fn suggest_command(&self, raw: &str) {
        output::warning(format!("Unknown command `{raw}`."));
        let prefix: String = raw.chars().take(2).collect();
        let suggestions = self.registry.suggestions(&prefix);
        if suggestions.is_empty() {
            output::hint("Type `help` to list available commands.");
        } else {
            output::hint(format!("Did you mean: {}?", suggestions.join(", ")));
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            err if err.shows_usage_hint() => {
                output::error(err);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                tracing::warn!(error = %other, "command failed");
                output::error(other);
                Ok(())
            }
        }
    }
}

fn default_base_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_argument_errors_show_the_usage_hint() {
        assert!(CommandError::InvalidArguments("Usage: list".into()).shows_usage_hint());
        assert!(!CommandError::Config(ConfigError::Serde("key must be a string".into()))
            .shows_usage_hint());
        assert!(!CommandError::RecordsFileProtected(PathBuf::from("records.csv"))
            .shows_usage_hint());
    }
}
