use std::{io, path::PathBuf};

use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use fintrack_config::{Config, ConfigError, ConfigManager};
use fintrack_core::{Clock, ProjectionError};
use fintrack_domain::{DateWindow, DateWindowError};

use crate::cli::formatters::CliFormatters;
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::CommandRegistry;
use crate::cli::system_clock::SystemClock;
use crate::errors::SnapshotError;
use crate::snapshot::{load_snapshot, ForecastSnapshot};

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

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("No snapshot loaded. Use `load <path>` first.")]
    SnapshotNotLoaded,
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Projection(#[from] ProjectionError),
    #[error(transparent)]
    Window(#[from] DateWindowError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("exit requested")]
    ExitRequested,
}

/// Mutable state shared by every shell command.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub clock: Box<dyn Clock>,
    pub snapshot: Option<ForecastSnapshot>,
    pub snapshot_path: Option<PathBuf>,
    pub window: Option<DateWindow>,
    pub running: bool,
    pub last_command: Option<String>,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::from_env()?;
        let config = config_manager.load()?;
        let mut context = Self::with_parts(mode, config_manager, config, Box::new(SystemClock));
        context.auto_load_last();
        Ok(context)
    }

    pub fn with_parts(
        mode: CliMode,
        config_manager: ConfigManager,
        config: Config,
        clock: Box<dyn Clock>,
    ) -> Self {
        let context = Self {
            mode,
            registry: CommandRegistry::builtin(),
            config_manager,
            config,
            clock,
            snapshot: None,
            snapshot_path: None,
            window: None,
            running: true,
            last_command: None,
        };
        context.apply_output_preferences();
        context
    }

    fn auto_load_last(&mut self) {
        if self.mode != CliMode::Interactive {
            return;
        }
        let Some(path) = self.config.last_snapshot.clone() else {
            return;
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "last snapshot no longer exists");
            return;
        }
        match load_snapshot(&path) {
            Ok(snapshot) => {
                output::info(format!("Reopened snapshot {}.", path.display()));
                self.snapshot = Some(snapshot);
                self.snapshot_path = Some(path);
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to reopen last snapshot");
                output::warning(format!("Could not reopen last snapshot: {}", err));
            }
        }
    }

    pub(crate) fn apply_output_preferences(&self) {
        output::set_preferences(OutputPreferences {
            color_enabled: self.config.ui_color_enabled,
            quiet_mode: false,
        });
    }

    pub(crate) fn formatters(&self) -> CliFormatters {
        CliFormatters::new(&self.config)
    }

    pub(crate) fn require_snapshot(&self) -> Result<&ForecastSnapshot, CommandError> {
        self.snapshot.as_ref().ok_or(CommandError::SnapshotNotLoaded)
    }

    /// Window set with `window`, or `default_window_days` starting today.
    pub(crate) fn active_window(&self) -> Result<DateWindow, CommandError> {
        match self.window {
            Some(window) => Ok(window),
            None => Ok(DateWindow::from_start(
                self.clock.today(),
                self.config.default_window_days,
            )?),
        }
    }

    pub(crate) fn persist_config(&self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.registry.names().collect();
        names.push("quit");
        names
    }

    pub(crate) fn prompt(&self) -> String {
        let label = self
            .snapshot_path
            .as_ref()
            .and_then(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "no-snapshot".to_string());
        format!("fintrack [{}] ⮞ ", label)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            tracing::debug!(command, args = args.len(), "dispatching command");
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        crate::cli::shell::handle_line(self, line)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        if let Some(best) = closest_command(self.command_names(), input) {
            output::info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::SnapshotNotLoaded => {
                output::error(CommandError::SnapshotNotLoaded);
                Ok(())
            }
            CommandError::Window(err) => {
                output::error(err);
                output::hint("Set an explicit `window` or lower `default_window_days`.");
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

/// Closest known command within an edit distance of three.
fn closest_command<'a>(
    names: impl IntoIterator<Item = &'a str>,
    input: &str,
) -> Option<&'a str> {
    let needle = input.to_ascii_lowercase();
    names
        .into_iter()
        .map(|name| (levenshtein(name, &needle), name))
        .filter(|(distance, _)| *distance <= 3)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}
