use std::collections::BTreeMap;

use thiserror::Error;

mod cd;
mod exit;
mod path;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use path::PathCommand;

use super::ShellState;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("execution error: {0}")]
    ExecutionError(String),
    #[error("not a builtin: {0}")]
    NotFound(String),
}

/// What the shell does after a built-in returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A command run inside the shell process itself.
pub trait Builtin {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    Path(PathCommand),
}

impl Builtin for CommandType {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Flow, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, state),
            CommandType::Exit(cmd) => cmd.execute(args, state),
            CommandType::Path(cmd) => cmd.execute(args, state),
        }
    }
}

#[derive(Clone)]
pub struct BuiltinDispatcher {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for BuiltinDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinDispatcher {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        commands.insert("path", CommandType::Path(PathCommand::new()));
        Self { commands }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    /// Runs the built-in named `command`. Check [`Self::is_builtin`] first.
    pub fn dispatch(
        &self,
        command: &str,
        args: &[String],
        state: &mut ShellState,
    ) -> Result<Flow, CommandError> {
        let cmd = self
            .commands
            .get(command)
            .ok_or_else(|| CommandError::NotFound(command.to_string()))?;
        tracing::debug!(command, ?args, "running builtin");
        cmd.execute(args, state)
    }
}
