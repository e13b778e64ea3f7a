use std::path::PathBuf;

mod executor;
mod input;

pub use executor::{Launched, LineExecutor};
pub use input::Input;

use crate::{
    core::{commands::Flow, SearchPath, ShellState},
    error::ShellError,
    flags::Flags,
};

pub const PROMPT: &str = "wish> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Batch(PathBuf),
}

/// Startup settings gathered from the command line.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub mode: Mode,
    pub prompt: String,
    pub search_path: SearchPath,
    pub debug: bool,
}

impl ShellConfig {
    pub fn from_flags(flags: &Flags) -> Result<Self, ShellError> {
        let mode = match flags.positional() {
            [] => Mode::Interactive,
            [file] => Mode::Batch(PathBuf::from(file)),
            more => return Err(ShellError::Usage(more.len())),
        };

        Ok(ShellConfig {
            mode,
            prompt: PROMPT.to_string(),
            search_path: SearchPath::default(),
            debug: flags.is_set("debug"),
        })
    }
}

pub struct Shell {
    input: Input,
    state: ShellState,
    executor: LineExecutor,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let input = match &config.mode {
            Mode::Interactive => Input::interactive(config.prompt)?,
            Mode::Batch(path) => Input::batch_file(path)?,
        };
        Ok(Self::with_input(input, ShellState::new(config.search_path)))
    }

    pub fn with_input(input: Input, state: ShellState) -> Self {
        Shell {
            input,
            state,
            executor: LineExecutor::new(),
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Reads and executes lines until end of input or `exit`.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let Some(line) = self.input.read_line()? else {
                if self.input.is_interactive() {
                    println!();
                }
                tracing::debug!("end of input");
                return Ok(());
            };

            if self.executor.execute_line(&line, &mut self.state) == Flow::Exit {
                return Ok(());
            }
        }
    }
}
