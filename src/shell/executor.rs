use std::process::Child;

use crate::core::commands::{BuiltinDispatcher, Flow};
use crate::core::ShellState;
use crate::error::report;
use crate::parse::{parse_redirect, tokenize};
use crate::process::{wait_all, ProcessError, ProcessLauncher};

/// Children started for one line, and whether the shell should keep going.
pub struct Launched {
    pub children: Vec<Child>,
    pub flow: Flow,
}

/// Runs one input line: built-ins inline, externals concurrently, then waits.
#[derive(Clone, Default)]
pub struct LineExecutor {
    builtins: BuiltinDispatcher,
    launcher: ProcessLauncher,
}

impl LineExecutor {
    pub fn new() -> Self {
        Self {
            builtins: BuiltinDispatcher::new(),
            launcher: ProcessLauncher::new(),
        }
    }

    /// Executes `line` and returns once every child it spawned has exited.
    ///
    /// On `exit` this returns [`Flow::Exit`] immediately, without waiting.
    pub fn execute_line(&self, line: &str, state: &mut ShellState) -> Flow {
        let Launched { children, flow } = self.launch_line(line, state);
        if flow == Flow::Exit {
            tracing::debug!(abandoned = children.len(), "exit requested");
            return Flow::Exit;
        }
        wait_all(children);
        Flow::Continue
    }

    /// Everything up to the wait barrier. Failures are reported and skipped.
    pub fn launch_line(&self, line: &str, state: &mut ShellState) -> Launched {
        let mut children = Vec::new();

        for tokens in tokenize(line) {
            let command = match parse_redirect(tokens) {
                Ok(command) => command,
                Err(e) => {
                    report(&e);
                    continue;
                }
            };

            if self.builtins.is_builtin(command.name()) {
                match self.builtins.dispatch(command.name(), command.args(), state) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit) => {
                        return Launched {
                            children,
                            flow: Flow::Exit,
                        }
                    }
                    Err(e) => report(&e),
                }
                continue;
            }

            match self.launcher.spawn(&command, &state.search_path) {
                Ok(child) => children.push(child),
                Err(ProcessError::Redirected(e)) => {
                    tracing::debug!(error = %e, "failure written to redirection target")
                }
                Err(e) => report(&e),
            }
        }

        Launched {
            children,
            flow: Flow::Continue,
        }
    }
}
