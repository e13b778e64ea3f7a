use super::{Builtin, CommandError, Flow};
use crate::core::ShellState;

/// Asks the shell to stop. The driver does the actual exiting so that
/// nothing below it has to call `std::process::exit`.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for ExitCommand {
    fn execute(&self, args: &[String], _state: &mut ShellState) -> Result<Flow, CommandError> {
        if !args.is_empty() {
            return Err(CommandError::InvalidArguments(format!(
                "exit takes no arguments, got {}",
                args.len()
            )));
        }
        Ok(Flow::Exit)
    }
}
