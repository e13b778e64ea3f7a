use super::{Builtin, CommandError, Flow};
use crate::core::ShellState;
use std::env;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for CdCommand {
    fn execute(&self, args: &[String], _state: &mut ShellState) -> Result<Flow, CommandError> {
        let [target] = args else {
            return Err(CommandError::InvalidArguments(format!(
                "cd takes exactly one argument, got {}",
                args.len()
            )));
        };

        env::set_current_dir(target).map_err(|e| {
            CommandError::ExecutionError(format!("Failed to change directory to {}: {}", target, e))
        })?;
        Ok(Flow::Continue)
    }
}
