use super::{Builtin, CommandError, Flow};
use crate::core::ShellState;

#[derive(Clone, Default)]
pub struct PathCommand;

impl PathCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for PathCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<Flow, CommandError> {
        state.search_path.replace(args.iter().cloned());
        tracing::debug!(search_path = ?state.search_path.as_slice(), "search path replaced");
        Ok(Flow::Continue)
    }
}
