use std::path::PathBuf;

use thiserror::Error;

pub mod launcher;
pub mod resolver;

pub use launcher::{wait_all, ProcessLauncher};

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("command not found: {0}")]
    CommandNotFound(String),
    #[error("cannot open redirection target {target}: {source}")]
    Redirect {
        target: String,
        source: std::io::Error,
    },
    #[error("failed to spawn {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Already written to the command's redirection target.
    #[error("{0} (reported to redirection target)")]
    Redirected(#[source] Box<ProcessError>),
}
