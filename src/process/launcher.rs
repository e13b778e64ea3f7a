use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::process::CommandExt;
use std::process::{Child, Command as OsCommand, Stdio};

use super::{resolver, ProcessError};
use crate::core::SearchPath;
use crate::error::report_to;
use crate::parse::Command;

/// Permissions for files created by `>`.
pub const REDIRECT_MODE: u32 = 0o644;

/// Starts external commands without waiting for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `command` and hands back its child right away.
    ///
    /// The redirection target is opened before the name is resolved, so it
    /// is created or truncated even when the command turns out not to exist.
    /// Once it is open, later failures are written into it rather than to
    /// the shell's stderr and come back as [`ProcessError::Redirected`].
    pub fn spawn(&self, command: &Command, search_path: &SearchPath) -> Result<Child, ProcessError> {
        let redirect = command.redirect.as_deref().map(open_redirect).transpose()?;

        match self.start(command, search_path, redirect.as_ref()) {
            Ok(child) => Ok(child),
            Err(err) => match redirect {
                Some(mut file) => {
                    report_to(&mut file, &err);
                    Err(ProcessError::Redirected(Box::new(err)))
                }
                None => Err(err),
            },
        }
    }

    fn start(
        &self,
        command: &Command,
        search_path: &SearchPath,
        redirect: Option<&File>,
    ) -> Result<Child, ProcessError> {
        let (stdout, stderr) = match redirect {
            Some(file) => (Stdio::from(file.try_clone()?), Stdio::from(file.try_clone()?)),
            None => (Stdio::inherit(), Stdio::inherit()),
        };

        let program = resolver::resolve(command.name(), search_path)?;

        let child = OsCommand::new(&program)
            .arg0(command.name())
            .args(command.args())
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(stderr)
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                program: program.clone(),
                source,
            })?;

        tracing::debug!(
            pid = child.id(),
            program = %program.display(),
            redirect = ?command.redirect,
            "spawned"
        );
        Ok(child)
    }
}

fn open_redirect(target: &str) -> Result<File, ProcessError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(REDIRECT_MODE)
        .open(target)
        .map_err(|source| ProcessError::Redirect {
            target: target.to_string(),
            source,
        })
}

/// Blocks until every child has exited. Exit statuses are only logged.
pub fn wait_all(children: Vec<Child>) {
    for mut child in children {
        let pid = child.id();
        match child.wait() {
            Ok(status) => tracing::debug!(pid, %status, "child exited"),
            Err(e) => tracing::debug!(pid, error = %e, "wait failed"),
        }
    }
}
