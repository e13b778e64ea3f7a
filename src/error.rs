use std::io::Write;

use thiserror::Error;

/// The one diagnostic the user ever sees, whatever went wrong.
pub const GENERIC_ERROR: &str = "An error has occurred\n";

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("flag error: {0}")]
    FlagError(String),
    #[error("usage: expected at most one batch file, got {0} arguments")]
    Usage(usize),
    #[error("cannot open batch file {path}: {source}")]
    BatchFile {
        path: String,
        source: std::io::Error,
    },
}

/// Logs the detailed cause and writes the generic diagnostic to stderr.
pub fn report(err: &dyn std::error::Error) {
    report_to(&mut std::io::stderr().lock(), err);
}

/// Like [`report`], but into `out`, e.g. a command's redirection target.
pub fn report_to(out: &mut dyn Write, err: &dyn std::error::Error) {
    tracing::debug!(error = %err, "reporting failure");
    // Nothing sensible is left to do if the sink itself is gone.
    let _ = out.write_all(GENERIC_ERROR.as_bytes());
    let _ = out.flush();
}
