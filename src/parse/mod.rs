//! Turning a raw input line into commands ready to run.
//!
//! A line is first split into independent command groups by [`tokenize`],
//! then each group's tokens go through [`redirect::parse`] to pull out an
//! optional `> target` suffix.

mod redirect;
mod tokenize;

pub use redirect::{parse as parse_redirect, RedirectError};
pub use tokenize::{tokenize, CommandLine};

/// Separates commands that run concurrently.
pub const CONCURRENT_SEPARATOR: char = '&';

/// Output redirection operator.
pub const REDIRECT_OPERATOR: char = '>';

/// One command ready to dispatch: a non-empty argv plus where its output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub argv: Vec<String>,
    pub redirect: Option<String>,
}

impl Command {
    pub fn name(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }
}
