pub mod commands;
pub mod path;

pub use path::SearchPath;

/// State that survives from one line to the next.
///
/// The working directory lives in the OS, so the search path is all there is.
#[derive(Debug, Clone, Default)]
pub struct ShellState {
    pub search_path: SearchPath,
}

impl ShellState {
    pub fn new(search_path: SearchPath) -> Self {
        Self { search_path }
    }
}
