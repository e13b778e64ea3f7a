use std::path::Path;

/// Directory the search path holds when the shell starts.
pub const DEFAULT_SEARCH_DIR: &str = "/bin";

/// Ordered directories consulted to resolve a bare command name.
///
/// Earlier entries win. Duplicates are kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<String>,
}

impl Default for SearchPath {
    fn default() -> Self {
        Self::new([DEFAULT_SEARCH_DIR])
    }
}

impl SearchPath {
    pub fn new<I, S>(dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut path = Self { dirs: Vec::new() };
        path.replace(dirs);
        path
    }

    pub fn empty() -> Self {
        Self { dirs: Vec::new() }
    }

    /// Discards every entry and installs `dirs`, skipping empty strings.
    pub fn replace<I, S>(&mut self, dirs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dirs = dirs
            .into_iter()
            .map(Into::into)
            .filter(|dir| !dir.is_empty())
            .collect();
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(Path::new)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.dirs
    }
}
