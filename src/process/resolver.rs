use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use super::ProcessError;
use crate::core::SearchPath;

/// Whether the calling process may execute `path`, as `access(2)` sees it.
pub fn is_executable(path: &Path) -> bool {
    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `c_path` is a valid NUL-terminated string for the whole call.
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

/// Maps a command name to the file to execute.
///
/// Names containing `/` are checked as given and never looked up in
/// `search_path`. Bare names take the first executable `dir/name` in order.
pub fn resolve(name: &str, search_path: &SearchPath) -> Result<PathBuf, ProcessError> {
    if name.contains('/') {
        let path = Path::new(name);
        return if is_executable(path) {
            Ok(path.to_path_buf())
        } else {
            Err(ProcessError::CommandNotFound(name.to_string()))
        };
    }

    search_path
        .iter()
        .map(|dir| dir.join(name))
        .find(|candidate| {
            let found = is_executable(candidate);
            tracing::trace!(candidate = %candidate.display(), found, "resolving");
            found
        })
        .ok_or_else(|| ProcessError::CommandNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn write_script(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    fn test_first_match_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        write_script(second.path(), "tool", 0o755);
        let expected = write_script(first.path(), "tool", 0o755);

        let search_path = SearchPath::new([
            first.path().to_str().unwrap(),
            second.path().to_str().unwrap(),
        ]);
        assert_eq!(resolve("tool", &search_path).unwrap(), expected);
    }

    #[test]
    fn test_skips_non_executable() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        write_script(first.path(), "tool", 0o644);
        let expected = write_script(second.path(), "tool", 0o755);

        let search_path = SearchPath::new([
            first.path().to_str().unwrap(),
            second.path().to_str().unwrap(),
        ]);
        assert_eq!(resolve("tool", &search_path).unwrap(), expected);
    }

    #[test]
    fn test_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let search_path = SearchPath::new([dir.path().to_str().unwrap()]);
        assert!(matches!(
            resolve("definitely-not-here", &search_path),
            Err(ProcessError::CommandNotFound(_))
        ));
    }

    #[test]
    fn test_empty_search_path_finds_nothing() {
        assert!(resolve("sh", &SearchPath::empty()).is_err());
    }

    #[test]
    fn test_slash_names_bypass_search_path() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "tool", 0o755);
        let name = script.to_str().unwrap();

        assert_eq!(resolve(name, &SearchPath::empty()).unwrap(), script);

        // No fallback to the search path, even though `./tool` would match there.
        let search_path = SearchPath::new([dir.path().to_str().unwrap()]);
        let missing = "./tool".to_string();
        assert!(resolve(&missing, &search_path).is_err());
    }

    #[test]
    fn test_slash_name_not_executable() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "data", 0o644);
        assert!(resolve(script.to_str().unwrap(), &SearchPath::default()).is_err());
    }

    #[test]
    fn test_nul_in_name_is_not_executable() {
        assert!(!is_executable(Path::new("/bin/s\0h")));
    }
}
