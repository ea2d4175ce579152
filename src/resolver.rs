//! Path specification resolution.
//!
//! Category paths are written the way a user would type them (`~/.cache`,
//! `/tmp`). This module turns such a specification into the path the scan and
//! removal walks operate on.

use std::path::{Path, PathBuf};

/// A path specification after home-directory expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// The expanded path.
    pub path: PathBuf,

    /// Whether the path existed when it was resolved.
    ///
    /// This is a single check made at resolution time. The filesystem may
    /// change before the path is scanned or cleaned; the walks handle a
    /// missing root on their own.
    pub exists: bool,
}

/// Resolve a path specification into an expanded path plus an existence flag.
///
/// Only a leading `~` is expanded. No other normalization takes place: `..`
/// components, symlinks and relative paths are kept exactly as written.
///
/// # Examples
///
/// ```
/// # use autoclean::resolver::resolve;
/// let resolved = resolve("/definitely/not/here");
/// assert!(!resolved.exists);
/// ```
#[must_use]
pub fn resolve(path_spec: &str) -> ResolvedPath {
    let path = expand_tilde(Path::new(path_spec));
    let exists = path.exists();

    ResolvedPath { path, exists }
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged, as are all paths
/// when the home directory cannot be determined.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_missing_path() {
        let resolved = resolve("/this/path/should/not/exist/autoclean");

        assert_eq!(
            resolved.path,
            PathBuf::from("/this/path/should/not/exist/autoclean")
        );
        assert!(!resolved.exists);
    }

    #[test]
    fn test_resolve_existing_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let spec = temp.path().to_string_lossy().to_string();

        let resolved = resolve(&spec);

        assert_eq!(resolved.path, temp.path());
        assert!(resolved.exists);
    }

    #[test]
    fn test_resolve_expands_home() {
        let resolved = resolve("~/.cache");

        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolved.path, home.join(".cache"));
        }
    }

    #[test]
    fn test_resolve_keeps_dot_dot_segments() {
        let resolved = resolve("/tmp/../tmp/autoclean");
        assert_eq!(resolved.path, PathBuf::from("/tmp/../tmp/autoclean"));
    }

    #[test]
    fn test_expand_tilde_bare() {
        let expanded = expand_tilde(Path::new("~"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home);
        }
    }

    #[test]
    fn test_expand_tilde_relative_path_unchanged() {
        let path = PathBuf::from("relative/path");
        assert_eq!(expand_tilde(&path), path);
    }

    #[test]
    fn test_expand_tilde_only_leading_component() {
        // A tilde that is part of a file name is not a home-directory shorthand
        let path = PathBuf::from("~backup/file");
        assert_eq!(expand_tilde(&path), path);

        let inner = PathBuf::from("/data/~/x");
        assert_eq!(expand_tilde(&inner), inner);
    }

    #[test]
    fn test_expand_tilde_deeply_nested() {
        let expanded = expand_tilde(Path::new("~/a/b/c"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("a").join("b").join("c"));
            assert!(!expanded.to_string_lossy().contains('~'));
        }
    }
}
