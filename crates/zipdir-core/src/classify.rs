//! Stat-based path classification.
//!
//! Classification follows symlinks: a link to a regular file classifies as
//! [`PathKind::RegularFile`], a link to a directory as
//! [`PathKind::Directory`], and a dangling link as [`PathKind::Missing`].

use crate::PackError;
use crate::Result;
use std::io;
use std::path::Path;

/// Kind of filesystem object found at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// A directory.
    Directory,

    /// A regular file.
    RegularFile,

    /// Something else (FIFO, socket, device node).
    Other,

    /// Nothing exists at the path.
    Missing,
}

impl PathKind {
    /// Returns `true` for [`PathKind::Directory`].
    #[must_use]
    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Returns `true` for [`PathKind::RegularFile`].
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::RegularFile)
    }
}

/// Returns `true` if a filesystem entry exists at `path`.
///
/// Any stat error, including permission errors, counts as "does not exist".
///
/// # Examples
///
/// ```
/// use zipdir_core::classify::exists;
///
/// assert!(exists(std::env::temp_dir()));
/// assert!(!exists("/nonexistent/path/that/does/not/exist"));
/// ```
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    std::fs::metadata(path).is_ok()
}

/// Classifies the object at `path`.
///
/// # Errors
///
/// Returns [`PackError::NotAccessible`] if `stat` fails for any reason other
/// than the path being absent.
///
/// # Examples
///
/// ```
/// use zipdir_core::classify::PathKind;
/// use zipdir_core::classify::classify;
///
/// assert_eq!(classify(std::env::temp_dir())?, PathKind::Directory);
/// assert_eq!(classify("/nonexistent/entry")?, PathKind::Missing);
/// # Ok::<(), zipdir_core::PackError>(())
/// ```
pub fn classify<P: AsRef<Path>>(path: P) -> Result<PathKind> {
    let path = path.as_ref();
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(PathKind::Directory),
        Ok(metadata) if metadata.is_file() => Ok(PathKind::RegularFile),
        Ok(_) => Ok(PathKind::Other),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PathKind::Missing),
        Err(source) => Err(PackError::NotAccessible {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_classify_directory_and_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "a").unwrap();

        assert_eq!(classify(temp.path()).unwrap(), PathKind::Directory);
        assert_eq!(classify(&file).unwrap(), PathKind::RegularFile);
    }

    #[test]
    fn test_classify_missing() {
        let temp = TempDir::new().unwrap();
        let kind = classify(temp.path().join("nope")).unwrap();
        assert_eq!(kind, PathKind::Missing);
        assert!(!kind.is_dir());
        assert!(!kind.is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_file_component_is_not_accessible() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        // ENOTDIR, not ENOENT
        let result = classify(file.join("child"));
        assert!(matches!(result, Err(PackError::NotAccessible { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_follows_symlinks() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("target.txt"), "t").unwrap();
        fs::create_dir(root.join("dir")).unwrap();
        std::os::unix::fs::symlink(root.join("target.txt"), root.join("file_link")).unwrap();
        std::os::unix::fs::symlink(root.join("dir"), root.join("dir_link")).unwrap();
        std::os::unix::fs::symlink(root.join("gone"), root.join("dangling")).unwrap();

        assert_eq!(classify(root.join("file_link")).unwrap(), PathKind::RegularFile);
        assert_eq!(classify(root.join("dir_link")).unwrap(), PathKind::Directory);
        assert_eq!(classify(root.join("dangling")).unwrap(), PathKind::Missing);
    }

    #[test]
    fn test_exists() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("present");
        fs::write(&file, "").unwrap();

        assert!(exists(temp.path()));
        assert!(exists(&file));
        assert!(!exists(temp.path().join("absent")));
    }

    #[cfg(unix)]
    #[test]
    fn test_exists_false_on_stat_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        assert!(!exists(file.join("child")));
    }
}
