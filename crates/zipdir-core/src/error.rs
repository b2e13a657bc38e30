//! Error types for directory packaging operations.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `PackError`.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors that can occur while packaging a directory into an archive.
///
/// Every variant is terminal for the whole operation: the first failure
/// encountered is returned and no partial archive is left at the destination.
#[derive(Error, Debug)]
pub enum PackError {
    /// Source root is missing or is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The path that was expected to be a directory.
        path: PathBuf,
    },

    /// A path could not be inspected during validation or traversal.
    #[error("cannot access {path}: {source}")]
    NotAccessible {
        /// The path whose metadata or listing could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Destination archive could not be created.
    #[error("cannot create archive {path}: {source}")]
    OpenFailure {
        /// The destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Source file could not be opened or read while copying.
    #[error("cannot read {path}: {source}")]
    ReadFailure {
        /// The source file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Archive bytes could not be written or finalized.
    #[error("cannot write archive {path}: {source}")]
    WriteFailure {
        /// The destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file below the root has no valid UTF-8 entry name.
    #[error("cannot derive archive entry name for {path}")]
    InvalidEntryName {
        /// The offending filesystem path.
        path: PathBuf,
    },

    /// A packing task was started without all required inputs.
    #[error("invalid packing task: {reason}")]
    InvalidTask {
        /// What is missing.
        reason: String,
    },
}

impl PackError {
    /// Returns the filesystem path this error refers to, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use std::path::PathBuf;
    /// use zipdir_core::PackError;
    ///
    /// let err = PackError::NotADirectory {
    ///     path: PathBuf::from("notes.txt"),
    /// };
    /// assert_eq!(err.path(), Some(Path::new("notes.txt")));
    ///
    /// let err = PackError::InvalidTask {
    ///     reason: "missing output".to_string(),
    /// };
    /// assert_eq!(err.path(), None);
    /// ```
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotADirectory { path }
            | Self::NotAccessible { path, .. }
            | Self::OpenFailure { path, .. }
            | Self::ReadFailure { path, .. }
            | Self::WriteFailure { path, .. }
            | Self::InvalidEntryName { path } => Some(path),
            Self::InvalidTask { .. } => None,
        }
    }

    /// Returns `true` if the failure originated on the source side (the
    /// directory being archived) rather than at the destination.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use zipdir_core::PackError;
    ///
    /// let err = PackError::ReadFailure {
    ///     path: PathBuf::from("src/lib.rs"),
    ///     source: std::io::Error::other("gone"),
    /// };
    /// assert!(err.is_source_error());
    ///
    /// let err = PackError::WriteFailure {
    ///     path: PathBuf::from("out.zip"),
    ///     source: std::io::Error::other("disk full"),
    /// };
    /// assert!(!err.is_source_error());
    /// ```
    #[must_use]
    pub const fn is_source_error(&self) -> bool {
        matches!(
            self,
            Self::NotADirectory { .. }
                | Self::NotAccessible { .. }
                | Self::ReadFailure { .. }
                | Self::InvalidEntryName { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = PackError::NotADirectory {
            path: PathBuf::from("/tmp/file.txt"),
        };
        assert_eq!(err.to_string(), "not a directory: /tmp/file.txt");
    }

    #[test]
    fn test_read_failure_display_includes_cause() {
        let err = PackError::ReadFailure {
            path: PathBuf::from("data.bin"),
            source: io::Error::new(io::ErrorKind::NotFound, "file vanished"),
        };
        let msg = err.to_string();
        assert!(msg.contains("data.bin"));
        assert!(msg.contains("file vanished"));
    }

    #[test]
    fn test_io_variants_expose_source() {
        let err = PackError::OpenFailure {
            path: PathBuf::from("out.zip"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "denied");

        let err = PackError::NotADirectory {
            path: PathBuf::from("x"),
        };
        assert!(err.source().is_none());
    }

    #[test]
    fn test_source_side_classification() {
        let not_accessible = PackError::NotAccessible {
            path: PathBuf::from("root"),
            source: io::Error::other("eio"),
        };
        assert!(not_accessible.is_source_error());

        let open = PackError::OpenFailure {
            path: PathBuf::from("out.zip"),
            source: io::Error::other("eacces"),
        };
        assert!(!open.is_source_error());

        let task = PackError::InvalidTask {
            reason: "missing source".to_string(),
        };
        assert!(!task.is_source_error());
    }

    #[test]
    fn test_path_accessor() {
        let err = PackError::InvalidEntryName {
            path: PathBuf::from("root/bad"),
        };
        assert_eq!(err.path(), Some(Path::new("root/bad")));
    }
}
