//! Error conversion utilities for CLI.
//!
//! Converts zipdir-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use zipdir_core::PackError;

/// Converts `PackError` to user-friendly anyhow error with context
pub fn convert_pack_error(err: PackError, source_dir: &Path, output: &Path) -> anyhow::Error {
    match err {
        PackError::NotADirectory { path } => {
            anyhow!(
                "Source '{}' is not a directory\n\
                 HINT: Pass the directory whose contents should be archived.",
                path.display()
            )
        }
        PackError::NotAccessible { path, source } => {
            anyhow!(
                "Cannot access '{}' while reading '{}': {}\n\
                 HINT: Check that the directory exists and you have read permission.",
                path.display(),
                source_dir.display(),
                source
            )
        }
        PackError::OpenFailure { path, source } => {
            anyhow!(
                "Cannot create archive '{}': {}\n\
                 HINT: Check that the parent directory exists (or use --parents) and is writable.",
                path.display(),
                source
            )
        }
        PackError::ReadFailure { path, source } => {
            anyhow!(
                "Failed to read '{}': {}\n\
                 HINT: The file may have been removed or locked while packaging. \
                 No archive was written.",
                path.display(),
                source
            )
        }
        PackError::WriteFailure { path, source } => {
            anyhow!(
                "Failed to write archive '{}': {}\n\
                 HINT: Check available disk space. No archive was written.",
                path.display(),
                source
            )
        }
        PackError::InvalidEntryName { path } => {
            anyhow!(
                "Cannot store '{}' in the archive: file name is not valid UTF-8\n\
                 HINT: Rename the file or exclude it from '{}'.",
                path.display(),
                source_dir.display()
            )
        }
        PackError::InvalidTask { .. } => anyhow::Error::from(err).context(format!(
            "Error packaging '{}' into '{}'",
            source_dir.display(),
            output.display()
        )),
    }
}
