//! Builder for packaging a directory with a fluent API.

use std::path::Path;
use std::path::PathBuf;

use crate::PackConfig;
use crate::PackError;
use crate::PackReport;
use crate::Result;
use crate::report::ProgressCallback;

/// Builder for one packaging task.
///
/// # Examples
///
/// ```no_run
/// use zipdir_core::Packer;
///
/// let report = Packer::new()
///     .source("docs/")
///     .output("docs.zip")
///     .recursive(true)
///     .pack()?;
///
/// println!("Packed {} files", report.files_added);
/// # Ok::<(), zipdir_core::PackError>(())
/// ```
#[derive(Debug, Default)]
pub struct Packer {
    source_root: Option<PathBuf>,
    output_path: Option<PathBuf>,
    config: PackConfig,
}

impl Packer {
    /// Creates a new `Packer` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory to package.
    #[must_use]
    pub fn source<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the archive path.
    #[must_use]
    pub fn output<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the full configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipdir_core::PackConfig;
    /// use zipdir_core::Packer;
    ///
    /// let packer = Packer::new().config(PackConfig::default().with_recursive(false));
    /// ```
    #[must_use]
    pub fn config(mut self, config: PackConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets whether subdirectories are descended into.
    ///
    /// Default: `true`.
    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.config.recursive = recursive;
        self
    }

    /// Sets whether missing destination parents are created.
    ///
    /// Default: `false`.
    #[must_use]
    pub fn create_parent_dirs(mut self, create: bool) -> Self {
        self.config.create_parent_dirs = create;
        self
    }

    /// Packages the source directory.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::InvalidTask`] if the source or output was never
    /// set, otherwise any error of [`pack_directory`](crate::pack_directory).
    pub fn pack(self) -> Result<PackReport> {
        let (output, source) = self.task()?;
        crate::pack::pack_directory(output, source, &self.config)
    }

    /// Packages the source directory, reporting progress.
    ///
    /// # Errors
    ///
    /// Same as [`pack`](Self::pack).
    pub fn pack_with_progress(self, progress: &mut dyn ProgressCallback) -> Result<PackReport> {
        let (output, source) = self.task()?;
        crate::pack::pack_directory_with_progress(output, source, &self.config, progress)
    }

    fn task(&self) -> Result<(&Path, &Path)> {
        let output = self
            .output_path
            .as_deref()
            .ok_or_else(|| PackError::InvalidTask {
                reason: "output path not set".to_string(),
            })?;
        let source = self
            .source_root
            .as_deref()
            .ok_or_else(|| PackError::InvalidTask {
                reason: "source directory not set".to_string(),
            })?;
        Ok((output, source))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builder_basic() {
        let packer = Packer::new().source("src/").output("out.zip");

        assert_eq!(packer.source_root, Some(PathBuf::from("src/")));
        assert_eq!(packer.output_path, Some(PathBuf::from("out.zip")));
        assert!(packer.config.recursive);
    }

    #[test]
    fn test_builder_config_methods() {
        let packer = Packer::new().recursive(false).create_parent_dirs(true);

        assert!(!packer.config.recursive);
        assert!(packer.config.create_parent_dirs);
    }

    #[test]
    fn test_builder_full_config() {
        let packer = Packer::new().config(PackConfig::default().with_recursive(false));
        assert!(!packer.config.recursive);
    }

    #[test]
    fn test_builder_no_output_error() {
        let result = Packer::new().source("src/").pack();
        assert!(matches!(result, Err(PackError::InvalidTask { .. })));
    }

    #[test]
    fn test_builder_no_source_error() {
        let result = Packer::new().output("out.zip").pack();
        assert!(matches!(result, Err(PackError::InvalidTask { .. })));
    }

    #[test]
    fn test_builder_packs_directory() {
        let source = TempDir::new().unwrap();
        fs::write(source.path().join("one.txt"), "1").unwrap();
        fs::create_dir(source.path().join("nested")).unwrap();
        fs::write(source.path().join("nested/two.txt"), "2").unwrap();
        let out = TempDir::new().unwrap();
        let output = out.path().join("packed.zip");

        let report = Packer::new()
            .source(source.path())
            .output(&output)
            .recursive(false)
            .pack()
            .unwrap();

        assert_eq!(report.files_added, 1);
        assert!(output.is_file());
    }
}
