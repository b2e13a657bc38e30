//! Configuration for packaging operations.

/// Configuration for packaging a directory.
///
/// # Examples
///
/// ```
/// use zipdir_core::PackConfig;
///
/// let config = PackConfig::default();
/// assert!(config.recursive);
///
/// let flat = PackConfig::default()
///     .with_recursive(false)
///     .with_create_parent_dirs(true);
/// assert!(!flat.recursive);
/// ```
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Descend into subdirectories.
    ///
    /// When `false`, only regular files directly inside the source root are
    /// archived and subdirectories are skipped entirely.
    ///
    /// Default: `true`.
    pub recursive: bool,

    /// Create missing parent directories of the destination.
    ///
    /// Default: `false` (a missing parent is an open failure).
    pub create_parent_dirs: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            recursive: true,
            create_parent_dirs: false,
        }
    }
}

impl PackConfig {
    /// Creates a new `PackConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether subdirectories are descended into.
    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Sets whether missing destination parents are created.
    #[must_use]
    pub fn with_create_parent_dirs(mut self, create: bool) -> Self {
        self.create_parent_dirs = create;
        self
    }
}
