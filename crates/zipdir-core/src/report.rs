//! Packaging statistics and progress reporting.

use std::path::Path;
use std::time::Duration;

/// Report of a successful packaging operation.
///
/// # Examples
///
/// ```
/// use zipdir_core::PackReport;
///
/// let mut report = PackReport::default();
/// report.files_added = 10;
/// report.bytes_written = 1024;
/// report.bytes_compressed = 512;
///
/// assert_eq!(report.compression_ratio(), 2.0);
/// assert_eq!(report.compression_percentage(), 50.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackReport {
    /// Number of files added to the archive.
    pub files_added: usize,

    /// Total bytes read from source files (uncompressed).
    pub bytes_written: u64,

    /// Size of the finished archive in bytes.
    pub bytes_compressed: u64,

    /// Duration of the packaging operation.
    pub duration: Duration,
}

impl PackReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compression ratio (uncompressed / archive size).
    ///
    /// Returns 0.0 if either size is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipdir_core::PackReport;
    ///
    /// let mut report = PackReport::new();
    /// report.bytes_written = 1000;
    /// report.bytes_compressed = 250;
    /// assert_eq!(report.compression_ratio(), 4.0);
    ///
    /// report.bytes_written = 0;
    /// assert_eq!(report.compression_ratio(), 0.0);
    /// ```
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_compressed == 0 || self.bytes_written == 0 {
            return 0.0;
        }
        self.bytes_written as f64 / self.bytes_compressed as f64
    }

    /// Returns the share of the input size saved by compression, in percent.
    ///
    /// Archives larger than their input (container overhead on tiny files)
    /// report 0.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipdir_core::PackReport;
    ///
    /// let mut report = PackReport::new();
    /// report.bytes_written = 1000;
    /// report.bytes_compressed = 250;
    /// assert_eq!(report.compression_percentage(), 75.0);
    ///
    /// report.bytes_compressed = 4000;
    /// assert_eq!(report.compression_percentage(), 0.0);
    /// ```
    #[must_use]
    pub fn compression_percentage(&self) -> f64 {
        if self.bytes_written == 0 {
            return 0.0;
        }
        let saved = self.bytes_written.saturating_sub(self.bytes_compressed);
        (saved as f64 / self.bytes_written as f64) * 100.0
    }
}

/// Callback trait for progress reporting while packaging.
///
/// Traversal is lazy, so the total number of entries is not known up front;
/// callbacks only receive the running entry number.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use zipdir_core::ProgressCallback;
///
/// struct SimpleProgress;
///
/// impl ProgressCallback for SimpleProgress {
///     fn on_entry_start(&mut self, name: &Path, current: usize) {
///         println!("[{current}] {}", name.display());
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, _name: &Path) {}
///
///     fn on_complete(&mut self) {
///         println!("done");
///     }
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called before an entry is added.
    ///
    /// # Arguments
    ///
    /// * `name` - Archive entry name (relative to the source root)
    /// * `current` - Entry number (1-indexed)
    fn on_entry_start(&mut self, name: &Path, current: usize);

    /// Called for every chunk of bytes copied into the archive.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called after an entry has been fully written.
    fn on_entry_complete(&mut self, name: &Path);

    /// Called once after the archive has been finalized.
    fn on_complete(&mut self);
}

/// No-op implementation of `ProgressCallback`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _name: &Path, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _name: &Path) {}

    fn on_complete(&mut self) {}
}
