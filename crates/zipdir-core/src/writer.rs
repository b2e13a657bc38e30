//! Streaming ZIP archive writer.
//!
//! The archive is staged in a hidden temporary file next to the destination
//! and only renamed onto the destination by [`ArchiveWriter::finish`]. A
//! writer that is dropped or discarded before finishing removes the staged
//! file, so a failed run never leaves something that looks like a complete
//! archive behind.

use crate::PackError;
use crate::Result;
use crate::classify::PathKind;
use crate::classify::classify;
use crate::report::NoopProgress;
use crate::report::ProgressCallback;
use std::fs;
use std::fs::File;
use std::io;
use std::io::Read;
use std::io::Write;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempPath;
use tracing::debug;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Buffer size for streaming file contents into the archive (64 KiB).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Entries at least this large are written with ZIP64 extensions.
const ZIP64_THRESHOLD: u64 = 0xFFFF_FFFF;

/// Mode given to the finished archive on Unix, before the umask applies.
#[cfg(unix)]
const ARCHIVE_MODE: u32 = 0o644;

/// Writes regular files into a ZIP archive.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use zipdir_core::writer::ArchiveWriter;
///
/// let mut writer = ArchiveWriter::open("notes.zip")?;
/// writer.add_entry(Path::new("notes/today.md"), "today.md")?;
/// let archive_size = writer.finish()?;
/// println!("wrote {archive_size} bytes");
/// # Ok::<(), zipdir_core::PackError>(())
/// ```
pub struct ArchiveWriter {
    // Declared before `staged` so the handle is closed before the staged
    // path is removed on drop.
    zip: ZipWriter<File>,
    staged: TempPath,
    destination: PathBuf,
    // Symlink-free forms of `staged` and `destination` for `writes_to`.
    resolved: [PathBuf; 2],
    buffer: Vec<u8>,
    entries: usize,
}

impl ArchiveWriter {
    /// Opens a writer whose archive will end up at `destination`.
    ///
    /// Nothing is written to `destination` itself until
    /// [`finish`](Self::finish) succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::OpenFailure`] if the destination names a
    /// directory, has no file name, or its parent directory is missing or not
    /// writable.
    pub fn open<P: AsRef<Path>>(destination: P) -> Result<Self> {
        let destination = destination.as_ref().to_path_buf();

        let Some(file_name) = destination.file_name() else {
            return Err(open_failure(
                &destination,
                io::Error::new(io::ErrorKind::InvalidInput, "destination has no file name"),
            ));
        };
        if classify(&destination).ok() == Some(PathKind::Directory) {
            return Err(open_failure(
                &destination,
                io::Error::new(io::ErrorKind::IsADirectory, "destination is a directory"),
            ));
        }

        let prefix = format!(".{}.", file_name.to_string_lossy());
        let mut builder = tempfile::Builder::new();
        builder.prefix(&prefix).suffix(".partial");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(ARCHIVE_MODE));
        }

        let staged = builder
            .tempfile_in(staging_dir(&destination))
            .map_err(|e| open_failure(&destination, e))?;
        let (file, staged) = staged.into_parts();
        let resolved = [
            fs::canonicalize(&staged).unwrap_or_else(|_| staged.to_path_buf()),
            fs::canonicalize(staging_dir(&destination))
                .map_or_else(|_| destination.clone(), |dir| dir.join(file_name)),
        ];

        debug!(
            destination = %destination.display(),
            staged = %staged.display(),
            "opened archive writer"
        );

        Ok(Self {
            zip: ZipWriter::new(file),
            staged,
            destination,
            resolved,
            buffer: vec![0u8; COPY_BUFFER_SIZE],
            entries: 0,
        })
    }

    /// Final path of the archive.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Path of the hidden file the archive is written to until
    /// [`finish`](Self::finish) renames it onto the destination.
    pub fn staged_path(&self) -> &Path {
        &self.staged
    }

    /// Returns `true` if `path` is the staged file or the destination.
    ///
    /// Only paths whose file name matches one of the two are resolved, so
    /// this is cheap to call for every file of a walk over a tree that may
    /// contain the destination.
    pub fn writes_to(&self, path: &Path) -> bool {
        let name = path.file_name();
        if name != self.staged.file_name() && name != self.destination.file_name() {
            return false;
        }
        fs::canonicalize(path).is_ok_and(|resolved| self.resolved.contains(&resolved))
    }

    /// Number of entries added so far.
    pub const fn entry_count(&self) -> usize {
        self.entries
    }

    /// Adds the file at `source` as an entry called `name`.
    ///
    /// Returns the number of bytes copied. The file contents are stored
    /// byte-for-byte (deflate-compressed).
    ///
    /// # Errors
    ///
    /// Returns [`PackError::ReadFailure`] if `source` cannot be opened or read
    /// and [`PackError::WriteFailure`] if the archive cannot be appended to.
    pub fn add_entry(&mut self, source: &Path, name: &str) -> Result<u64> {
        self.add_entry_with_progress(source, name, &mut NoopProgress)
    }

    /// Same as [`add_entry`](Self::add_entry), reporting every copied chunk to
    /// `progress`.
    pub fn add_entry_with_progress(
        &mut self,
        source: &Path,
        name: &str,
        progress: &mut dyn ProgressCallback,
    ) -> Result<u64> {
        let mut file = File::open(source).map_err(|e| read_failure(source, e))?;
        let size = file.metadata().map_err(|e| read_failure(source, e))?.len();

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .large_file(size >= ZIP64_THRESHOLD);

        self.zip.start_file(name, options).map_err(|e| {
            write_failure(
                &self.destination,
                io::Error::other(format!("failed to start file in ZIP: {e}")),
            )
        })?;

        let mut copied = 0u64;
        loop {
            let bytes_read = match file.read(&mut self.buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(read_failure(source, e)),
            };
            self.zip
                .write_all(&self.buffer[..bytes_read])
                .map_err(|e| write_failure(&self.destination, e))?;
            copied += bytes_read as u64;
            progress.on_bytes_written(bytes_read as u64);
        }

        self.entries += 1;
        debug!(entry = name, bytes = copied, "added archive entry");
        Ok(copied)
    }

    /// Writes the central directory and moves the archive into place.
    ///
    /// Returns the size of the finished archive in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::WriteFailure`] if the archive cannot be finalized,
    /// synced, or renamed onto the destination. The staged file is removed in
    /// that case.
    pub fn finish(self) -> Result<u64> {
        let Self {
            zip,
            staged,
            destination,
            entries,
            ..
        } = self;

        let file = zip.finish().map_err(|e| {
            write_failure(
                &destination,
                io::Error::other(format!("failed to finish ZIP archive: {e}")),
            )
        })?;
        file.sync_all().map_err(|e| write_failure(&destination, e))?;
        let archive_size = file
            .metadata()
            .map_err(|e| write_failure(&destination, e))?
            .len();
        drop(file);

        staged
            .persist(&destination)
            .map_err(|e| write_failure(&destination, e.error))?;

        debug!(
            destination = %destination.display(),
            entries,
            bytes = archive_size,
            "finalized archive"
        );
        Ok(archive_size)
    }

    /// Abandons the archive and removes the staged file.
    ///
    /// The destination is left exactly as it was before [`open`](Self::open).
    pub fn discard(self) {
        debug!(
            destination = %self.destination.display(),
            entries = self.entries,
            "discarding partial archive"
        );
        drop(self);
    }
}

impl std::fmt::Debug for ArchiveWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveWriter")
            .field("destination", &self.destination)
            .field("staged", &self.staged.as_os_str())
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

/// Derives the archive entry name of `path` relative to `root`.
///
/// The name is the path below `root` joined with forward slashes, with no
/// leading separator, regardless of platform.
///
/// # Errors
///
/// Returns [`PackError::InvalidEntryName`] if `path` is not strictly below
/// `root`, contains `..` or similar components, or is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use zipdir_core::writer::entry_name;
///
/// let name = entry_name(Path::new("/x/y"), Path::new("/x/y/z/w.txt"))?;
/// assert_eq!(name, "z/w.txt");
/// # Ok::<(), zipdir_core::PackError>(())
/// ```
pub fn entry_name(root: &Path, path: &Path) -> Result<String> {
    let invalid = || PackError::InvalidEntryName {
        path: path.to_path_buf(),
    };

    let relative = path.strip_prefix(root).map_err(|_| invalid())?;

    let mut name = String::new();
    for component in relative.components() {
        let Component::Normal(part) = component else {
            return Err(invalid());
        };
        let part = part.to_str().ok_or_else(invalid)?;
        if !name.is_empty() {
            name.push('/');
        }
        name.push_str(part);
    }

    if name.is_empty() {
        return Err(invalid());
    }
    Ok(name)
}

fn staging_dir(destination: &Path) -> &Path {
    destination
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

fn open_failure(path: &Path, source: io::Error) -> PackError {
    PackError::OpenFailure {
        path: path.to_path_buf(),
        source,
    }
}

fn read_failure(path: &Path, source: io::Error) -> PackError {
    PackError::ReadFailure {
        path: path.to_path_buf(),
        source,
    }
}

fn write_failure(path: &Path, source: io::Error) -> PackError {
    PackError::WriteFailure {
        path: path.to_path_buf(),
        source,
    }
}
