//! Directory packaging: validate, open, walk, finalize.

use crate::PackConfig;
use crate::PackError;
use crate::PackReport;
use crate::Result;
use crate::classify::classify;
use crate::classify::exists;
use crate::report::NoopProgress;
use crate::report::ProgressCallback;
use crate::walker::traverse;
use crate::writer::ArchiveWriter;
use crate::writer::entry_name;
use std::path::Path;
use std::time::Instant;
use tracing::debug;
use tracing::info;

/// Packages every regular file below `source_root` into a ZIP archive at
/// `output_path`.
///
/// Entry names are the file paths relative to `source_root`, joined with
/// forward slashes. Directories never produce entries.
///
/// # Arguments
///
/// * `output_path` - Path of the archive to create
/// * `source_root` - Directory to package
/// * `config` - Packaging configuration
///
/// # Errors
///
/// Returns the first failure encountered:
/// - [`PackError::NotADirectory`] if `source_root` is missing or not a
///   directory; `output_path` is not touched
/// - [`PackError::NotAccessible`] if part of the tree cannot be inspected
/// - [`PackError::OpenFailure`] if the archive cannot be created
/// - [`PackError::ReadFailure`] if a source file cannot be read
/// - [`PackError::WriteFailure`] if the archive cannot be written or
///   finalized
///
/// After any failure, `output_path` is left as it was before the call.
///
/// # Examples
///
/// ```no_run
/// use zipdir_core::PackConfig;
/// use zipdir_core::pack_directory;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = pack_directory("site.zip", "public/", &PackConfig::default())?;
/// println!("Packed {} files", report.files_added);
/// # Ok(())
/// # }
/// ```
pub fn pack_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    output_path: P,
    source_root: Q,
    config: &PackConfig,
) -> Result<PackReport> {
    pack_directory_with_progress(output_path, source_root, config, &mut NoopProgress)
}

/// Same as [`pack_directory`], reporting progress to `progress`.
///
/// `on_entry_start` and `on_entry_complete` receive the archive entry name;
/// `on_complete` is only called when the archive was finalized.
pub fn pack_directory_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    output_path: P,
    source_root: Q,
    config: &PackConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<PackReport> {
    let output = output_path.as_ref();
    let root = source_root.as_ref();
    let start = Instant::now();

    debug!(source = %root.display(), "validating source root");
    if !classify(root)?.is_dir() {
        return Err(PackError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    if config.create_parent_dirs {
        create_parent_dirs(output)?;
    }

    let mut writer = ArchiveWriter::open(output)?;
    let mut report = PackReport::new();

    if let Err(err) = write_entries(&mut writer, root, config, progress, &mut report) {
        writer.discard();
        return Err(err);
    }

    debug!(entries = report.files_added, "finalizing archive");
    report.bytes_compressed = writer.finish()?;
    report.duration = start.elapsed();
    progress.on_complete();

    info!(
        archive = %output.display(),
        files = report.files_added,
        bytes = report.bytes_written,
        archive_bytes = report.bytes_compressed,
        "archive created"
    );
    Ok(report)
}

fn write_entries(
    writer: &mut ArchiveWriter,
    root: &Path,
    config: &PackConfig,
    progress: &mut dyn ProgressCallback,
    report: &mut PackReport,
) -> Result<()> {
    let files = traverse(root, config.recursive);
    debug!(
        root = %files.root().display(),
        recursive = files.is_recursive(),
        "writing entries"
    );

    for path in files {
        let path = path?;
        // The destination may live inside the tree being packed.
        if writer.writes_to(&path) {
            debug!(path = %path.display(), "skipping the archive being written");
            continue;
        }
        let name = entry_name(root, &path)?;

        progress.on_entry_start(Path::new(&name), report.files_added + 1);
        report.bytes_written += writer.add_entry_with_progress(&path, &name, progress)?;
        report.files_added += 1;
        progress.on_entry_complete(Path::new(&name));
    }
    Ok(())
}

fn create_parent_dirs(output: &Path) -> Result<()> {
    let Some(parent) = output.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || exists(parent) {
        return Ok(());
    }

    debug!(dir = %parent.display(), "creating destination directory");
    std::fs::create_dir_all(parent).map_err(|source| PackError::OpenFailure {
        path: output.to_path_buf(),
        source,
    })
}
