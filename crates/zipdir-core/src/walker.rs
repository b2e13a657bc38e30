//! Lazy discovery of regular files under a directory.
//!
//! The walker yields paths one at a time, so the first archive entry can be
//! written before the whole tree has been listed.

use crate::PackError;
use crate::Result;
use crate::classify::PathKind;
use crate::classify::classify;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

/// Returns an iterator over the regular files below `root`.
///
/// With `recursive == false` only the direct children of `root` are visited
/// and every subdirectory is pruned without being listed. With
/// `recursive == true` the whole tree is visited.
///
/// Yielded paths are `root` joined with the path below it. Directories,
/// dangling symlinks and special files are never yielded. Symlinks are not
/// followed into directories; a symlink that resolves to a regular file is
/// yielded like one.
///
/// The iterator is fail-fast: the first directory that cannot be read or
/// path that cannot be classified is yielded as an
/// [`PackError::NotAccessible`] error, after which the iterator ends.
///
/// # Examples
///
/// ```no_run
/// use zipdir_core::walker::traverse;
///
/// for path in traverse("./project", true) {
///     println!("{}", path?.display());
/// }
/// # Ok::<(), zipdir_core::PackError>(())
/// ```
pub fn traverse<P: AsRef<Path>>(root: P, recursive: bool) -> RegularFiles {
    let root = root.as_ref().to_path_buf();
    RegularFiles {
        inner: WalkDir::new(&root).follow_links(false).into_iter(),
        root,
        recursive,
        finished: false,
    }
}

/// Iterator returned by [`traverse`].
#[derive(Debug)]
pub struct RegularFiles {
    inner: walkdir::IntoIter,
    root: PathBuf,
    recursive: bool,
    finished: bool,
}

impl RegularFiles {
    /// Root directory this walk started from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether subdirectories are descended into.
    pub const fn is_recursive(&self) -> bool {
        self.recursive
    }

    fn fail(&mut self, err: PackError) -> Option<Result<PathBuf>> {
        self.finished = true;
        Some(Err(err))
    }
}

impl Iterator for RegularFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    let err = convert_walk_error(e, &self.root);
                    return self.fail(err);
                }
            };

            let kind = match classify(entry.path()) {
                Ok(kind) => kind,
                Err(e) => return self.fail(e),
            };

            match kind {
                PathKind::RegularFile => return Some(Ok(entry.into_path())),
                PathKind::Directory => {
                    // Only real directories were pushed by walkdir; a symlink
                    // to a directory is never descended and must not pop.
                    if !self.recursive && entry.depth() > 0 && entry.file_type().is_dir() {
                        self.inner.skip_current_dir();
                    }
                }
                PathKind::Other | PathKind::Missing => {
                    debug!(path = %entry.path().display(), ?kind, "skipping non-regular entry");
                }
            }
        }
    }
}

impl std::iter::FusedIterator for RegularFiles {}

fn convert_walk_error(err: walkdir::Error, root: &Path) -> PackError {
    let path = err.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("file system loop detected"));
    PackError::NotAccessible { path, source }
}
