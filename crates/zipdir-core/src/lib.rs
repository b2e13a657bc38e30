//! Packages a directory tree into a single ZIP archive.
//!
//! `zipdir-core` walks a directory, adds every regular file it finds to a ZIP
//! archive under its path relative to the walked root, and finalizes the
//! archive atomically: a failed run never leaves a truncated archive at the
//! destination.
//!
//! # Examples
//!
//! ```no_run
//! use zipdir_core::PackConfig;
//! use zipdir_core::pack_directory;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PackConfig::default().with_recursive(true);
//! let report = pack_directory("backup.zip", "/srv/data", &config)?;
//! println!("Packed {} files", report.files_added);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod classify;
pub mod config;
pub mod error;
pub mod pack;
pub mod packer;
pub mod report;
pub mod walker;
pub mod writer;

pub use config::PackConfig;
pub use error::PackError;
pub use error::Result;
pub use pack::pack_directory;
pub use pack::pack_directory_with_progress;
pub use packer::Packer;
pub use report::NoopProgress;
pub use report::PackReport;
pub use report::ProgressCallback;
