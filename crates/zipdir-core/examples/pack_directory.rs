//! Example: Packaging a directory with zipdir-core
//!
//! Run with: `cargo run --example pack_directory`

use tempfile::TempDir;
use zipdir_core::PackConfig;
use zipdir_core::Packer;
use zipdir_core::pack_directory;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let workspace = TempDir::new()?;
    let source = workspace.path().join("site");
    std::fs::create_dir_all(source.join("assets"))?;
    std::fs::write(source.join("index.html"), "<h1>Hello, zipdir!</h1>")?;
    std::fs::write(source.join("assets/style.css"), "h1 { color: teal; }")?;

    // Example 1: Whole tree with default config
    println!("Example 1: Recursive packaging");
    let output = workspace.path().join("site.zip");
    let report = pack_directory(&output, &source, &PackConfig::default())?;
    println!("  Packed {} files", report.files_added);
    println!(
        "  Compression ratio: {:.1}%",
        report.compression_percentage()
    );

    // Example 2: Builder, top level only, into a directory that does not exist yet
    println!("\nExample 2: Builder pattern");
    let report = Packer::new()
        .source(&source)
        .output(workspace.path().join("dist/top-level.zip"))
        .recursive(false)
        .create_parent_dirs(true)
        .pack()?;
    println!("  Packed {} files", report.files_added);

    println!("\nExamples completed successfully!");
    Ok(())
}
