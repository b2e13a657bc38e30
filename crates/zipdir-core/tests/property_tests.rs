//! Property-based tests for packaging.
//!
//! These tests use proptest to generate directory trees and relative paths
//! and verify that archive contents and entry names always match the source.

#![allow(clippy::expect_used)]

use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::ZipArchive;
use zipdir_core::PackConfig;
use zipdir_core::pack_directory;
use zipdir_core::writer::entry_name;

/// Generates a tree as relative file path → contents.
///
/// Directory components are prefixed with `d` and file names with `f` so a
/// file can never collide with a directory of the same name.
fn tree_strategy() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    let path = (
        prop::collection::vec("d[a-z0-9_]{0,6}", 0..4),
        "f[a-z0-9_.-]{0,10}",
    )
        .prop_map(|(dirs, file)| {
            let mut parts = dirs;
            parts.push(file);
            parts.join("/")
        });
    prop::collection::btree_map(path, prop::collection::vec(any::<u8>(), 0..2048), 0..16)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Packing then reading back reproduces every path and byte.
    #[test]
    fn prop_roundtrip(tree in tree_strategy()) {
        let source = TempDir::new().expect("failed to create source dir");
        for (name, contents) in &tree {
            let path = source.path().join(name);
            fs::create_dir_all(path.parent().expect("file has a parent"))
                .expect("failed to create parent");
            fs::write(&path, contents).expect("failed to write file");
        }

        let out = TempDir::new().expect("failed to create output dir");
        let output = out.path().join("prop.zip");
        let report = pack_directory(&output, source.path(), &PackConfig::default())
            .expect("packing failed");
        prop_assert_eq!(report.files_added, tree.len());

        let mut archive = ZipArchive::new(File::open(&output).expect("open archive"))
            .expect("read archive");
        let mut actual = BTreeMap::new();
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).expect("entry");
            let mut contents = Vec::new();
            entry.read_to_end(&mut contents).expect("read entry");
            actual.insert(entry.name().to_string(), contents);
        }
        prop_assert_eq!(actual, tree);
    }

    /// The entry name is exactly the path below the root, slash-joined.
    #[test]
    fn prop_entry_name_strips_root(
        root in prop::collection::vec("[a-zA-Z0-9_-]{1,8}", 0..4),
        below in prop::collection::vec("[a-zA-Z0-9_. -]{1,8}", 1..5)
    ) {
        prop_assume!(below.iter().all(|c| c != "." && c != ".."));

        let root_path: PathBuf = std::iter::once("/".to_string()).chain(root).collect();
        let full = below.iter().fold(root_path.clone(), |acc, c| acc.join(c));

        let name = entry_name(&root_path, &full).expect("name derivation failed");
        prop_assert!(!name.starts_with('/'));
        prop_assert_eq!(name, below.join("/"));
    }
}
