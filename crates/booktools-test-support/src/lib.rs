//! Shared test harness utilities for booktools crates.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Scratch book tree living in a temporary directory.
pub struct BookFixture {
    dir: TempDir,
}

impl BookFixture {
    pub fn new() -> Self {
        BookFixture {
            dir: TempDir::new().expect("tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directory");
        }
        fs::write(&path, contents).expect("write file");
        path
    }

    /// Write a `_config.yml` declaring the given toc groups.
    pub fn write_config(&self, lessons: &[&str], bib: &[&str], extras: &[&str]) -> PathBuf {
        self.write("_config.yml", &toc_yaml(lessons, bib, extras))
    }
}

impl Default for BookFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a minimal book configuration with a `toc` section.
pub fn toc_yaml(lessons: &[&str], bib: &[&str], extras: &[&str]) -> String {
    let mut out = String::from("title: \"Test Book\"\ntoc:\n");
    for (key, values) in [("lessons", lessons), ("bib", bib), ("extras", extras)] {
        if values.is_empty() {
            out.push_str(&format!("  {key}: []\n"));
            continue;
        }
        out.push_str(&format!("  {key}:\n"));
        for value in values {
            out.push_str(&format!("    - \"{value}\"\n"));
        }
    }
    out
}
