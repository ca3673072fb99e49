//! Table-of-contents consistency checking.
//!
//! A book declares its chapters under the `toc` key of its YAML configuration
//! (`lessons`, `bib` and `extras`). The chapter files on disk are named after
//! those identifiers. [`check_toc`] loads both sides, normalises them into
//! identifier sets and reports the two one-sided differences.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BookError, BookResult};

/// Title of the block listing identifiers declared without a chapter file.
pub const MISSING_FILE_TITLE: &str = "in configuration but no file";
/// Title of the block listing chapter files that are not declared.
pub const UNDECLARED_FILE_TITLE: &str = "file but not in configuration";

/// Structural file that is never compared against the configuration.
const INDEX_IDENTIFIER: &str = "index";
const PATH_SEPARATOR: char = '/';

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    toc: Option<RawToc>,
}

#[derive(Debug, Default, Deserialize)]
struct RawToc {
    #[serde(default)]
    lessons: Option<Vec<String>>,
    #[serde(default)]
    bib: Option<Vec<String>>,
    #[serde(default)]
    extras: Option<Vec<String>>,
}

/// Validated `toc` section of a book configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TocConfig {
    pub lessons: Vec<String>,
    pub bib: Vec<String>,
    pub extras: Vec<String>,
}

impl TocConfig {
    /// Read and validate the configuration stored at `path`.
    pub fn load(path: &Path) -> BookResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| BookError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "parsing toc configuration");
        Self::from_yaml(&contents, path)
    }

    /// Validate YAML `contents`; `origin` is only used for diagnostics.
    pub fn from_yaml(contents: &str, origin: &Path) -> BookResult<Self> {
        let raw: RawConfig =
            serde_yaml::from_str(contents).map_err(|source| BookError::ConfigParse {
                path: origin.to_path_buf(),
                source,
            })?;

        let Some(toc) = raw.toc else {
            return Err(BookError::MissingKey { keys: vec!["toc"] });
        };

        let mut missing = Vec::new();
        if toc.lessons.is_none() {
            missing.push("toc.lessons");
        }
        if toc.bib.is_none() {
            missing.push("toc.bib");
        }
        if toc.extras.is_none() {
            missing.push("toc.extras");
        }
        if !missing.is_empty() {
            return Err(BookError::MissingKey { keys: missing });
        }

        Ok(TocConfig {
            lessons: toc.lessons.unwrap_or_default(),
            bib: toc.bib.unwrap_or_default(),
            extras: toc.extras.unwrap_or_default(),
        })
    }

    /// Union of all three groups with surrounding `/` characters removed.
    pub fn identifiers(&self) -> BTreeSet<String> {
        self.lessons
            .iter()
            .chain(&self.bib)
            .chain(&self.extras)
            .map(|entry| entry.trim_matches(PATH_SEPARATOR).to_string())
            .collect()
    }
}

/// Derive the chapter identifier for a `<dir>/<file>` style path.
///
/// The identifier is the last `/`-separated segment cut at its first `.`,
/// so `src/intro.md` and `src/intro.fr.md` both yield `intro`.
pub fn chapter_identifier(path: &str) -> BookResult<String> {
    let Some((_, file_name)) = path.rsplit_once(PATH_SEPARATOR) else {
        return Err(BookError::PathShape {
            path: path.to_string(),
            reason: "has no directory component",
        });
    };

    let identifier = file_name.split('.').next().unwrap_or_default();
    if identifier.is_empty() {
        return Err(BookError::PathShape {
            path: path.to_string(),
            reason: "does not name a chapter file",
        });
    }

    Ok(identifier.to_string())
}

/// Identifier set for a list of chapter paths, excluding `index`.
pub fn chapter_identifiers<I, S>(paths: I) -> BookResult<BTreeSet<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut identifiers = paths
        .into_iter()
        .map(|path| chapter_identifier(path.as_ref()))
        .collect::<BookResult<BTreeSet<_>>>()?;
    identifiers.remove(INDEX_IDENTIFIER);
    Ok(identifiers)
}

/// Both one-sided differences between the declared and observed chapters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TocReport {
    pub in_config_not_files: Vec<String>,
    pub in_files_not_config: Vec<String>,
}

impl TocReport {
    pub fn compare(config: &BTreeSet<String>, files: &BTreeSet<String>) -> Self {
        TocReport {
            in_config_not_files: config.difference(files).cloned().collect(),
            in_files_not_config: files.difference(config).cloned().collect(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.in_config_not_files.is_empty() && self.in_files_not_config.is_empty()
    }

    /// Non-empty report blocks, always in the order "missing file" then
    /// "undeclared file".
    pub fn blocks(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        [
            (MISSING_FILE_TITLE, self.in_config_not_files.as_slice()),
            (UNDECLARED_FILE_TITLE, self.in_files_not_config.as_slice()),
        ]
        .into_iter()
        .filter(|(_, values)| !values.is_empty())
    }

    /// Line-oriented rendering: each block is its title followed by one
    /// identifier per line.
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for (title, values) in self.blocks() {
            out.push_str(title);
            out.push('\n');
            for value in values {
                out.push_str(value);
                out.push('\n');
            }
        }
        out
    }
}

/// Compare the configuration at `config_path` with the given chapter files.
pub fn check_toc(config_path: &Path, chapter_paths: &[PathBuf]) -> BookResult<TocReport> {
    let config_toc = TocConfig::load(config_path)?.identifiers();
    let files_toc = chapter_identifiers(
        chapter_paths
            .iter()
            .map(|path| path.to_string_lossy().into_owned()),
    )?;
    debug!(
        declared = config_toc.len(),
        found = files_toc.len(),
        "comparing table of contents"
    );
    Ok(TocReport::compare(&config_toc, &files_toc))
}
