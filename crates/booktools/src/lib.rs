//! Build-support routines for chapter-based book sources.
//!
//! - [`toc`]: compare the declared table of contents with the chapter files.
//! - [`cites`]: expand `\hyperlink{BIB}{...}` citation groups into per-key links.
//! - [`links`]: collect the distinct markdown link targets of a set of files.
//! - [`words`]: count prose words in markdown chapters.
//! - [`gloss`]: list the prose that links into the glossary.
//!
//! All routines are synchronous and stateless; the binaries in
//! `booktools-cli` only add argument parsing and output.

pub mod cites;
mod error;
pub mod gloss;
mod line;
pub mod links;
pub mod toc;
pub mod words;

pub use cites::{expand_keys, rewrite_line, rewrite_stream};
pub use error::{BookError, BookResult, ExitCode};
pub use gloss::{gloss_references, scan_gloss};
pub use line::for_each_line;
pub use links::{collect_links, link_targets, scan_links};
pub use toc::{
    chapter_identifier, chapter_identifiers, check_toc, TocConfig, TocReport, MISSING_FILE_TITLE,
    UNDECLARED_FILE_TITLE,
};
pub use words::{count_words, count_words_in_files};
