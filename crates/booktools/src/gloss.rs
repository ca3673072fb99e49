//! Glossary references in markdown chapters.
//!
//! A chapter points at glossary entries with links into `/gloss/`. This
//! module reports every run of prose whose markdown source mentions that
//! path, so authors can review which terms each chapter leans on.

use std::fs;
use std::ops::Range;
use std::path::Path;

use pulldown_cmark::{Event, Parser, Tag};
use tracing::debug;

use crate::error::{BookError, BookResult};
use crate::words::is_inline;

const GLOSSARY_MARKER: &str = "/gloss/";

/// Source text of each prose run in `markdown` that references the glossary.
///
/// A run is the inline content of one block (paragraph, heading, list item
/// text) with its line breaks folded into single spaces. Code blocks are
/// never reported.
pub fn gloss_references(markdown: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut run: Option<Range<usize>> = None;
    let mut in_code_block = false;

    for (event, range) in Parser::new(markdown).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(_)) => {
                flush_run(markdown, &mut run, &mut found);
                in_code_block = true;
            }
            Event::End(Tag::CodeBlock(_)) => in_code_block = false,
            Event::Text(_) | Event::Code(_) | Event::SoftBreak | Event::HardBreak
                if !in_code_block =>
            {
                extend_run(&mut run, range)
            }
            Event::Start(tag) | Event::End(tag) if is_inline(&tag) => extend_run(&mut run, range),
            _ => flush_run(markdown, &mut run, &mut found),
        }
    }
    flush_run(markdown, &mut run, &mut found);

    found
}

/// Glossary references across `paths`, in file order. Any unreadable file
/// aborts the scan.
pub fn scan_gloss<P: AsRef<Path>>(paths: &[P]) -> BookResult<Vec<String>> {
    let mut found = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).map_err(|err| BookError::file_access(path, err))?;
        let references = gloss_references(&contents);
        debug!(
            path = %path.display(),
            references = references.len(),
            "scanned glossary references"
        );
        found.extend(references);
    }
    Ok(found)
}

fn extend_run(run: &mut Option<Range<usize>>, range: Range<usize>) {
    *run = Some(match run.take() {
        Some(current) => current.start.min(range.start)..current.end.max(range.end),
        None => range,
    });
}

fn flush_run(markdown: &str, run: &mut Option<Range<usize>>, found: &mut Vec<String>) {
    let Some(range) = run.take() else {
        return;
    };
    let text = &markdown[range];
    if text.contains(GLOSSARY_MARKER) {
        found.push(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        );
    }
}
