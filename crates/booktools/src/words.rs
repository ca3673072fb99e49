//! Prose word counts for markdown chapters.

use std::fs;
use std::path::Path;

use pulldown_cmark::{Event, Parser, Tag};
use tracing::debug;

use crate::error::{BookError, BookResult};

/// Count the words of running text in `markdown`.
///
/// Code blocks, inline code, raw HTML and link destinations are skipped;
/// link and image text count.
pub fn count_words(markdown: &str) -> usize {
    let mut prose = String::new();
    let mut in_code_block = false;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(Tag::CodeBlock(_)) => in_code_block = false,
            Event::Text(text) if !in_code_block => prose.push_str(&text),
            Event::Start(tag) | Event::End(tag) if is_inline(&tag) => {}
            _ => prose.push(' '),
        }
    }

    prose.split_whitespace().count()
}

/// Total word count across `paths`. Any unreadable file aborts the count.
pub fn count_words_in_files<P: AsRef<Path>>(paths: &[P]) -> BookResult<usize> {
    let mut total = 0usize;
    for path in paths {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).map_err(|err| BookError::file_access(path, err))?;
        let words = count_words(&contents);
        debug!(path = %path.display(), words, "counted words");
        total += words;
    }
    Ok(total)
}

// Inline markup joins its text to the surrounding words.
pub(crate) fn is_inline(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link(..) | Tag::Image(..)
    )
}
