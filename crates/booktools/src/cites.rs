//! Expansion of bibliography citation macros.
//!
//! The LaTeX pipeline emits `\hyperlink{BIB}{key1,key2}` for a citation
//! group. Each key must become its own link to the `b:<key>` anchor, so the
//! group is rewritten to `[\hyperlink{b:key1}{key1},\hyperlink{b:key2}{key2}]`.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::line::for_each_line;

/// `\hyperlink{BIB}{...}` with the comma-separated keys captured. `BIB` is a
/// fixed sentinel.
static CITATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\hyperlink\{BIB\}\{([^}]+)\}").expect("citation pattern must compile")
});

/// Rewrite every citation group in `line`, leaving other text untouched.
pub fn rewrite_line(line: &str) -> Cow<'_, str> {
    CITATION_RE.replace_all(line, |caps: &Captures<'_>| expand_keys(&caps[1]))
}

/// Render a comma-separated key list as a bracketed list of per-key links.
pub fn expand_keys(keys: &str) -> String {
    let links = keys
        .split(',')
        .map(str::trim)
        .map(|key| {
            trace!(key, "expanding citation");
            format!("\\hyperlink{{b:{key}}}{{{key}}}")
        })
        .collect::<Vec<_>>();
    format!("[{}]", links.join(","))
}

/// Copy `reader` to `writer` line by line, rewriting citations on the way.
///
/// Returns the number of lines that contained at least one citation.
pub fn rewrite_stream<R, W>(reader: &mut R, writer: &mut W) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut rewritten = 0usize;

    for_each_line(reader, |line| {
        let output = rewrite_line(line);
        if let Cow::Owned(_) = output {
            rewritten += 1;
        }
        writer.write_all(output.as_bytes())
    })?;

    writer.flush()?;
    debug!(rewritten, "citation rewrite finished");
    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_keys_and_strips_whitespace() {
        assert_eq!(
            rewrite_line("\\hyperlink{BIB}{foo, bar}"),
            "[\\hyperlink{b:foo}{foo},\\hyperlink{b:bar}{bar}]"
        );
    }

    #[test]
    fn rewrites_each_group_in_a_line() {
        assert_eq!(
            rewrite_line("see \\hyperlink{BIB}{a} and \\hyperlink{BIB}{ b ,c }.\n"),
            "see [\\hyperlink{b:a}{a}] and [\\hyperlink{b:b}{b},\\hyperlink{b:c}{c}].\n"
        );
    }

    #[test]
    fn other_sentinels_are_left_alone() {
        let line = "\\hyperlink{REF}{a} \\hyperlink{b:a}{a}\n";
        assert!(matches!(rewrite_line(line), Cow::Borrowed(_)));
        assert_eq!(rewrite_line(line), line);
    }

    #[test]
    fn empty_key_list_does_not_match() {
        let line = "\\hyperlink{BIB}{}";
        assert_eq!(rewrite_line(line), line);
    }

    #[test]
    fn empty_keys_between_commas_are_kept() {
        assert_eq!(
            expand_keys("a,,b"),
            "[\\hyperlink{b:a}{a},\\hyperlink{b:}{},\\hyperlink{b:b}{b}]"
        );
    }
}
