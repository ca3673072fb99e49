//! Collection of markdown link targets.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{BookError, BookResult};
use crate::line::for_each_line;

/// `](target)`: the destination half of an inline markdown link.
static LINK_TARGET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\(([^)]+)\)").expect("link pattern must compile"));

/// Link targets in a single line, in order of appearance.
pub fn link_targets(line: &str) -> impl Iterator<Item = &str> {
    LINK_TARGET_RE
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|target| target.as_str())
}

/// Add every target found in `reader` to `targets`. Matches never span lines.
pub fn collect_links<R: BufRead>(
    reader: &mut R,
    targets: &mut BTreeSet<String>,
) -> io::Result<()> {
    for_each_line(reader, |line| {
        for target in link_targets(line) {
            if !targets.contains(target) {
                targets.insert(target.to_string());
            }
        }
        Ok(())
    })
}

/// Distinct link targets across all `paths`, in ascending order.
///
/// Any unreadable file aborts the scan.
pub fn scan_links<P: AsRef<Path>>(paths: &[P]) -> BookResult<BTreeSet<String>> {
    let mut targets = BTreeSet::new();

    for path in paths {
        let path = path.as_ref();
        debug!(path = %path.display(), "scanning for links");
        let file = File::open(path).map_err(|err| BookError::file_access(path, err))?;
        let mut reader = BufReader::new(file);
        collect_links(&mut reader, &mut targets)
            .map_err(|err| BookError::file_access(path, err))?;
    }

    Ok(targets)
}
