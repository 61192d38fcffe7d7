//! Line scanner: applies compiled matchers to input sources.
//!
//! Lines carrying a `blocklint: ... pragma` marker are skipped entirely.
//! Matches on a line are reported grouped by matcher order (blocklist,
//! wordlist, exactlist, each sorted), not by column; within one matcher
//! they run left to right. Output is deterministic for identical input.

use crate::matcher::Matcher;
use crate::models::{MatchRecord, SkipReason, SourceOutcome};
use regex::Regex;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::OnceLock;

fn pragma_regex() -> &'static Regex {
    static PRAGMA: OnceLock<Regex> = OnceLock::new();
    PRAGMA.get_or_init(|| Regex::new(r"blocklint:.*pragma").expect("fixed pattern"))
}

/// Scan one line, appending a record per match.
///
/// Column convention: start is the 0-based match start plus one; end is
/// the 0-based exclusive match end used as-is, which equals the 1-based
/// inclusive end column. Columns count characters, not bytes, so
/// non-ASCII text earlier on the line does not shift them.
pub fn check_line(
    line: &str,
    matchers: &[Matcher],
    source: &str,
    line_number: usize,
    records: &mut Vec<MatchRecord>,
) {
    if pragma_regex().is_match(line) {
        return;
    }
    for matcher in matchers {
        for m in matcher.regex.find_iter(line) {
            records.push(MatchRecord {
                source: source.to_string(),
                line_number,
                start_column: line[..m.start()].chars().count() + 1,
                end_column: line[..m.end()].chars().count(),
                word: matcher.word.clone(),
            });
        }
    }
}

/// Scan full text under a display name, yielding each record to `emit`.
///
/// Returns the number of matches found. `emit` lets the driver print
/// records as they are produced instead of retaining them.
pub fn scan_text<F>(text: &str, source: &str, matchers: &[Matcher], mut emit: F) -> usize
where
    F: FnMut(&MatchRecord),
{
    let mut count = 0;
    let mut records = Vec::new();
    for (i, line) in text.lines().enumerate() {
        records.clear();
        check_line(line, matchers, source, i + 1, &mut records);
        for record in &records {
            count += 1;
            emit(record);
        }
    }
    count
}

/// Scan a file path. Missing/unreadable files and non-UTF-8 content are
/// silent skips contributing zero matches; the run moves on to the next
/// source.
pub fn scan_path<F>(path: &Path, matchers: &[Matcher], emit: F) -> SourceOutcome
where
    F: FnMut(&MatchRecord),
{
    let text = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return SourceOutcome::Skipped(SkipReason::Decode);
        }
        Err(_) => return SourceOutcome::Skipped(SkipReason::Unavailable),
    };
    let name = path.to_string_lossy();
    SourceOutcome::Scanned(scan_text(&text, &name, matchers, emit))
}

/// Scan standard input under the display name `stdin`.
pub fn scan_stdin<F>(matchers: &[Matcher], emit: F) -> SourceOutcome
where
    F: FnMut(&MatchRecord),
{
    let mut text = String::new();
    match io::stdin().lock().read_to_string(&mut text) {
        Ok(_) => SourceOutcome::Scanned(scan_text(&text, "stdin", matchers, emit)),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            SourceOutcome::Skipped(SkipReason::Decode)
        }
        Err(_) => SourceOutcome::Skipped(SkipReason::Unavailable),
    }
}
