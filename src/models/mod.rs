//! Shared data models for matchers, match records, and per-source outcomes.

/// Strictness tier of a configured word, ordered least to most restrictive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// Matches anywhere in a line, case-insensitive, tolerant of special
    /// characters between letters.
    Blocklist,
    /// Same tolerance as `Blocklist`, but only as a whole word.
    Wordlist,
    /// Exact literal, whole word, case-sensitive.
    Exactlist,
}

impl Tier {
    /// All tiers in ascending restrictiveness, the order precedence
    /// resolution walks them in.
    pub const ASCENDING: [Tier; 3] = [Tier::Blocklist, Tier::Wordlist, Tier::Exactlist];
}

/// One matcher firing at one position on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// File path or the literal name `stdin`.
    pub source: String,
    /// 1-based line number.
    pub line_number: usize,
    /// 1-based inclusive start column.
    pub start_column: usize,
    /// 1-based inclusive end column (0-based exclusive end used as-is).
    pub end_column: usize,
    /// The configured literal that matched, as entered.
    pub word: String,
}

/// Why a source contributed zero matches without being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The file is missing or could not be opened.
    Unavailable,
    /// The bytes are not valid UTF-8 text.
    Decode,
}

/// Result of processing one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceOutcome {
    /// Scanned to completion; carries the number of matches found.
    Scanned(usize),
    /// Silently skipped; contributes zero matches.
    Skipped(SkipReason),
}

impl SourceOutcome {
    pub fn matches(&self) -> usize {
        match self {
            SourceOutcome::Scanned(n) => *n,
            SourceOutcome::Skipped(_) => 0,
        }
    }
}

/// Whether the aggregate match count trips the configured maximum.
/// Evaluated once, after all sources are processed.
pub fn exceeds_threshold(total_issues: usize, max: Option<usize>) -> bool {
    match max {
        Some(max) => total_issues >= max,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(exceeds_threshold(3, Some(3)));
        assert!(exceeds_threshold(4, Some(3)));
        assert!(!exceeds_threshold(3, Some(4)));
        assert!(!exceeds_threshold(0, Some(1)));
        assert!(!exceeds_threshold(usize::MAX, None));
    }

    #[test]
    fn test_skipped_sources_contribute_zero_matches() {
        assert_eq!(SourceOutcome::Skipped(SkipReason::Unavailable).matches(), 0);
        assert_eq!(SourceOutcome::Skipped(SkipReason::Decode).matches(), 0);
        assert_eq!(SourceOutcome::Scanned(2).matches(), 2);
    }
}
