//! Output rendering for match records and the threshold summary.
//!
//! Match records use two fixed formats chosen by the end-position flag;
//! these lines are plain text on stdout so they stay grep- and
//! editor-friendly. Colors are used only for stderr prefixes and honor
//! `NO_COLOR`.

use crate::models::MatchRecord;
use owo_colors::OwoColorize;

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Render one match record.
///
/// - without end position: `{source}:{line}:{start}: use of "{word}"`
/// - with end position: `{source}:{line}:{start}:{end}: use of "{word}"`
pub fn render_match(record: &MatchRecord, end_pos: bool) -> String {
    if end_pos {
        format!(
            "{}:{}:{}:{}: use of \"{}\"",
            record.source, record.line_number, record.start_column, record.end_column, record.word
        )
    } else {
        format!(
            "{}:{}:{}: use of \"{}\"",
            record.source, record.line_number, record.start_column, record.word
        )
    }
}

/// Print one match record to stdout.
pub fn print_match(record: &MatchRecord, end_pos: bool) {
    println!("{}", render_match(record, end_pos));
}

/// Render the over-threshold summary line.
pub fn render_threshold_summary(issues: usize, max: usize) -> String {
    format!("Found {issues} issues, with maximum set to {max}!")
}

/// Print the over-threshold summary to stdout.
pub fn print_threshold_summary(issues: usize, max: usize) {
    println!("{}", render_threshold_summary(issues, max));
}

/// Prefix for fatal stderr diagnostics.
pub fn error_prefix() -> String {
    if use_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Prefix for friendly stderr notes.
pub fn note_prefix() -> String {
    if use_colors() {
        "note:".cyan().to_string()
    } else {
        "note:".to_string()
    }
}
