//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    name = "blocklint",
    version,
    about = "Lint block-listed words",
    long_about = "Blocklint — scan text files (or stdin) line by line for block-listed words.\n\nConfiguration precedence: CLI > blocklint.toml|yaml > ~/.blocklint.toml > defaults.",
    after_help = "Examples:\n  blocklint src/ README.md\n  blocklint --blocklist master,slave --end-pos notes.txt\n  git diff | blocklint --stdin --max-issue-threshold 1"
)]
/// Top-level CLI options.
pub struct Cli {
    /// Files or directories to lint; a directory contributes its immediate
    /// files. Defaults to the current directory.
    pub files: Vec<String>,

    #[arg(
        long,
        help = "Comma separated words to lint in any context, with possibly special characters between, case insensitive; defaults to master,slave,whitelist,blacklist"
    )]
    pub blocklist: Option<String>,

    #[arg(
        long,
        help = "Comma separated words to lint as whole words, with possibly special characters between, case insensitive"
    )]
    pub wordlist: Option<String>,

    #[arg(long, help = "Comma separated words to lint as whole words exactly as entered")]
    pub exactlist: Option<String>,

    #[arg(
        short = 'e',
        long,
        action = clap::ArgAction::SetTrue,
        help = "Show the end position of a match in output"
    )]
    pub end_pos: bool,

    #[arg(
        long,
        action = clap::ArgAction::SetTrue,
        help = "Use stdin as input instead of a file list"
    )]
    pub stdin: bool,

    #[arg(long, help = "Cause non-zero exit status when at least this many issues are found")]
    pub max_issue_threshold: Option<usize>,

    #[arg(
        long,
        help = "Comma separated paths that should not be checked, even inside a checked directory"
    )]
    pub skip_files: Option<String>,
}
