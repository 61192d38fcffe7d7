//! Blocklint CLI binary entry point.
//! Resolves configuration, compiles matchers, scans sources, and decides
//! the exit status from the aggregate match count.

mod cli;
mod config;
mod matcher;
mod models;
mod output;
mod scan;

use clap::Parser;
use cli::Cli;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let eff = match config::resolve_effective(&cli, &cwd) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", output::error_prefix(), e);
            std::process::exit(2);
        }
    };
    if !eff.config_found {
        eprintln!(
            "{} {}",
            output::note_prefix(),
            "No blocklint config file found; using defaults."
        );
    }

    let tiers = matcher::resolve_tiers(&eff.blocklist, &eff.wordlist, &eff.exactlist);
    let matchers = matcher::compile_matchers(&tiers);

    let mut total_issues = 0usize;
    let end_pos = eff.end_pos;

    if eff.stdin {
        total_issues += scan::scan_stdin(&matchers, |r| output::print_match(r, end_pos)).matches();
    } else {
        // Per-source failures are silent skips; the run always covers every
        // remaining source.
        for source in &eff.sources {
            total_issues +=
                scan::scan_path(source, &matchers, |r| output::print_match(r, end_pos)).matches();
        }
    }

    if let Some(max) = eff.max_issue_threshold {
        if models::exceeds_threshold(total_issues, Some(max)) {
            output::print_threshold_summary(total_issues, max);
            std::process::exit(1);
        }
    }
}
