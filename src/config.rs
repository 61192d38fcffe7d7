//! Configuration discovery and effective settings resolution.
//!
//! Blocklint reads `blocklint.toml|yaml|yml` from the working directory and
//! `~/.blocklint.toml` at the user level, then merges them with CLI flags to
//! produce an `Effective` config. Defaults:
//! - word tiers: empty; when no tier is supplied anywhere, the blocklist
//!   falls back to `master,slave,whitelist,blacklist`
//! - `end_pos`, `stdin`: false
//! - `max_issue_threshold`: unset
//! - `files`: the current directory
//!
//! Overrides precedence: CLI > working-directory config > user config >
//! defaults. A config file that exists but cannot be read or parsed is a
//! fatal startup error, not a silent skip.

use crate::cli::Cli;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal configuration failures surfaced before any scanning starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config file {} is not valid {format}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        format: &'static str,
        message: String,
    },
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `blocklint.toml|yaml|yml`.
pub struct BlocklintConfig {
    pub blocklist: Option<Vec<String>>,
    pub wordlist: Option<Vec<String>>,
    pub exactlist: Option<Vec<String>>,
    pub end_pos: Option<bool>,
    pub stdin: Option<bool>,
    pub max_issue_threshold: Option<usize>,
    pub skip_files: Option<Vec<String>>,
}

impl BlocklintConfig {
    /// Overlay `other` on top of `self`, key by key.
    fn overlaid(self, other: BlocklintConfig) -> BlocklintConfig {
        BlocklintConfig {
            blocklist: other.blocklist.or(self.blocklist),
            wordlist: other.wordlist.or(self.wordlist),
            exactlist: other.exactlist.or(self.exactlist),
            end_pos: other.end_pos.or(self.end_pos),
            stdin: other.stdin.or(self.stdin),
            max_issue_threshold: other.max_issue_threshold.or(self.max_issue_threshold),
            skip_files: other.skip_files.or(self.skip_files),
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Fully-resolved configuration used by the driver after applying
/// precedence. Word sets are deduplicated, empty-entry-free, and iterate
/// lexicographically; tier precedence is applied later by the matcher
/// compiler.
pub struct Effective {
    pub blocklist: BTreeSet<String>,
    pub wordlist: BTreeSet<String>,
    pub exactlist: BTreeSet<String>,
    pub end_pos: bool,
    pub stdin: bool,
    pub max_issue_threshold: Option<usize>,
    /// Resolved input files, in supplied order (directories expanded).
    pub sources: Vec<PathBuf>,
    /// Whether any config file was found (drives a friendly stderr note).
    pub config_found: bool,
}

/// Load `BlocklintConfig` from `blocklint.toml` or `blocklint.yaml|yml`
/// under `dir`, if present. Parse failures are fatal.
pub fn load_config(dir: &Path) -> Result<Option<BlocklintConfig>, ConfigError> {
    let toml_path = dir.join("blocklint.toml");
    if toml_path.exists() {
        return read_toml(&toml_path).map(Some);
    }
    for yml in ["blocklint.yaml", "blocklint.yml"] {
        let p = dir.join(yml);
        if p.exists() {
            return read_yaml(&p).map(Some);
        }
    }
    Ok(None)
}

/// Load the user-level `~/.blocklint.toml`, if present.
pub fn load_user_config() -> Result<Option<BlocklintConfig>, ConfigError> {
    let Some(home) = dirs::home_dir() else {
        return Ok(None);
    };
    let path = home.join(".blocklint.toml");
    if path.exists() {
        read_toml(&path).map(Some)
    } else {
        Ok(None)
    }
}

fn read_toml(path: &Path) -> Result<BlocklintConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&s).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        format: "TOML",
        message: e.to_string(),
    })
}

fn read_yaml(path: &Path) -> Result<BlocklintConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&s).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        format: "YAML",
        message: e.to_string(),
    })
}

/// Resolve `Effective` by merging CLI flags, discovered config files, and
/// defaults, then expanding the file arguments into concrete sources.
pub fn resolve_effective(cli: &Cli, cwd: &Path) -> Result<Effective, ConfigError> {
    let user = load_user_config()?;
    let local = load_config(cwd)?;
    Ok(resolve_with(cli, user, local, cwd))
}

/// Pure merge of CLI flags over discovered config contents over defaults.
pub fn resolve_with(
    cli: &Cli,
    user: Option<BlocklintConfig>,
    local: Option<BlocklintConfig>,
    cwd: &Path,
) -> Effective {
    let config_found = user.is_some() || local.is_some();
    let cfg = user
        .unwrap_or_default()
        .overlaid(local.unwrap_or_default());

    // Per-tier: CLI CSV wins over config arrays.
    let mut blocklist = tier_words(cli.blocklist.as_deref(), cfg.blocklist.as_deref());
    let wordlist = tier_words(cli.wordlist.as_deref(), cfg.wordlist.as_deref());
    let exactlist = tier_words(cli.exactlist.as_deref(), cfg.exactlist.as_deref());

    // Default blocklist applies only when no tier was supplied anywhere.
    let any_supplied = [&cli.blocklist, &cli.wordlist, &cli.exactlist]
        .iter()
        .any(|v| v.is_some())
        || cfg.blocklist.is_some()
        || cfg.wordlist.is_some()
        || cfg.exactlist.is_some();
    if !any_supplied {
        blocklist = ["master", "slave", "whitelist", "blacklist"]
            .iter()
            .map(|w| w.to_string())
            .collect();
    }

    let end_pos = cli.end_pos || cfg.end_pos.unwrap_or(false);
    let stdin = cli.stdin || cfg.stdin.unwrap_or(false);
    let max_issue_threshold = cli.max_issue_threshold.or(cfg.max_issue_threshold);

    let skip_files: BTreeSet<String> = match (&cli.skip_files, &cfg.skip_files) {
        (Some(csv), _) => split_csv(csv).into_iter().collect(),
        (None, Some(list)) => list.iter().filter(|s| !s.is_empty()).cloned().collect(),
        (None, None) => BTreeSet::new(),
    };

    let file_args: Vec<String> = if cli.files.is_empty() {
        vec![cwd.to_string_lossy().to_string()]
    } else {
        cli.files.clone()
    };
    let sources = expand_sources(&file_args, &skip_files);

    Effective {
        blocklist,
        wordlist,
        exactlist,
        end_pos,
        stdin,
        max_issue_threshold,
        sources,
        config_found,
    }
}

/// Resolve one tier's word set: CLI CSV value first, config array second.
/// Empty entries are dropped so no matcher can match everywhere.
fn tier_words(cli_csv: Option<&str>, cfg_list: Option<&[String]>) -> BTreeSet<String> {
    if let Some(csv) = cli_csv {
        split_csv(csv).into_iter().collect()
    } else if let Some(list) = cfg_list {
        list.iter().filter(|s| !s.is_empty()).cloned().collect()
    } else {
        BTreeSet::new()
    }
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Expand file arguments into concrete sources, in supplied order.
///
/// Directories contribute their immediate regular files (sorted, not
/// recursive). Plain files pass through; so do absolute paths that are not
/// regular files, which covers pipes — if such a path cannot be opened
/// later, the scanner skips it silently. Paths listed in `skip` are
/// excluded.
pub fn expand_sources(file_args: &[String], skip: &BTreeSet<String>) -> Vec<PathBuf> {
    let mut sources = Vec::new();
    for arg in file_args {
        let path = PathBuf::from(arg);
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(&path)
                .map(|rd| {
                    rd.filter_map(|e| e.ok())
                        .map(|e| e.path())
                        .filter(|p| p.is_file())
                        .collect()
                })
                .unwrap_or_default();
            entries.sort();
            sources.extend(entries);
        } else if path.is_file() || path.is_absolute() {
            sources.push(path);
        }
    }
    sources.retain(|p| !skip.contains(&p.to_string_lossy().to_string()));
    sources
}
