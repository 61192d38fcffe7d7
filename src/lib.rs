//! Blocklint core library.
//!
//! Programmatic API for scanning text for block-listed words across three
//! strictness tiers, with inline pragma suppression and threshold-driven
//! exit behavior in the CLI.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Config file discovery and effective configuration resolution.
//! - `matcher`: Tier precedence resolution and pattern compilation.
//! - `scan`: Per-line scanning with pragma suppression.
//! - `models`: Tiers, match records, and per-source outcomes.
//! - `output`: Match and summary rendering, stderr prefixes.
pub mod cli;
pub mod config;
pub mod matcher;
pub mod models;
pub mod output;
pub mod scan;
