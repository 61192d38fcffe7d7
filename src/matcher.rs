//! Matcher compilation for the three word tiers.
//!
//! Turns the resolved word sets into an ordered list of compiled regex
//! matchers. Precedence across tiers is applied here: a word declared in
//! several tiers is kept only in the most restrictive one.

use crate::models::Tier;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;

/// Character class for tolerated gaps between word characters.
const IGNORE_CLASS: &str = "[^a-zA-Z0-9]";

/// A compiled rule associating a configured word with its pattern and tier.
pub struct Matcher {
    /// The literal as configured, used verbatim in reports.
    pub word: String,
    pub regex: Regex,
    pub tier: Tier,
}

/// Word sets per tier after precedence resolution.
///
/// `BTreeSet` keeps iteration lexicographic, which fixes the matcher order
/// and therefore the reporting order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResolvedTiers {
    pub blocklist: BTreeSet<String>,
    pub wordlist: BTreeSet<String>,
    pub exactlist: BTreeSet<String>,
}

impl ResolvedTiers {
    fn tier(&self, tier: Tier) -> &BTreeSet<String> {
        match tier {
            Tier::Blocklist => &self.blocklist,
            Tier::Wordlist => &self.wordlist,
            Tier::Exactlist => &self.exactlist,
        }
    }

    fn tier_mut(&mut self, tier: Tier) -> &mut BTreeSet<String> {
        match tier {
            Tier::Blocklist => &mut self.blocklist,
            Tier::Wordlist => &mut self.wordlist,
            Tier::Exactlist => &mut self.exactlist,
        }
    }
}

/// Resolve tier precedence over the raw word sets.
///
/// A literal declared in several tiers is kept only in the most
/// restrictive tier that declared it: walking tiers from least to most
/// restrictive, each tier drops every word that a more restrictive tier
/// also declares.
pub fn resolve_tiers(
    blocklist: &BTreeSet<String>,
    wordlist: &BTreeSet<String>,
    exactlist: &BTreeSet<String>,
) -> ResolvedTiers {
    let mut out = ResolvedTiers {
        blocklist: blocklist.clone(),
        wordlist: wordlist.clone(),
        exactlist: exactlist.clone(),
    };
    for (i, tier) in Tier::ASCENDING.iter().enumerate() {
        for later in &Tier::ASCENDING[i + 1..] {
            let stricter = out.tier(*later).clone();
            let target = out.tier_mut(*tier);
            for w in &stricter {
                target.remove(w);
            }
        }
    }
    out
}

/// Compile the ordered matcher list: blocklist entries first, then
/// wordlist, then exactlist, each tier in sorted order.
///
/// Word sets are assumed free of empty strings (config validation filters
/// them); an empty word would otherwise match at every position.
pub fn compile_matchers(tiers: &ResolvedTiers) -> Vec<Matcher> {
    let mut matchers = Vec::new();
    for word in &tiers.blocklist {
        matchers.push(Matcher {
            word: word.clone(),
            regex: case_insensitive(&ignore_special(word)),
            tier: Tier::Blocklist,
        });
    }
    for word in &tiers.wordlist {
        matchers.push(Matcher {
            word: word.clone(),
            regex: case_insensitive(&word_boundaries(ignore_special(word))),
            tier: Tier::Wordlist,
        });
    }
    for word in &tiers.exactlist {
        matchers.push(Matcher {
            word: word.clone(),
            regex: compile(&word_boundaries(regex::escape(word))),
            tier: Tier::Exactlist,
        });
    }
    matchers
}

/// Join the word's escaped characters with an optional run of
/// non-alphanumerics, so "whitelist" also matches "white-list",
/// "white_list", and "white list".
fn ignore_special(word: &str) -> String {
    let gap = format!("{IGNORE_CLASS}*");
    word.chars()
        .map(|c| regex::escape(&c.to_string()))
        .collect::<Vec<_>>()
        .join(&gap)
}

/// Require word boundaries on both ends. Skipped for empty patterns,
/// which would otherwise turn into a bare `\b\b`.
fn word_boundaries(pattern: String) -> String {
    if pattern.is_empty() {
        pattern
    } else {
        format!(r"\b{pattern}\b")
    }
}

// Patterns are built from escaped literals and fixed classes; compilation
// cannot fail on user input.
fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("escaped pattern")
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("escaped pattern")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_precedence_keeps_most_restrictive_tier() {
        let tiers = resolve_tiers(
            &set(&["foo", "bar"]),
            &set(&["foo", "baz"]),
            &set(&["foo", "baz"]),
        );
        // "foo" and "baz" survive only under exactlist; "bar" is untouched.
        assert_eq!(tiers.blocklist, set(&["bar"]));
        assert_eq!(tiers.wordlist, set(&[]));
        assert_eq!(tiers.exactlist, set(&["baz", "foo"]));
    }

    #[test]
    fn test_precedence_resolves_every_tier_pair() {
        let tiers = resolve_tiers(&set(&["a", "b"]), &set(&["b", "c"]), &set(&["c"]));
        assert_eq!(tiers.blocklist, set(&["a"]));
        assert_eq!(tiers.wordlist, set(&["b"]));
        assert_eq!(tiers.exactlist, set(&["c"]));
    }

    #[test]
    fn test_blocklist_matches_special_characters_and_case() {
        let tiers = resolve_tiers(&set(&["whitelist"]), &set(&[]), &set(&[]));
        let m = &compile_matchers(&tiers)[0];
        for line in [
            "whitelist",
            "white-list",
            "white_list",
            "white list",
            "WhiteList",
            "WHITE..LIST",
        ] {
            assert!(m.regex.is_match(line), "should match {line:?}");
        }
        assert!(!m.regex.is_match("whitelost"));
    }

    #[test]
    fn test_blocklist_matches_inside_larger_words() {
        let tiers = resolve_tiers(&set(&["master"]), &set(&[]), &set(&[]));
        let m = &compile_matchers(&tiers)[0];
        assert!(m.regex.is_match("mastermind"));
        assert!(m.regex.is_match("grandmaster"));
    }

    #[test]
    fn test_wordlist_requires_word_boundaries() {
        let tiers = resolve_tiers(&set(&[]), &set(&["master"]), &set(&[]));
        let m = &compile_matchers(&tiers)[0];
        assert_eq!(m.tier, Tier::Wordlist);
        assert!(m.regex.is_match("the master plan"));
        assert!(m.regex.is_match("Master"));
        assert!(m.regex.is_match("a master-slave setup"));
        assert!(!m.regex.is_match("mastermind"));
        assert!(!m.regex.is_match("grandmaster"));
    }

    #[test]
    fn test_exactlist_is_case_sensitive_and_literal() {
        let tiers = resolve_tiers(&set(&[]), &set(&[]), &set(&["Foo"]));
        let m = &compile_matchers(&tiers)[0];
        assert_eq!(m.tier, Tier::Exactlist);
        assert!(m.regex.is_match("Foo"));
        assert!(m.regex.is_match("a Foo b"));
        assert!(!m.regex.is_match("foo"));
        assert!(!m.regex.is_match("Foobar"));
        // no special-character tolerance at this tier
        assert!(!m.regex.is_match("F-o-o"));
    }

    #[test]
    fn test_exactlist_escapes_regex_metacharacters() {
        let tiers = resolve_tiers(&set(&[]), &set(&[]), &set(&["a.b"]));
        let m = &compile_matchers(&tiers)[0];
        assert!(m.regex.is_match("use a.b here"));
        assert!(!m.regex.is_match("use axb here"));
    }

    #[test]
    fn test_matcher_order_is_tier_then_lexicographic() {
        let tiers = resolve_tiers(&set(&["b", "a"]), &set(&["z", "m"]), &set(&["k"]));
        let compiled = compile_matchers(&tiers);
        let order: Vec<&str> = compiled.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "m", "z", "k"]);
    }

    #[test]
    fn test_empty_word_is_not_boundary_wrapped() {
        assert_eq!(word_boundaries(String::new()), "");
        assert_eq!(word_boundaries("x".to_string()), r"\bx\b");
    }
}
