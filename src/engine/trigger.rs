//! Trigger matching.
//!
//! Every module declares an ordered list of pattern sources. They are compiled
//! once, when the registry is built, into a [`Triggers`] value that is shared
//! read-only by every request.
//!
//! Matching a query against one module:
//!
//! ```text
//! query ──▶ rule[0] ──no──▶ rule[1] ──no──▶ ... ──▶ None
//!              │yes            │yes
//!              ▼               ▼
//!            Match           Match
//! ```
//!
//! - Rules are anchored to the whole query: every source is wrapped in
//!   `^(?:...)$`.
//! - Rules are compiled case-insensitively. Captures keep the query's original
//!   casing; only the reported trigger word is lower-cased.
//! - Named slots: `trigger` holds the keyword, `remainder` the rest of the
//!   query. Modules may add their own (`country`, `state`, ...).
//! - A rule whose only named slot is `remainder` is a *catch-all*. It must be
//!   the module's last rule.

use crate::error::RegistryError;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;

/// Name of the keyword capture slot.
pub const TRIGGER: &str = "trigger";
/// Name of the rest-of-query capture slot.
pub const REMAINDER: &str = "remainder";

#[derive(Debug, Clone)]
struct TriggerRule {
    regex: Regex,
    catch_all: bool,
}

/// A module's compiled, ordered trigger rules.
#[derive(Debug, Clone)]
pub struct Triggers {
    rules: Vec<TriggerRule>,
}

/// The outcome of a successful trigger match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Match {
    /// Lower-cased keyword that fired; empty when the rule has no `trigger` slot.
    pub trigger: String,
    /// The `remainder` slot in original casing, trimmed; empty when absent.
    pub remainder: String,
    /// Every named slot that participated in the match.
    pub captures: HashMap<String, String>,
    /// Index of the rule that matched.
    pub rule: usize,
}

impl Match {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.captures.get(name).map(String::as_str)
    }

    pub fn has(&self, name: &str) -> bool {
        self.captures.contains_key(name)
    }
}

impl Triggers {
    /// Compile `sources` for `module`.
    ///
    /// Fails when there are no sources, when a source does not compile, or
    /// when a catch-all rule is followed by another rule.
    pub fn compile(module: &'static str, sources: &[String]) -> Result<Self, RegistryError> {
        if sources.is_empty() {
            return Err(RegistryError::MissingPatterns { module });
        }

        let mut rules = Vec::with_capacity(sources.len());
        for source in sources {
            let anchored = anchor(source);
            let regex = RegexBuilder::new(&anchored).case_insensitive(true).build().map_err(|source| {
                RegistryError::InvalidPattern { module, pattern: anchored.clone(), source: Box::new(source) }
            })?;

            let names: Vec<&str> = regex.capture_names().flatten().collect();
            let catch_all = names == [REMAINDER];
            rules.push(TriggerRule { regex, catch_all });
        }

        if let Some(index) = rules.iter().position(|r| r.catch_all) {
            if index != rules.len() - 1 {
                return Err(RegistryError::CatchAllNotLast { module, index });
            }
        }

        Ok(Self { rules })
    }

    /// Evaluate rules in declaration order; the first full match wins.
    pub fn find(&self, query: &str) -> Option<Match> {
        self.rules.iter().enumerate().find_map(|(index, rule)| {
            let caps = rule.regex.captures(query)?;

            let captures: HashMap<String, String> = rule
                .regex
                .capture_names()
                .flatten()
                .filter_map(|name| caps.name(name).map(|m| (name.to_string(), m.as_str().to_string())))
                .collect();

            Some(Match {
                trigger: captures.get(TRIGGER).map(|t| t.to_lowercase()).unwrap_or_default(),
                remainder: captures.get(REMAINDER).map(|r| r.trim().to_string()).unwrap_or_default(),
                captures,
                rule: index,
            })
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// True when the last rule accepts any remaining text.
    pub fn has_catch_all(&self) -> bool {
        self.rules.last().is_some_and(|r| r.catch_all)
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.regex.as_str())
    }
}

/// `^(?:source)$`. Wrapping applies to anchored sources too: in `^a|b$` each
/// branch carries only one anchor.
fn anchor(source: &str) -> String {
    format!("^(?:{source})$")
}

/// Join trigger words into a regex alternation, escaping each word.
///
/// Order is preserved: list longer phrases before their prefixes.
pub fn alternation(words: &[&str]) -> String {
    words.iter().map(|w| regex::escape(w)).collect::<Vec<_>>().join("|")
}

/// The usual prefix/suffix pair:
///
/// ```text
/// ^(?P<trigger>w1|w2) (?P<remainder>.*)$
/// ^(?P<remainder>.*) (?P<trigger>w1|w2)$
/// ```
pub fn affixes(words: &[&str]) -> Vec<String> {
    let t = alternation(words);
    vec![format!(r"^(?P<trigger>{t}) (?P<remainder>.*)$"), format!(r"^(?P<remainder>.*) (?P<trigger>{t})$")]
}

/// A rule matching any text, to be declared last.
pub fn catch_all() -> String {
    r"^(?P<remainder>.*)$".to_string()
}
