//! Term matcher compilation.
//!
//! Warning terms become case-insensitive regexes that match the term
//! literally at the configured location:
//! - Every term is escaped with `regex::escape`, so terms such as `[aeiou]`
//!   or `fix?` are matched as plain text.
//! - A word boundary is only required on a side whose outermost character is
//!   a word character. `\bFIX!\b` could never match `FIX! later`, so a term
//!   ending in punctuation gets no trailing boundary.
//! - `start` anchors at the beginning of the text after optional
//!   whitespace; the leading boundary is then irrelevant.
//!
//! Savior terms become `{term}-?[0-9]{1,6}`, matched anywhere.
//!
//! Boundary decisions are plain functions over the first/last character,
//! kept separate from regex assembly. Word characters are ASCII
//! `[A-Za-z0-9_]` and the emitted boundary is the ASCII `(?-u:\b)`, so a
//! term directly followed by CJK or accented text (`TODO修复`) still matches.

use crate::error::{Error, Result};
use crate::models::{Location, RuleOptions};
use regex::{Regex, RegexBuilder};
use tracing::debug;

/// Label used in messages when no savior term is configured.
pub const FALLBACK_SAVIOR: &str = "JIRA";

/// ASCII word boundary assertion.
pub const WORD_BOUNDARY: &str = r"(?-u:\b)";

/// ASCII alphanumeric or underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Fragment placed before the escaped term.
pub fn leading_boundary(term: &str, location: Location) -> &'static str {
    match location {
        Location::Start => r"^\s*",
        Location::Anywhere => match term.chars().next() {
            Some(c) if is_word_char(c) => WORD_BOUNDARY,
            _ => "",
        },
    }
}

/// Fragment placed after the escaped term.
pub fn trailing_boundary(term: &str) -> &'static str {
    match term.chars().last() {
        Some(c) if is_word_char(c) => WORD_BOUNDARY,
        _ => "",
    }
}

/// Regex source for a warning term. The term itself is capture group 1.
pub fn warning_pattern(term: &str, location: Location) -> String {
    format!(
        "{}({}){}",
        leading_boundary(term, location),
        regex::escape(term),
        trailing_boundary(term)
    )
}

/// Regex source for a savior term: the term, an optional `-`, 1 to 6 digits.
pub fn savior_pattern(term: &str) -> String {
    format!("{}-?[0-9]{{1,6}}", regex::escape(term))
}

fn build(term: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| Error::Pattern {
            term: term.to_string(),
            source,
        })
}

#[derive(Debug, Clone)]
/// Compiled matcher for one warning term.
pub struct TermMatcher {
    pub term: String,
    regex: Regex,
}

impl TermMatcher {
    pub fn compile(term: &str, location: Location) -> Result<Self> {
        let regex = build(term, &warning_pattern(term, location))?;
        Ok(Self {
            term: term.to_string(),
            regex,
        })
    }

    /// Text matched by the term, excluding any anchored leading whitespace.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

#[derive(Debug, Clone)]
/// Compiled matcher for one savior term.
pub struct SaviorMatcher {
    pub term: String,
    regex: Regex,
}

impl SaviorMatcher {
    pub fn compile(term: &str) -> Result<Self> {
        let regex = build(term, &savior_pattern(term))?;
        Ok(Self {
            term: term.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

#[derive(Debug, Clone)]
/// Both matcher families, compiled once per run and shared read-only.
pub struct MatcherSet {
    pub(crate) warnings: Vec<TermMatcher>,
    pub(crate) saviors: Vec<SaviorMatcher>,
    pub(crate) example_savior: String,
}

impl MatcherSet {
    pub fn compile(options: &RuleOptions) -> Result<Self> {
        let location = options.location();
        let warnings = options
            .terms()
            .iter()
            .map(|t| TermMatcher::compile(t, location))
            .collect::<Result<Vec<_>>>()?;
        let savior_terms = options.savior_terms();
        let saviors = savior_terms
            .iter()
            .map(|t| SaviorMatcher::compile(t))
            .collect::<Result<Vec<_>>>()?;
        let example_savior = savior_terms
            .first()
            .filter(|s| !s.is_empty())
            .cloned()
            .unwrap_or_else(|| FALLBACK_SAVIOR.to_string());
        debug!(
            terms = warnings.len(),
            saviors = saviors.len(),
            ?location,
            "compiled matchers"
        );
        Ok(Self {
            warnings,
            saviors,
            example_savior,
        })
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.warnings.iter().map(|m| m.term.as_str())
    }

    pub fn example_savior(&self) -> &str {
        &self.example_savior
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(term: &str, location: Location) -> TermMatcher {
        TermMatcher::compile(term, location).unwrap()
    }

    #[test]
    fn test_boundary_decision_table() {
        assert_eq!(leading_boundary("todo", Location::Anywhere), WORD_BOUNDARY);
        assert_eq!(leading_boundary("@todo", Location::Anywhere), "");
        assert_eq!(leading_boundary("@todo", Location::Start), r"^\s*");
        assert_eq!(leading_boundary("", Location::Anywhere), "");
        assert_eq!(trailing_boundary("todo"), WORD_BOUNDARY);
        assert_eq!(trailing_boundary("fix!"), "");
        assert_eq!(trailing_boundary("_"), WORD_BOUNDARY);
        assert_eq!(trailing_boundary("todoé"), "");
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(!is_word_char('é'));
        assert!(!is_word_char('修'));
        assert!(!is_word_char('-'));
    }

    #[test]
    fn test_non_ascii_neighbours_are_boundaries() {
        let m = matcher("todo", Location::Anywhere);
        assert_eq!(m.find(" TODO修复这个"), Some("TODO"));
        assert_eq!(m.find(" TODOé later"), Some("TODO"));
        assert_eq!(m.find(" 修复todo"), Some("todo"));
        assert_eq!(m.find(" TodoMVC"), None);
        let m = matcher("todo", Location::Start);
        assert_eq!(m.find(" TODO修复"), Some("TODO"));
    }

    #[test]
    fn test_word_boundaries_anywhere() {
        let m = matcher("todo", Location::Anywhere);
        assert_eq!(m.find(" a TODO here"), Some("TODO"));
        assert_eq!(m.find(" todo"), Some("todo"));
        assert_eq!(m.find(" TodoMVC"), None);
        assert_eq!(m.find(" mastodon"), None);
    }

    #[test]
    fn test_punctuation_terms_skip_boundaries() {
        let m = matcher("fix!", Location::Anywhere);
        assert_eq!(m.find(" FIX! later"), Some("FIX!"));
        assert_eq!(m.find(" need a fix!"), Some("fix!"));
        let m = matcher("@todo", Location::Anywhere);
        assert_eq!(m.find("x@todo"), Some("@todo"));
    }

    #[test]
    fn test_start_location_skips_only_whitespace() {
        let m = matcher("todo", Location::Start);
        assert_eq!(m.find("   TODO: now"), Some("TODO"));
        assert_eq!(m.find(" later TODO"), None);
        assert_eq!(m.find(" todos"), None);
    }

    #[test]
    fn test_special_characters_are_literal() {
        let m = matcher("[aeiou]", Location::Anywhere);
        assert_eq!(m.find(" special regex characters"), None);
        assert_eq!(m.find(" literal [aeiou] class"), Some("[aeiou]"));
        for term in ["(", ")", "a|b", "x{2}", "$^", "\\", "*+?.", "#"] {
            assert!(TermMatcher::compile(term, Location::Anywhere).is_ok(), "{}", term);
            assert!(TermMatcher::compile(term, Location::Start).is_ok(), "{}", term);
            assert!(SaviorMatcher::compile(term).is_ok(), "{}", term);
        }
    }

    #[test]
    fn test_savior_requires_digits() {
        let m = SaviorMatcher::compile("jira").unwrap();
        assert!(m.is_match(" TODO JIRA-1234"));
        assert!(m.is_match(" TODO jira42"));
        assert!(!m.is_match(" TODO jira"));
        assert!(!m.is_match(" TODO jira-"));
        let hash = SaviorMatcher::compile("#").unwrap();
        assert!(hash.is_match(" see #12"));
        assert!(!hash.is_match(" see #x"));
    }

    #[test]
    fn test_example_savior_fallback() {
        let set = MatcherSet::compile(&RuleOptions {
            savior_terms: Some(vec![]),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(set.example_savior(), FALLBACK_SAVIOR);
        let set = MatcherSet::compile(&RuleOptions::default()).unwrap();
        assert_eq!(set.example_savior(), "jira");
        assert_eq!(set.terms().collect::<Vec<_>>(), vec!["todo", "fixme", "xxx"]);
    }
}
