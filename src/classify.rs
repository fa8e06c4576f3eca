//! Comment classification: flag warning comments lacking an issue reference.
//!
//! Per comment:
//! 1. Skip comments that mention the rule itself (inline config directives).
//! 2. Collect every warning term that matches, in configured order.
//! 3. If any savior matcher matches, the comment is excused.
//! 4. Otherwise report the first configured term that matched.

use crate::models::{Comment, CommentKind, Violation};
use crate::pattern::{MatcherSet, WORD_BOUNDARY};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Rule identifier used in reports and for self-exemption.
pub const RULE_NAME: &str = "require-issue-ref";

static SELF_CONFIG: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!("{b}{}{b}", regex::escape(RULE_NAME), b = WORD_BOUNDARY);
    Regex::new(&pattern).unwrap_or_else(|e| panic!("regex: {e}"))
});

/// Receives violations as soon as they are found.
pub trait Reporter<L> {
    fn report(&mut self, violation: Violation<L>);
}

impl<L, F> Reporter<L> for F
where
    F: FnMut(Violation<L>),
{
    fn report(&mut self, violation: Violation<L>) {
        self(violation)
    }
}

/// True when the text names this rule, e.g. `eslint require-issue-ref: [2]`.
pub fn is_self_config(text: &str) -> bool {
    SELF_CONFIG.is_match(text)
}

impl MatcherSet {
    /// Matched text for every warning term found, in configured term order.
    pub fn warning_matches<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.warnings.iter().filter_map(|m| m.find(text)).collect()
    }

    /// True when any savior term with a numeric suffix appears in the text.
    pub fn is_excused(&self, text: &str) -> bool {
        self.saviors.iter().any(|s| s.is_match(text))
    }

    /// Classify a single comment, returning its violation if any.
    pub fn classify<L: Clone>(&self, comment: &Comment<L>) -> Option<Violation<L>> {
        let text = comment.text.as_str();
        if is_self_config(text) {
            return None;
        }
        let matches = self.warning_matches(text);
        let first = matches.first()?;
        if self.is_excused(text) {
            trace!(term = *first, "excused by savior term");
            return None;
        }
        Some(Violation {
            loc: comment.loc.clone(),
            matched_term: first.to_string(),
            example_savior: self.example_savior.clone(),
        })
    }

    /// Classify comments in order, skipping shebangs, and forward each
    /// violation to `reporter` as it is found. Returns the number of
    /// comments scanned.
    pub fn run<'c, L, I, R>(&self, comments: I, reporter: &mut R) -> usize
    where
        L: Clone + 'c,
        I: IntoIterator<Item = &'c Comment<L>>,
        R: Reporter<L> + ?Sized,
    {
        let mut scanned = 0;
        for comment in comments
            .into_iter()
            .filter(|c| c.kind != CommentKind::Shebang)
        {
            scanned += 1;
            if let Some(v) = self.classify(comment) {
                trace!(term = %v.matched_term, "violation");
                reporter.report(v);
            }
        }
        scanned
    }
}
