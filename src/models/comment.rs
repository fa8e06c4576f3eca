//! Comment and violation records exchanged with the host.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Comment spelling as reported by the comment supplier.
pub enum CommentKind {
    #[default]
    Line,
    Block,
    /// Interpreter directive (`#!...`); never scanned.
    Shebang,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
/// A comment supplied by the host. `loc` is opaque and passed through.
pub struct Comment<L> {
    pub text: String,
    #[serde(default)]
    pub kind: CommentKind,
    pub loc: L,
}

impl<L> Comment<L> {
    pub fn new(text: impl Into<String>, kind: CommentKind, loc: L) -> Self {
        Self {
            text: text.into(),
            kind,
            loc,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// 1-based line, 0-based column of a comment in its source file.
pub struct Position {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
/// One offending comment.
pub struct Violation<L> {
    pub loc: L,
    /// Text matched by the first configured term that matched.
    pub matched_term: String,
    pub example_savior: String,
}

impl<L> Violation<L> {
    pub fn message(&self) -> String {
        format!(
            "Unexpected {} comment without associated issue reference (e.g. {}-###)",
            self.matched_term, self.example_savior
        )
    }
}
