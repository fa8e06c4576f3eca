//! Shared data models for comment records, rule options, and lint output.

pub mod comment;
pub mod options;

pub use comment::{Comment, CommentKind, Position, Violation};
pub use options::{Location, RuleOptions};

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A single lint issue with severity and location.
pub struct Issue {
    pub file: String,
    pub rule: String,
    pub severity: String,
    pub line: u32,
    pub column: u32,
    pub term: String,
    pub message: String,
}

#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
/// Aggregated lint summary used by printers.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub files: usize,
    pub comments: usize,
}

#[derive(Serialize, Debug, Clone)]
/// Lint results container.
pub struct LintResult {
    pub issues: Vec<Issue>,
    pub summary: Summary,
}
