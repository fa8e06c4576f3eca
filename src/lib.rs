//! issueref core library.
//!
//! Flags comments containing a warning term (`todo`, `fixme`, `xxx`, ...)
//! unless the same comment carries an issue reference such as `JIRA-123`
//! or `#42`. Comments are supplied by a host as records; this crate does
//! not parse source code.
//!
//! High-level modules:
//! - `pattern`: Compiles warning and savior terms into matchers.
//! - `classify`: Per-comment decision and the comment-stream runner.
//! - `config`: Discovery and effective configuration resolution.
//! - `lint`: Parallel runner over comment-record files.
//! - `models`: Comment/violation records, rule options, lint output.
//! - `output`: Human/JSON printers.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `logging`: Tracing subscriber setup.
//! - `error`: Error types.
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod logging;
pub mod models;
pub mod output;
pub mod pattern;

pub use classify::{Reporter, RULE_NAME};
pub use error::{ConfigError, Error, Result};
pub use models::{Comment, CommentKind, Location, RuleOptions, Violation};
pub use pattern::MatcherSet;
