//! Lint runner over comment-record files.
//!
//! Each target file holds a JSON array of comment records dumped by the
//! host framework:
//!
//! ```json
//! [{"text": " TODO: later", "kind": "line", "loc": {"line": 3, "column": 4}}]
//! ```
//!
//! Matchers are compiled once and shared by all rayon workers. A file that
//! cannot be read or parsed aborts the whole run.

use crate::classify::RULE_NAME;
use crate::config::{self, CliOverrides, Effective, Level};
use crate::error::{Error, Result};
use crate::models::{Comment, Issue, LintResult, Position, Summary, Violation};
use crate::pattern::MatcherSet;
use glob::glob;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Expand glob patterns relative to `root` into a sorted, de-duplicated list.
pub fn collect_targets(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut targets = BTreeSet::new();
    for pat in patterns {
        let pattern = root.join(pat).to_string_lossy().to_string();
        let entries = glob(&pattern).map_err(|source| Error::Glob {
            pattern: pat.clone(),
            source,
        })?;
        targets.extend(entries.flatten().filter(|p| p.is_file()));
    }
    Ok(targets.into_iter().collect())
}

/// Read and deserialize one comment-record file.
pub fn load_comments(path: &Path) -> Result<Vec<Comment<Position>>> {
    let data = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Classify `comments` and convert violations into issues for `file`.
///
/// Returns the issues in comment order and the number of comments scanned.
pub fn lint_comments(
    matchers: &MatcherSet,
    comments: &[Comment<Position>],
    file: &str,
    level: Level,
) -> (Vec<Issue>, usize) {
    let mut issues = Vec::new();
    let scanned = matchers.run(comments, &mut |v: Violation<Position>| {
        issues.push(Issue {
            file: file.to_string(),
            rule: RULE_NAME.to_string(),
            severity: level.as_str().to_string(),
            line: v.loc.line,
            column: v.loc.column,
            message: v.message(),
            term: v.matched_term,
        });
    });
    (issues, scanned)
}

fn display_path(root: &Path, path: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

/// Run the rule across every comment-record file matched by `eff.patterns`.
pub fn run_lint(eff: &Effective) -> Result<LintResult> {
    let matchers = MatcherSet::compile(&eff.options)?;
    let targets = collect_targets(&eff.repo_root, &eff.patterns)?;
    debug!(
        files = targets.len(),
        terms = ?matchers.terms().collect::<Vec<_>>(),
        example = matchers.example_savior(),
        "collected targets"
    );

    let per_file = targets
        .par_iter()
        .map(|path| -> Result<(Vec<Issue>, usize)> {
            let comments = load_comments(path)?;
            let file = display_path(&eff.repo_root, path);
            let (issues, scanned) = lint_comments(&matchers, &comments, &file, eff.level);
            debug!(file = %file, comments = scanned, issues = issues.len(), "linted");
            Ok((issues, scanned))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut summary = Summary {
        files: per_file.len(),
        ..Summary::default()
    };
    let mut issues = Vec::new();
    for (file_issues, scanned) in per_file {
        summary.comments += scanned;
        issues.extend(file_issues);
    }
    match eff.level {
        Level::Error => summary.errors = issues.len(),
        Level::Warn => summary.warnings = issues.len(),
    }
    info!(
        files = summary.files,
        comments = summary.comments,
        issues = issues.len(),
        "lint finished"
    );
    Ok(LintResult { issues, summary })
}

/// Resolve configuration from CLI overrides, then lint. Configuration
/// errors surface as `Error::Config` before any file is read.
pub fn run(cli: &CliOverrides) -> Result<(Effective, LintResult)> {
    let eff = config::resolve_effective(cli)?;
    if eff.config_path.is_none() {
        info!("no issueref config found; using defaults");
    }
    let result = run_lint(&eff)?;
    Ok((eff, result))
}
