//! Output rendering for lint results and rule metadata.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-issue fields and a top-level summary.

use crate::classify::RULE_NAME;
use crate::config::Output;
use crate::models::options::{DEFAULT_SAVIOR_TERMS, DEFAULT_TERMS};
use crate::models::{Issue, LintResult};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

pub const RULE_DESCRIPTION: &str =
    "disallow certain warning terms in comments unless referenced to an issue";
pub const RULE_CATEGORY: &str = "Best Practices";

fn use_colors(output: Output) -> bool {
    output != Output::Json && std::env::var_os("NO_COLOR").is_none()
}

fn render_issue(is: &Issue, color: bool) -> String {
    let warn = is.severity != "error";
    let sev = match (warn, color) {
        (false, true) => "error".red().bold().to_string(),
        (true, true) => "warn".yellow().bold().to_string(),
        (false, false) => "error".to_string(),
        (true, false) => "warn".to_string(),
    };
    let at = format!("{}:{}:{}", is.file, is.line, is.column);
    let at = if color { at.bold().to_string() } else { at };
    format!("{} {} {} ({})", at, sev, is.message, is.rule)
}

/// Print lint results in the requested format.
pub fn print_lint(res: &LintResult, output: Output) {
    match output {
        Output::Json => println!("{:#}", compose_lint_json(res)),
        Output::Human => {
            let color = use_colors(output);
            for is in &res.issues {
                println!("{}", render_issue(is, color));
            }
            let summary = format!(
                "Summary: errors={} warnings={} files={} comments={}",
                res.summary.errors, res.summary.warnings, res.summary.files, res.summary.comments
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print rule name, description, and option defaults.
pub fn print_rule(output: Output) {
    match output {
        Output::Json => println!("{:#}", compose_rule_json()),
        Output::Human => {
            let name = if use_colors(output) {
                RULE_NAME.bold().to_string()
            } else {
                RULE_NAME.to_string()
            };
            println!("{} ({})", name, RULE_CATEGORY);
            println!("  {}", RULE_DESCRIPTION);
            println!("  terms:       {:?}", DEFAULT_TERMS);
            println!("  saviorTerms: {:?}", DEFAULT_SAVIOR_TERMS);
            println!("  location:    anywhere (start|anywhere)");
        }
    }
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintResult) -> JsonVal {
    serde_json::to_value(res).unwrap_or(JsonVal::Null)
}

/// Compose rule metadata JSON object (pure).
pub fn compose_rule_json() -> JsonVal {
    json!({
        "name": RULE_NAME,
        "description": RULE_DESCRIPTION,
        "category": RULE_CATEGORY,
        "recommended": false,
        "defaults": {
            "terms": DEFAULT_TERMS,
            "saviorTerms": DEFAULT_SAVIOR_TERMS,
            "location": "anywhere",
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Summary;

    fn issue(severity: &str) -> Issue {
        Issue {
            file: "src/a.comments.json".into(),
            rule: RULE_NAME.into(),
            severity: severity.into(),
            line: 3,
            column: 1,
            term: "TODO".into(),
            message: "Unexpected TODO comment without associated issue reference (e.g. jira-###)"
                .into(),
        }
    }

    #[test]
    fn test_compose_lint_json_shape() {
        let res = LintResult {
            issues: vec![issue("warning")],
            summary: Summary {
                errors: 0,
                warnings: 1,
                files: 1,
                comments: 4,
            },
        };
        let out = compose_lint_json(&res);
        assert_eq!(out["summary"]["warnings"], 1);
        assert_eq!(out["summary"]["comments"], 4);
        assert_eq!(out["issues"][0]["line"], 3);
        assert_eq!(out["issues"][0]["term"], "TODO");
        assert_eq!(out["issues"][0]["rule"], "require-issue-ref");
    }

    #[test]
    fn test_render_issue_plain() {
        assert_eq!(
            render_issue(&issue("error"), false),
            "src/a.comments.json:3:1 error Unexpected TODO comment without associated issue reference (e.g. jira-###) (require-issue-ref)"
        );
        assert!(render_issue(&issue("warning"), false).contains(" warn "));
    }

    #[test]
    fn test_compose_rule_json_defaults() {
        let out = compose_rule_json();
        assert_eq!(out["name"], "require-issue-ref");
        assert_eq!(out["defaults"]["saviorTerms"][1], "#");
        assert_eq!(out["defaults"]["location"], "anywhere");
    }
}
