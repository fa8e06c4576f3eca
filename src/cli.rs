//! CLI argument parsing via `clap`.

use crate::config::CliOverrides;
use crate::models::Location;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "issueref",
    version,
    about = "Flag warning comments without an issue reference",
    long_about = "issueref — scan comment records for warning terms (todo, fixme, xxx) and report those that carry no issue reference such as JIRA-123 or #42.\n\nConfiguration precedence: CLI > --options > issueref.toml > defaults.",
    after_help = "Examples:\n  issueref lint\n  issueref lint 'build/comments/**/*.json' --output json\n  issueref lint --term todo --term hack --savior-term gh --location start\n  issueref lint --options '{\"saviorTerms\": [\"PROJ\"]}'",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current issueref version.")]
    Version,
    /// Lint comment-record files
    #[command(
        about = "Run the require-issue-ref check",
        long_about = "Classify every comment in the matched comment-record files. Exits 1 when error-level issues are found and 2 on configuration or input errors.",
        after_help = "Examples:\n  issueref lint\n  issueref lint 'out/*.comments.json' --level warn"
    )]
    Lint {
        #[arg(help = "Glob patterns of comment-record files (default: **/*.comments.json)")]
        patterns: Vec<String>,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Severity of reported issues: error|warn (default: error)")]
        level: Option<String>,
        #[arg(long, help = "Rule options as a JSON object")]
        options: Option<String>,
        #[arg(long = "term", help = "Warning term (repeatable; replaces configured terms)")]
        terms: Vec<String>,
        #[arg(long = "savior-term", help = "Issue reference prefix (repeatable)")]
        savior_terms: Vec<String>,
        #[arg(long, help = "Where warning terms must appear: start|anywhere")]
        location: Option<Location>,
    },
    /// Describe the rule and its defaults
    #[command(about = "Show rule metadata", long_about = "Print the rule description and option defaults.")]
    Rule {
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}

impl Commands {
    /// Collect `lint` flags into config overrides.
    pub fn lint_overrides(self) -> Option<CliOverrides> {
        match self {
            Commands::Lint {
                patterns,
                repo_root,
                output,
                level,
                options,
                terms,
                savior_terms,
                location,
            } => Some(CliOverrides {
                repo_root,
                output,
                level,
                patterns,
                options_json: options,
                terms,
                savior_terms,
                location,
            }),
            _ => None,
        }
    }
}
