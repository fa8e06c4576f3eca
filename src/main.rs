//! issueref CLI binary entry point.
//! Delegates to the library for linting and prints results.

use clap::Parser;
use issueref::cli::{Cli, Commands};
use issueref::config::Output;
use issueref::{lint, logging, output};
use owo_colors::OwoColorize;
use std::process::ExitCode;

fn error_prefix() -> String {
    if std::env::var_os("NO_COLOR").is_none() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

fn fail(msg: impl std::fmt::Display) -> ExitCode {
    eprintln!("{} {}", error_prefix(), msg);
    ExitCode::from(2)
}

fn main() -> ExitCode {
    logging::init_logging();
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Commands::Rule { output: out } => {
            let mode = match Output::parse(out.as_deref().unwrap_or("human")) {
                Ok(m) => m,
                Err(e) => return fail(e),
            };
            output::print_rule(mode);
            ExitCode::SUCCESS
        }
        cmd @ Commands::Lint { .. } => {
            let Some(overrides) = cmd.lint_overrides() else {
                return ExitCode::from(2);
            };
            let (eff, result) = match lint::run(&overrides) {
                Ok(r) => r,
                Err(e) => return fail(e),
            };
            output::print_lint(&result, eff.output);
            if result.summary.errors > 0 {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
