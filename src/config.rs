//! Configuration discovery and effective settings resolution.
//!
//! issueref reads `issueref.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `output`: `human`
//! - `level`: `error`
//! - `patterns`: `**/*.comments.json`
//! - `options`: rule defaults (see `models::options`)
//!
//! Overrides precedence: CLI flags > `--options` JSON > config file > defaults.
//! A config file that exists but does not validate is an error; nothing is
//! scanned in that case.

use crate::error::ConfigError;
use crate::models::{Location, RuleOptions};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILES: [&str; 3] = ["issueref.toml", "issueref.yaml", "issueref.yml"];
pub const DEFAULT_PATTERN: &str = "**/*.comments.json";

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `issueref.toml|yaml`.
pub struct FileConfig {
    pub output: Option<String>,
    pub level: Option<String>,
    pub patterns: Option<Vec<String>>,
    #[serde(default)]
    pub options: Option<RuleOptions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Output mode for printers.
pub enum Output {
    Human,
    Json,
}

impl Output {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s {
            "human" => Ok(Output::Human),
            "json" => Ok(Output::Json),
            other => Err(ConfigError::Output(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Severity attached to every reported violation.
pub enum Level {
    Error,
    Warn,
}

impl Level {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s {
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warn),
            other => Err(ConfigError::Level(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warn => "warning",
        }
    }
}

#[derive(Debug, Default, Clone)]
/// Values supplied on the command line; `None` means "not given".
pub struct CliOverrides {
    pub repo_root: Option<String>,
    pub output: Option<String>,
    pub level: Option<String>,
    pub patterns: Vec<String>,
    pub options_json: Option<String>,
    pub terms: Vec<String>,
    pub savior_terms: Vec<String>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub output: Output,
    pub level: Level,
    pub patterns: Vec<String>,
    pub options: RuleOptions,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when an `issueref.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Path of the config file under `root`, TOML taking priority over YAML.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|f| root.join(f))
        .find(|p| p.is_file())
}

/// Load `FileConfig` from `root` if a config file is present.
pub fn load_config(root: &Path) -> Result<Option<FileConfig>, ConfigError> {
    let Some(path) = find_config(root) else {
        return Ok(None);
    };
    let s = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let is_toml = path.extension().is_some_and(|e| e == "toml");
    let cfg: FileConfig = if is_toml {
        toml::from_str(&s).map_err(|source| ConfigError::Toml {
            path: path.clone(),
            source,
        })?
    } else {
        serde_yaml::from_str(&s).map_err(|source| ConfigError::Yaml {
            path: path.clone(),
            source,
        })?
    };
    debug!(path = %path.display(), "loaded config");
    Ok(Some(cfg))
}

/// Validate an inline JSON options object, e.g. `{"terms": ["hack"]}`.
pub fn parse_options_json(s: &str) -> Result<RuleOptions, ConfigError> {
    Ok(serde_json::from_str(s)?)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &CliOverrides) -> Result<Effective, ConfigError> {
    let start = PathBuf::from(cli.repo_root.as_deref().unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let config_path = find_config(&repo_root);
    let cfg = load_config(&repo_root)?.unwrap_or_default();

    let output = Output::parse(
        cli.output
            .as_deref()
            .or(cfg.output.as_deref())
            .unwrap_or("human"),
    )?;
    let level = Level::parse(
        cli.level
            .as_deref()
            .or(cfg.level.as_deref())
            .unwrap_or("error"),
    )?;

    let patterns = if !cli.patterns.is_empty() {
        cli.patterns.clone()
    } else {
        cfg.patterns
            .unwrap_or_else(|| vec![DEFAULT_PATTERN.to_string()])
    };

    let mut options = cfg.options.unwrap_or_default();
    if let Some(json) = cli.options_json.as_deref() {
        options = options.merge(parse_options_json(json)?);
    }
    options = options.merge(RuleOptions {
        terms: (!cli.terms.is_empty()).then(|| cli.terms.clone()),
        savior_terms: (!cli.savior_terms.is_empty()).then(|| cli.savior_terms.clone()),
        location: cli.location,
    });

    Ok(Effective {
        repo_root,
        config_path,
        output,
        level,
        patterns,
        options,
    })
}
