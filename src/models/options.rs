//! Rule options schema.
//!
//! The options object accepts exactly three optional keys:
//! - `terms`: warning terms, reported in configured order.
//! - `saviorTerms`: issue-reference prefixes that excuse a comment.
//! - `location`: `start` or `anywhere`.
//!
//! Any other key is rejected at deserialization time.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TERMS: [&str; 3] = ["todo", "fixme", "xxx"];
pub const DEFAULT_SAVIOR_TERMS: [&str; 2] = ["jira", "#"];

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Where a warning term must appear in the comment text.
pub enum Location {
    /// After optional leading whitespace only.
    Start,
    #[default]
    Anywhere,
}

impl std::str::FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Location::Start),
            "anywhere" => Ok(Location::Anywhere),
            other => Err(format!(
                "invalid location '{}' (expected start|anywhere)",
                other
            )),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
/// Validated rule options. Unset fields fall back to the defaults.
pub struct RuleOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<String>>,
    #[serde(
        default,
        rename = "saviorTerms",
        skip_serializing_if = "Option::is_none"
    )]
    pub savior_terms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl RuleOptions {
    /// Warning terms; an explicitly empty list stays empty.
    pub fn terms(&self) -> Vec<String> {
        self.terms
            .clone()
            .unwrap_or_else(|| DEFAULT_TERMS.iter().map(|s| s.to_string()).collect())
    }

    pub fn savior_terms(&self) -> Vec<String> {
        self.savior_terms
            .clone()
            .unwrap_or_else(|| DEFAULT_SAVIOR_TERMS.iter().map(|s| s.to_string()).collect())
    }

    pub fn location(&self) -> Location {
        self.location.unwrap_or_default()
    }

    /// Field-wise merge where every field set in `overrides` wins.
    pub fn merge(self, overrides: RuleOptions) -> RuleOptions {
        RuleOptions {
            terms: overrides.terms.or(self.terms),
            savior_terms: overrides.savior_terms.or(self.savior_terms),
            location: overrides.location.or(self.location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_when_unset() {
        let opts = RuleOptions::default();
        assert_eq!(opts.terms(), vec!["todo", "fixme", "xxx"]);
        assert_eq!(opts.savior_terms(), vec!["jira", "#"]);
        assert_eq!(opts.location(), Location::Anywhere);
    }

    #[test]
    fn test_empty_lists_are_kept() {
        let opts: RuleOptions =
            serde_json::from_str(r#"{"terms": [], "saviorTerms": []}"#).unwrap();
        assert!(opts.terms().is_empty());
        assert!(opts.savior_terms().is_empty());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = serde_json::from_str::<RuleOptions>(r#"{"terms": ["todo"], "severity": 2}"#)
            .unwrap_err();
        assert!(err.to_string().contains("severity"));
    }

    #[test]
    fn test_bad_location_and_types_rejected() {
        assert!(serde_json::from_str::<RuleOptions>(r#"{"location": "end"}"#).is_err());
        assert!(serde_json::from_str::<RuleOptions>(r#"{"terms": "todo"}"#).is_err());
        assert!(serde_json::from_str::<RuleOptions>(r#"{"saviorTerms": [1]}"#).is_err());
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let base = RuleOptions {
            terms: Some(vec!["hack".into()]),
            savior_terms: Some(vec!["gh".into()]),
            location: None,
        };
        let merged = base.merge(RuleOptions {
            terms: None,
            savior_terms: Some(vec!["jira".into()]),
            location: Some(Location::Start),
        });
        assert_eq!(merged.terms(), vec!["hack"]);
        assert_eq!(merged.savior_terms(), vec!["jira"]);
        assert_eq!(merged.location(), Location::Start);
    }
}
