//! Rule options.
//!
//! The rule accepts a single options object, `{ "excludes": [...] }`. It is
//! supplied inline (command line or library caller); no configuration file is
//! ever searched for.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::rule::ExemptionSet;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleOptions {
    /// Calls whose arguments are never inspected: bare names (`logger`, `t`)
    /// or dotted paths (`Sentry.captureMessage`).
    #[serde(default)]
    pub excludes: Vec<String>,
}

impl RuleOptions {
    /// Parse an options object from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse rule options")
    }

    /// Append excludes given on the command line after the ones from JSON.
    pub fn with_excludes(mut self, excludes: impl IntoIterator<Item = String>) -> Self {
        self.excludes.extend(excludes);
        self
    }

    /// Build the immutable exemption set for a run.
    pub fn exemption_set(&self) -> ExemptionSet {
        ExemptionSet::new(&self.excludes)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::rule::ExemptionRule;

    #[test]
    fn test_default_options() {
        let options = RuleOptions::default();
        assert!(options.excludes.is_empty());
        assert!(options.exemption_set().rules().is_empty());
    }

    #[test]
    fn test_parse_options() {
        let options =
            RuleOptions::from_json(r#"{ "excludes": ["Sentry.captureMessage", "t"] }"#).unwrap();
        assert_eq!(options.excludes, vec!["Sentry.captureMessage", "t"]);
    }

    #[test]
    fn test_missing_excludes_defaults_to_empty() {
        let options = RuleOptions::from_json("{}").unwrap();
        assert!(options.excludes.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let options = RuleOptions::from_json(r#"{ "excludes": ["t"], "other": 1 }"#).unwrap();
        assert_eq!(options.excludes, vec!["t"]);
    }

    #[test]
    fn test_non_string_exclude_is_an_error() {
        let result = RuleOptions::from_json(r#"{ "excludes": ["t", 42] }"#);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse rule options")
        );
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(RuleOptions::from_json(r#"{ "excludes": "#).is_err());
        assert!(RuleOptions::from_json(r#"["t"]"#).is_err());
    }

    #[test]
    fn test_with_excludes_appends() {
        let options = RuleOptions::from_json(r#"{ "excludes": ["a"] }"#)
            .unwrap()
            .with_excludes(["b.c".to_string()]);
        assert_eq!(options.excludes, vec!["a", "b.c"]);

        let set = options.exemption_set();
        assert_eq!(
            set.rules(),
            &[
                ExemptionRule::Token("a".to_string()),
                ExemptionRule::Path {
                    base: "b".to_string(),
                    properties: vec!["c".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_serialization_round_trips_names() {
        let options = RuleOptions {
            excludes: vec!["t".to_string()],
        };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"excludes":["t"]}"#);
    }
}
