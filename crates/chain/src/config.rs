//! Serializable rule lists.
//!
//! [`RuleConfig`] and [`ChainConfig`] are the uncompiled form of a chain, the
//! shape rules take in JSON or YAML before [`ReplacementChain::from_config`]
//! compiles and validates them.
//!
//! Deserialized input is untrusted, so both the `rules` collection and each of
//! its entries may be absent (`null` or missing). Those cases are kept in the
//! type and rejected at construction time.
//!
//! ```rust
//! use chain::{ChainConfig, ReplacementChain};
//!
//! let cfg: ChainConfig = serde_json::from_str(
//!     r#"{ "rules": [ { "pattern": "-{2,}", "replacement": "-" } ] }"#,
//! ).unwrap();
//!
//! let chain = ReplacementChain::from_config(&cfg).unwrap();
//! assert_eq!(chain.normalize(Some("a---b")), Some("a-b".to_string()));
//! ```
//!
//! [`ReplacementChain::from_config`]: crate::ReplacementChain::from_config

use serde::{Deserialize, Serialize};

/// One `{ pattern, replacement }` entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleConfig {
    pub pattern: String,
    pub replacement: String,
}

impl RuleConfig {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Ordered rule list for a [`ReplacementChain`](crate::ReplacementChain).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainConfig {
    #[serde(default)]
    pub rules: Option<Vec<Option<RuleConfig>>>,
}

impl ChainConfig {
    /// Builds a config where every entry is present.
    pub fn from_rules(rules: impl IntoIterator<Item = RuleConfig>) -> Self {
        Self {
            rules: Some(rules.into_iter().map(Some).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rules_field_deserializes_as_absent() {
        let cfg: ChainConfig = serde_json::from_str("{}").expect("valid json");
        assert_eq!(cfg.rules, None);
    }

    #[test]
    fn null_entries_are_preserved() {
        let cfg: ChainConfig = serde_json::from_str(
            r#"{ "rules": [ { "pattern": "a", "replacement": "b" }, null ] }"#,
        )
        .expect("valid json");
        let rules = cfg.rules.expect("rules present");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0], Some(RuleConfig::new("a", "b")));
        assert_eq!(rules[1], None);
    }

    #[test]
    fn serializes_rule_fields_by_name() {
        let json = serde_json::to_value(RuleConfig::new("x+", "y")).expect("serializes");
        assert_eq!(json["pattern"], "x+");
        assert_eq!(json["replacement"], "y");
    }
}
