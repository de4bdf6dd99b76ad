//! A single substitution step.
//!
//! A [`Rule`] pairs a compiled regular expression with a replacement string.
//! The pattern is compiled when the rule is built, so a malformed pattern is
//! reported as a [`ConfigurationError`] up front instead of on first use.
//!
//! # Replacement syntax
//!
//! Replacements follow the `regex` crate's expansion rules: `$1` or `${1}`
//! refers to a numbered group, `${name}` to a named group, and `$$` produces a
//! literal dollar sign. Prefer the braced form when a group reference is
//! followed by word characters (`${1}a`, not `$1a`).
//!
//! # Examples
//!
//! ```rust
//! use chain::Rule;
//!
//! let rule = Rule::new(r"(\w+)@example\.com", "${1}@example.org").unwrap();
//! assert_eq!(rule.apply("mail alice@example.com"), "mail alice@example.org");
//!
//! // No match leaves the input untouched.
//! assert_eq!(rule.apply("nothing here"), "nothing here");
//! ```

use std::borrow::Cow;
use std::fmt;

use regex::Regex;

use crate::config::RuleConfig;
use crate::error::ConfigurationError;

/// One `(pattern, replacement)` pair, compiled and immutable.
#[derive(Clone)]
pub struct Rule {
    regex: Regex,
    replacement: String,
}

impl Rule {
    /// Compiles `pattern` and pairs it with `replacement`.
    ///
    /// Returns [`ConfigurationError::InvalidPattern`] when the pattern does not
    /// compile. The reported index is `0`; chain constructors re-label it with
    /// the rule's position.
    pub fn new(
        pattern: impl AsRef<str>,
        replacement: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let pattern = pattern.as_ref();
        let regex = Regex::new(pattern).map_err(|err| ConfigurationError::InvalidPattern {
            index: 0,
            pattern: pattern.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self {
            regex,
            replacement: replacement.into(),
        })
    }

    /// Replaces every match of the pattern in `input`.
    ///
    /// Borrows `input` when nothing matched.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.regex.replace_all(input, self.replacement.as_str())
    }

    /// Returns true when the pattern matches somewhere in `input`.
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Uncompiled, serializable form of this rule.
    pub fn to_config(&self) -> RuleConfig {
        RuleConfig {
            pattern: self.pattern().to_string(),
            replacement: self.replacement.clone(),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern())
            .field("replacement", &self.replacement)
            .finish()
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern() == other.pattern() && self.replacement == other.replacement
    }
}

impl Eq for Rule {}

impl TryFrom<&RuleConfig> for Rule {
    type Error = ConfigurationError;

    fn try_from(value: &RuleConfig) -> Result<Self, Self::Error> {
        Rule::new(&value.pattern, value.replacement.as_str())
    }
}
