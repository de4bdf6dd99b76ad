use std::borrow::Cow;

use tracing::{debug, trace, warn};

use crate::config::ChainConfig;
use crate::error::ConfigurationError;
use crate::rule::Rule;

/// An ordered, non-empty, immutable list of [`Rule`]s.
///
/// Rules run in construction order; each rule sees the output of the one
/// before it. The chain never changes after it is built and is safe to share
/// across threads.
///
/// ```rust
/// use chain::{ReplacementChain, Rule};
///
/// let chain = ReplacementChain::new(vec![
///     Rule::new("test", "replaced test").unwrap(),
///     Rule::new("text", "replaced text").unwrap(),
/// ])
/// .unwrap();
///
/// assert_eq!(
///     chain.normalize(Some("test text")),
///     Some("replaced test replaced text".to_string())
/// );
/// assert_eq!(chain.normalize(None), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementChain {
    rules: Vec<Rule>,
}

impl ReplacementChain {
    /// Builds a chain from already-compiled rules.
    ///
    /// Fails with [`ConfigurationError::EmptyRules`] when `rules` is empty.
    pub fn new(rules: Vec<Rule>) -> Result<Self, ConfigurationError> {
        if rules.is_empty() {
            return Err(rejected(ConfigurationError::EmptyRules));
        }
        debug!(rules = rules.len(), "replacement_chain_built");
        Ok(Self { rules })
    }

    /// Compiles `(pattern, replacement)` pairs into a chain.
    pub fn from_pairs<I, P, R>(pairs: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (P, R)>,
        P: AsRef<str>,
        R: Into<String>,
    {
        let rules = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (pattern, replacement))| {
                Rule::new(pattern, replacement).map_err(|err| err.at_index(index))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(rejected)?;
        Self::new(rules)
    }

    /// Compiles and validates a deserialized rule list.
    ///
    /// Reports the first problem found: an absent collection, an empty one,
    /// an absent entry, or a pattern that does not compile.
    pub fn from_config(cfg: &ChainConfig) -> Result<Self, ConfigurationError> {
        let entries = cfg
            .rules
            .as_ref()
            .ok_or(ConfigurationError::MissingRules)
            .map_err(rejected)?;

        let mut rules = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let rule_cfg = entry
                .as_ref()
                .ok_or(ConfigurationError::MissingRule { index })
                .map_err(rejected)?;
            let rule = Rule::try_from(rule_cfg)
                .map_err(|err| rejected(err.at_index(index)))?;
            rules.push(rule);
        }
        Self::new(rules)
    }

    /// Converts externally supplied text into its canonical form.
    ///
    /// `None` passes through untouched. Otherwise every rule is applied in
    /// order and the final string is returned.
    pub fn normalize(&self, text: Option<&str>) -> Option<String> {
        text.map(|text| self.normalize_str(text).into_owned())
    }

    /// Runs every rule over `text`, borrowing it when no rule changed it.
    pub fn normalize_str<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut current: Cow<'a, str> = Cow::Borrowed(text);
        for (index, rule) in self.rules.iter().enumerate() {
            let next = match rule.apply(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(next) => next,
            };
            trace!(rule_index = index, pattern = rule.pattern(), "rule_applied");
            current = Cow::Owned(next);
        }
        current
    }

    /// Returns the stored value as text. No rule is re-applied.
    pub fn render(&self, value: Option<&str>) -> Option<String> {
        value.map(str::to_owned)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false: a chain holds at least one rule.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn to_config(&self) -> ChainConfig {
        ChainConfig::from_rules(self.rules.iter().map(Rule::to_config))
    }
}

fn rejected(err: ConfigurationError) -> ConfigurationError {
    warn!(error = %err, "replacement_chain_rejected");
    err
}
