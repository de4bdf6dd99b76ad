use thiserror::Error;

/// Errors raised while building a [`Rule`](crate::Rule) or a
/// [`ReplacementChain`](crate::ReplacementChain).
///
/// All of these are construction-time failures. Once a chain exists,
/// normalizing text with it cannot fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("replacement chain requires a rules collection")]
    MissingRules,
    #[error("replacement chain requires at least one rule")]
    EmptyRules,
    #[error("rule at index {index} is missing")]
    MissingRule { index: usize },
    #[error("rule at index {index} has invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        reason: String,
    },
}

impl ConfigurationError {
    /// Re-labels an [`InvalidPattern`](Self::InvalidPattern) error with the
    /// position the rule occupies in a chain.
    pub(crate) fn at_index(self, position: usize) -> Self {
        match self {
            Self::InvalidPattern {
                pattern, reason, ..
            } => Self::InvalidPattern {
                index: position,
                pattern,
                reason,
            },
            other => other,
        }
    }
}
