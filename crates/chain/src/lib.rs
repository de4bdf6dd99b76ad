//! Regex replacement chains.
//!
//! This crate turns free-form text into a canonical string by running an
//! ordered list of regular-expression substitutions over it. It is meant to
//! sit at the edge of a data-binding layer: text comes in from a form or a
//! request, goes through a chain once, and the clean value is stored.
//!
//! ## What we do
//!
//! - Compile `(pattern, replacement)` pairs into [`Rule`]s, failing fast on bad
//!   patterns
//! - Apply rules in construction order, each one feeding the next
//! - Pass absent values (`None`) through untouched
//! - Ship a whitespace preset that trims and collapses runs to one space
//!
//! ## Pure function guarantee
//!
//! A [`ReplacementChain`] is immutable after construction. `normalize` does no
//! I/O and keeps no state, so the same chain and input give the same output on
//! any thread, any number of times.
//!
//! ## Invariants worth knowing
//!
//! - A chain always holds at least one rule
//! - Every failure is a [`ConfigurationError`] raised while building
//! - A rule that matches nothing is a silent no-op
//!
//! ```rust
//! use chain::{whitespace_normalizer, ReplacementChain};
//!
//! let ws = whitespace_normalizer();
//! assert_eq!(ws.normalize(Some("  a \t b  ")), Some("a b".to_string()));
//!
//! let dashes = ReplacementChain::from_pairs([("-{2,}", "-")]).unwrap();
//! assert_eq!(dashes.normalize(Some("a----b")), Some("a-b".to_string()));
//! ```

mod config;
mod error;
mod pipeline;
mod rule;
mod whitespace;

pub use crate::config::{ChainConfig, RuleConfig};
pub use crate::error::ConfigurationError;
pub use crate::pipeline::ReplacementChain;
pub use crate::rule::Rule;
pub use crate::whitespace::{
    shared_whitespace_normalizer, whitespace_normalizer, EMPTY_STRING_REPLACEMENT,
    MULTIPLE_SPACE_REGEX, MULTIPLE_WHITESPACE_REGEX, SINGLE_SPACE_REPLACEMENT,
    WHITESPACE_PREFIX_REGEX, WHITESPACE_SUFFIX_REGEX,
};
