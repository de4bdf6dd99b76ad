//! The built-in whitespace preset.
//!
//! [`whitespace_normalizer`] trims a string and collapses every interior run
//! of whitespace (mixed or not) to a single ASCII space. It is built from four
//! ordinary rules, applied in this order:
//!
//! | # | Pattern | Replacement | Effect |
//! |---|---------|-------------|--------|
//! | 1 | [`WHITESPACE_PREFIX_REGEX`] | `""` | strip leading whitespace |
//! | 2 | [`WHITESPACE_SUFFIX_REGEX`] | `""` | strip trailing whitespace |
//! | 3 | [`MULTIPLE_WHITESPACE_REGEX`] | `" "` | tab, newline, vertical tab, CR, form feed runs become one space |
//! | 4 | [`MULTIPLE_SPACE_REGEX`] | `" "` | two or more spaces become one |
//!
//! Whitespace here means the ASCII set `[ \t\n\x0B\f\r]`. Other Unicode
//! spaces (such as U+00A0) are treated as content and left alone.
//!
//! ```rust
//! use chain::whitespace_normalizer;
//!
//! let chain = whitespace_normalizer();
//! assert_eq!(chain.normalize(Some(" \t hello \n\n world  ")), Some("hello world".to_string()));
//! ```

use once_cell::sync::Lazy;

use crate::pipeline::ReplacementChain;

/// Leading run of whitespace.
pub const WHITESPACE_PREFIX_REGEX: &str = r"^[ \t\n\x0B\f\r]+";
/// Trailing run of whitespace.
pub const WHITESPACE_SUFFIX_REGEX: &str = r"[ \t\n\x0B\f\r]+$";
/// Run of whitespace other than the ordinary space.
pub const MULTIPLE_WHITESPACE_REGEX: &str = r"[\t\n\x0B\r\f]+";
/// Two or more consecutive ordinary spaces.
pub const MULTIPLE_SPACE_REGEX: &str = r"[ ]{2,}";

pub const EMPTY_STRING_REPLACEMENT: &str = "";
pub const SINGLE_SPACE_REPLACEMENT: &str = " ";

static SHARED: Lazy<ReplacementChain> = Lazy::new(whitespace_normalizer);

/// Builds the whitespace preset.
///
/// # Panics
///
/// Never in practice: the four patterns are constants covered by tests.
pub fn whitespace_normalizer() -> ReplacementChain {
    ReplacementChain::from_pairs([
        (WHITESPACE_PREFIX_REGEX, EMPTY_STRING_REPLACEMENT),
        (WHITESPACE_SUFFIX_REGEX, EMPTY_STRING_REPLACEMENT),
        (MULTIPLE_WHITESPACE_REGEX, SINGLE_SPACE_REPLACEMENT),
        (MULTIPLE_SPACE_REGEX, SINGLE_SPACE_REPLACEMENT),
    ])
    .expect("whitespace preset patterns are valid")
}

/// Process-wide whitespace preset, built on first use.
pub fn shared_whitespace_normalizer() -> &'static ReplacementChain {
    &SHARED
}
