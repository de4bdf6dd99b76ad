//! Umbrella crate for rechain.
//!
//! Re-exports the replacement-chain engine from the `chain` crate and adds
//! what a host data-binding layer needs around it: the [`TextConverter`] seam
//! it calls into, an optional metrics observer, and YAML chain files.

pub mod config;

pub use chain::{
    ChainConfig, ConfigurationError, EMPTY_STRING_REPLACEMENT, MULTIPLE_SPACE_REGEX,
    MULTIPLE_WHITESPACE_REGEX, ReplacementChain, Rule, RuleConfig, SINGLE_SPACE_REPLACEMENT,
    WHITESPACE_PREFIX_REGEX, WHITESPACE_SUFFIX_REGEX, shared_whitespace_normalizer,
    whitespace_normalizer,
};
pub use config::{ChainDefinition, ChainFileConfig, ConfigLoadError, Preset};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Two-way conversion between the text a user submits and the value a host
/// stores.
///
/// `None` stands for "no value set" on both sides and must pass through
/// untouched.
pub trait TextConverter: Send + Sync {
    /// Text to stored value.
    fn convert(&self, text: Option<&str>) -> Option<String>;

    /// Stored value back to text.
    fn render(&self, value: Option<&str>) -> Option<String> {
        value.map(str::to_owned)
    }
}

impl TextConverter for ReplacementChain {
    fn convert(&self, text: Option<&str>) -> Option<String> {
        let text = text?;
        let span = MetricsSpan::start();
        let out = self.normalize_str(text);
        if let Some(span) = span {
            span.record_convert(out.as_ref() != text);
        }
        Some(out.into_owned())
    }

    fn render(&self, value: Option<&str>) -> Option<String> {
        ReplacementChain::render(self, value)
    }
}

impl<T: TextConverter + ?Sized> TextConverter for Arc<T> {
    fn convert(&self, text: Option<&str>) -> Option<String> {
        (**self).convert(text)
    }

    fn render(&self, value: Option<&str>) -> Option<String> {
        (**self).render(value)
    }
}

/// Metrics observer for conversions.
pub trait ConversionMetrics: Send + Sync {
    /// Called once per present input. `changed` is false when the output
    /// equals the input.
    fn record_convert(&self, latency: Duration, changed: bool);
}

/// Install or clear the global conversion metrics recorder.
pub fn set_conversion_metrics(recorder: Option<Arc<dyn ConversionMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn ConversionMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn ConversionMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn ConversionMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn ConversionMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_convert(self, changed: bool) {
        self.recorder.record_convert(self.start.elapsed(), changed);
    }
}
