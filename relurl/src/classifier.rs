//! Memoized relative/absolute classification.
//!
//! The decision procedure, first match wins:
//!
//! 1. Non-text candidate: relative.
//! 2. Empty string: relative.
//! 3. `//` prefix with `allow_protocol_relative == false`: absolute. Decided
//!    from the option and prefix alone, without touching the cache.
//! 4. Cached verdict for the candidate's [`CacheKey`], if any.
//! 5. `!is_absolute_url(candidate)`, stored in the cache.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use relurl_cache::{NoopCache, ResultCache};
use relurl_core::constants::NETWORK_PATH_PREFIX;
use relurl_core::error::Result;
use relurl_core::traits::VerdictCache;
use relurl_core::types::{CacheKey, Candidate, ClassifyOptions};

use crate::config::ClassifierConfig;
use crate::scheme::is_absolute_url;

/// Outcome of the checks that run before any cache access.
enum Precheck<'a> {
    Decided(bool),
    Classify(&'a str),
}

fn precheck<'a>(candidate: Candidate<'a>, options: &ClassifyOptions) -> Precheck<'a> {
    let s = match candidate {
        Candidate::NonText => return Precheck::Decided(true),
        Candidate::Text(s) => s,
    };
    if s.is_empty() {
        return Precheck::Decided(true);
    }
    if !options.allow_protocol_relative && s.starts_with(NETWORK_PATH_PREFIX) {
        return Precheck::Decided(false);
    }
    Precheck::Classify(s)
}

/// Classifies without memoization.
pub fn is_relative_uncached<'a>(
    candidate: impl Into<Candidate<'a>>,
    options: &ClassifyOptions,
) -> bool {
    match precheck(candidate.into(), options) {
        Precheck::Decided(verdict) => verdict,
        Precheck::Classify(s) => !is_absolute_url(s),
    }
}

/// Relative/absolute URL classifier backed by a verdict cache.
///
/// The cache is owned through an `Arc`, so several classifiers can share one
/// store, or each can keep its own. `Classifier` is `Send + Sync`.
#[derive(Clone)]
pub struct Classifier {
    cache: Arc<dyn VerdictCache>,
    defaults: ClassifyOptions,
}

impl Classifier {
    /// Creates a classifier with a private default-sized cache.
    pub fn new() -> Self {
        Self::with_cache(Arc::new(ResultCache::<CacheKey, bool>::new()))
    }

    /// Creates a classifier from a configuration.
    pub fn with_config(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;

        let cache: Arc<dyn VerdictCache> = if config.enable_cache {
            Arc::new(ResultCache::<CacheKey, bool>::with_config(config.cache)?)
        } else {
            Arc::new(NoopCache)
        };

        Ok(Self::with_cache(cache).with_defaults(config.defaults))
    }

    /// Creates a classifier that uses an existing cache.
    pub fn with_cache(cache: Arc<dyn VerdictCache>) -> Self {
        debug!(entries = cache.len(), "creating classifier");
        Self {
            cache,
            defaults: ClassifyOptions::default(),
        }
    }

    /// Creates a classifier that never memoizes.
    pub fn uncached() -> Self {
        Self::with_cache(Arc::new(NoopCache))
    }

    /// Replaces the options used by [`Classifier::is_relative_url`].
    pub fn with_defaults(mut self, defaults: ClassifyOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Options used by [`Classifier::is_relative_url`].
    pub fn defaults(&self) -> ClassifyOptions {
        self.defaults
    }

    /// Handle to the verdict cache, for inspection and resetting.
    pub fn cache(&self) -> &Arc<dyn VerdictCache> {
        &self.cache
    }

    /// Returns true if `candidate` is a relative URL reference under
    /// `options`. Never fails; non-text candidates are relative.
    pub fn is_relative<'a>(
        &self,
        candidate: impl Into<Candidate<'a>>,
        options: &ClassifyOptions,
    ) -> bool {
        let s = match precheck(candidate.into(), options) {
            Precheck::Decided(verdict) => return verdict,
            Precheck::Classify(s) => s,
        };

        let key = CacheKey::new(s, options);
        if let Some(verdict) = self.cache.get(&key) {
            return verdict;
        }

        let verdict = !is_absolute_url(s);
        trace!(%key, relative = verdict, "classified");
        self.cache.set(key, verdict);
        verdict
    }

    /// [`Classifier::is_relative`] with this classifier's default options.
    pub fn is_relative_url(&self, candidate: &str) -> bool {
        self.is_relative(candidate, &self.defaults)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifier")
            .field("cached_entries", &self.cache.len())
            .field("defaults", &self.defaults)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::num::NonZeroUsize;
    use test_case::test_case;

    fn classifier_with(capacity: usize) -> (Classifier, Arc<ResultCache>) {
        let cache: Arc<ResultCache> =
            Arc::new(ResultCache::with_capacity(NonZeroUsize::new(capacity).unwrap()));
        (Classifier::with_cache(cache.clone()), cache)
    }

    #[test_case("http://example.com", false)]
    #[test_case("https://example.com/a?b#c", false)]
    #[test_case("file:///tmp/x", false)]
    #[test_case("data:image/png;base64,AAAA", false)]
    #[test_case("ftp://example.com/pub", false)]
    #[test_case("ws://example.com/live", false)]
    #[test_case("wss://example.com/live", false)]
    #[test_case("mailto:test@example.com", false)]
    #[test_case("tel:+123", false)]
    #[test_case("C:\\foo", true)]
    #[test_case("/path/to/resource", true)]
    #[test_case("path/to/resource", true)]
    #[test_case("./a", true)]
    #[test_case("../a", true)]
    #[test_case("?query", true)]
    #[test_case("#fragment", true)]
    #[test_case("", true)]
    #[test_case("//example.com", true)]
    fn test_default_verdicts(input: &str, relative: bool) {
        assert_eq!(Classifier::new().is_relative_url(input), relative);
        assert_eq!(is_relative_uncached(input, &ClassifyOptions::default()), relative);
    }

    #[test]
    fn test_protocol_relative_option() {
        let classifier = Classifier::new();
        assert!(classifier.is_relative("//example.com", &ClassifyOptions::default()));
        assert!(!classifier.is_relative("//example.com", &ClassifyOptions::strict()));
        // The option only concerns the `//` prefix.
        assert!(classifier.is_relative("/example.com", &ClassifyOptions::strict()));
        assert!(!classifier.is_relative("https://a.b", &ClassifyOptions::strict()));
    }

    #[test]
    fn test_non_text_is_relative() {
        let classifier = Classifier::new();
        for value in [json!(null), json!(1), json!(false), json!({"href": "http://x"})] {
            assert!(classifier.is_relative(&value, &ClassifyOptions::default()));
            assert!(classifier.is_relative(&value, &ClassifyOptions::strict()));
        }
        assert!(classifier.is_relative(None::<&str>, &ClassifyOptions::default()));
        assert!(classifier.cache().is_empty());
    }

    #[test]
    fn test_empty_string_not_cached() {
        let (classifier, cache) = classifier_with(4);
        assert!(classifier.is_relative_url(""));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_verdict_is_memoized() {
        let (classifier, cache) = classifier_with(4);
        let key = CacheKey::new("mailto:a@b.c", &ClassifyOptions::default());

        assert!(!classifier.is_relative_url("mailto:a@b.c"));
        assert_eq!(cache.peek(&key), Some(false));

        assert!(!classifier.is_relative_url("mailto:a@b.c"));
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn test_cached_verdict_is_returned_as_is() {
        let (classifier, cache) = classifier_with(4);
        // A planted verdict wins over recomputation.
        cache.set(CacheKey::new("/planted", &ClassifyOptions::default()), false);
        assert!(!classifier.is_relative_url("/planted"));
    }

    #[test]
    fn test_strict_protocol_relative_bypasses_cache() {
        let (classifier, cache) = classifier_with(4);

        assert!(!classifier.is_relative("//example.com", &ClassifyOptions::strict()));
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 0);

        assert!(classifier.is_relative("//example.com", &ClassifyOptions::default()));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&CacheKey::new("//example.com", &ClassifyOptions::default())));

        // The default-option entry does not leak into the strict path.
        assert!(!classifier.is_relative("//example.com", &ClassifyOptions::strict()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_options_use_separate_keys() {
        let (classifier, cache) = classifier_with(4);
        assert!(classifier.is_relative("a/b", &ClassifyOptions::default()));
        assert!(classifier.is_relative("a/b", &ClassifyOptions::strict()));

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(&CacheKey::Plain("a/b".into())));
        assert!(cache.contains(&CacheKey::NoProtocolRelative("a/b".into())));
    }

    #[test]
    fn test_cache_stays_bounded() {
        let (classifier, cache) = classifier_with(3);
        for i in 0..10 {
            classifier.is_relative_url(&format!("/page/{i}"));
        }
        assert_eq!(cache.len(), 3);
        assert!(cache.contains(&CacheKey::Plain("/page/9".into())));
        assert!(!cache.contains(&CacheKey::Plain("/page/6".into())));
    }

    #[test]
    fn test_clear_then_recompute() {
        let (classifier, cache) = classifier_with(4);
        classifier.is_relative_url("https://example.com/x");
        classifier.cache().clear();

        assert!(cache.is_empty());
        assert_eq!(cache.get(&CacheKey::Plain("https://example.com/x".into())), None);
        assert!(!classifier.is_relative_url("https://example.com/x"));
    }

    #[test]
    fn test_uncached_classifier() {
        let classifier = Classifier::uncached();
        assert!(!classifier.is_relative_url("https://example.com"));
        assert!(classifier.cache().is_empty());
    }

    #[test]
    fn test_with_config() {
        let config = ClassifierConfig::default()
            .with_capacity(2)
            .with_defaults(ClassifyOptions::strict());
        let classifier = Classifier::with_config(config).unwrap();

        assert!(!classifier.is_relative_url("//example.com"));
        for i in 0..5 {
            classifier.is_relative_url(&format!("p{i}"));
        }
        assert_eq!(classifier.cache().len(), 2);

        let disabled = Classifier::with_config(ClassifierConfig::default().no_cache()).unwrap();
        disabled.is_relative_url("p");
        assert!(disabled.cache().is_empty());

        assert!(Classifier::with_config(ClassifierConfig::default().with_capacity(0)).is_err());
    }

    #[test]
    fn test_shared_cache_between_classifiers() {
        let (first, cache) = classifier_with(8);
        let second = Classifier::with_cache(cache.clone());

        first.is_relative_url("tel:+1");
        assert!(!second.is_relative_url("tel:+1"));
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_classifier_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Classifier>();
    }
}
