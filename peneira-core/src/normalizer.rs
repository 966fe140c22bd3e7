//! Configured facade over the cleaning and classification operations.

use crate::analyzer::stopwords::StopwordFilter;
use crate::analyzer::{remove_accents, remove_punctuation};
use crate::classify::{self, ShortUrlPolicy};
use peneira_types::TokenKind;

/// One configured entry point over every token operation.
///
/// Bundles a [`StopwordFilter`] and a [`ShortUrlPolicy`] so callers inject
/// a single value instead of reaching for ambient globals. Independent
/// instances — different languages, different length policies — coexist
/// freely in one process. Every method takes `&self`; a constructed
/// normalizer is never mutated by use and can be shared across threads.
///
/// # Examples
///
/// ```
/// use peneira_core::normalizer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.remove_accents("café"), "cafe");
/// assert_eq!(normalizer.remove_punctuation("hello, world!"), "hello world");
/// assert!(normalizer.is_hashtag("#topic"));
/// ```
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stopwords: StopwordFilter,
    short_urls: ShortUrlPolicy,
}

impl Default for TextNormalizer {
    /// Portuguese stopwords and the default shortened-URL lengths.
    fn default() -> Self {
        Self::new(StopwordFilter::portuguese(), ShortUrlPolicy::default())
    }
}

impl TextNormalizer {
    /// Creates a normalizer from an explicit filter and policy.
    #[must_use]
    pub fn new(stopwords: StopwordFilter, short_urls: ShortUrlPolicy) -> Self {
        Self {
            stopwords,
            short_urls,
        }
    }

    /// The configured stopword filter.
    #[must_use]
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// The configured shortened-URL policy.
    #[must_use]
    pub fn short_urls(&self) -> &ShortUrlPolicy {
        &self.short_urls
    }

    /// Folds the six mapped accented vowels to ASCII.
    ///
    /// See [`remove_accents`](crate::analyzer::remove_accents).
    #[must_use]
    pub fn remove_accents(&self, token: &str) -> String {
        remove_accents(token)
    }

    /// Deletes undesired punctuation characters.
    ///
    /// See [`remove_punctuation`](crate::analyzer::remove_punctuation).
    #[must_use]
    pub fn remove_punctuation(&self, token: &str) -> String {
        remove_punctuation(token)
    }

    /// True iff the token is an exact member of the configured stopword
    /// list. The probe is not normalized first.
    #[must_use]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.is_stopword(token)
    }

    /// True iff the token starts with `#`.
    #[must_use]
    pub fn is_hashtag(&self, token: &str) -> bool {
        classify::is_hashtag(token)
    }

    /// True iff the token starts with `@`.
    #[must_use]
    pub fn is_twitter_mention(&self, token: &str) -> bool {
        classify::is_twitter_mention(token)
    }

    /// True iff the token starts with `ht` or `hr`.
    ///
    /// See [`is_url`](crate::classify::is_url) for the `hr` quirk.
    #[must_use]
    pub fn is_url(&self, token: &str) -> bool {
        classify::is_url(token)
    }

    /// True iff the token's character count matches the configured
    /// shortened-URL lengths.
    #[must_use]
    pub fn is_valid_twitter_short_url(&self, token: &str) -> bool {
        self.short_urls.matches(token)
    }

    /// Structural class of the token: hashtag, mention, URL, or word.
    #[must_use]
    pub fn classify(&self, token: &str) -> TokenKind {
        classify::classify(token)
    }
}
