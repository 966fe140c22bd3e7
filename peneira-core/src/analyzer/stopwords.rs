//! Stopword membership testing.
//!
//! A stopword is a common word that carries little weight for frequency
//! analysis and gets filtered out of downstream counts. Matching here is
//! exact and case-sensitive: the probe token is not lowercased,
//! accent-folded, or stripped before lookup. Callers wanting insensitive
//! matching apply [`remove_accents`](crate::analyzer::remove_accents) or
//! `str::to_lowercase` to the token first.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of stopwords with exact-match lookup.
///
/// Construct once and share by reference; independent filters for
/// different languages coexist freely in one process. All lookups go
/// through `&self`, so a filter is safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl StopwordFilter {
    /// Creates a filter with no words; nothing is a stopword.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a filter from any sequence of words.
    ///
    /// Words are stored as given. Duplicates collapse.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Curated Portuguese common-word list.
    #[must_use]
    pub fn portuguese() -> Self {
        Self::from_words(get(LANGUAGE::Portuguese))
    }

    /// Curated English common-word list.
    #[must_use]
    pub fn english() -> Self {
        Self::from_words(get(LANGUAGE::English))
    }

    /// Adds a word. Returns false if it was already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    /// Removes a word. Returns false if it was not present.
    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(word)
    }

    /// Number of words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the filter holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True iff `token` is an exact member of the set.
    ///
    /// The empty string is not a member unless explicitly inserted.
    #[must_use]
    #[inline]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_matches_nothing() {
        let filter = StopwordFilter::empty();
        assert!(!filter.is_stopword("de"));
        assert!(!filter.is_stopword(""));
        assert!(filter.is_empty());
        assert_eq!(filter.len(), 0);
    }

    #[test]
    fn custom_list_membership() {
        let filter = StopwordFilter::from_words(["de", "que", "não"]);
        assert!(filter.is_stopword("de"));
        assert!(filter.is_stopword("que"));
        assert!(filter.is_stopword("não"));
        assert!(!filter.is_stopword("palavra"));
        assert_eq!(filter.len(), 3);
    }

    #[test]
    fn empty_string_is_not_a_stopword() {
        let filter = StopwordFilter::from_words(["de"]);
        assert!(!filter.is_stopword(""));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let filter = StopwordFilter::from_words(["de"]);
        assert!(filter.is_stopword("de"));
        assert!(!filter.is_stopword("De"));
        assert!(!filter.is_stopword("DE"));
    }

    #[test]
    fn matching_is_accent_sensitive() {
        let filter = StopwordFilter::from_words(["não"]);
        assert!(filter.is_stopword("não"));
        assert!(!filter.is_stopword("nao"));
    }

    #[test]
    fn duplicates_collapse() {
        let filter = StopwordFilter::from_words(["a", "a", "b"]);
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn insert_and_remove() {
        let mut filter = StopwordFilter::empty();

        assert!(filter.insert("rt"));
        assert!(!filter.insert("rt"));
        assert!(filter.is_stopword("rt"));

        assert!(filter.remove("rt"));
        assert!(!filter.remove("rt"));
        assert!(!filter.is_stopword("rt"));
    }

    #[test]
    fn portuguese_list_contains_common_words() {
        let filter = StopwordFilter::portuguese();
        assert!(!filter.is_empty());
        assert!(filter.is_stopword("de"));
        assert!(filter.is_stopword("que"));
    }

    #[test]
    fn english_list_contains_common_words() {
        let filter = StopwordFilter::english();
        assert!(!filter.is_empty());
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("and"));
    }

    #[test]
    fn languages_are_independent() {
        let pt = StopwordFilter::portuguese();
        let en = StopwordFilter::english();
        assert!(pt.is_stopword("que"));
        assert!(!en.is_stopword("que"));
    }

    #[test]
    fn filter_is_cloneable() {
        let original = StopwordFilter::from_words(["de"]);
        let copy = original.clone();
        assert!(copy.is_stopword("de"));
        assert_eq!(copy.len(), original.len());
    }

    #[test]
    fn shared_across_threads() {
        let filter = StopwordFilter::from_words(["de", "que"]);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert!(filter.is_stopword("de"));
                    assert!(!filter.is_stopword("palavra"));
                });
            }
        });
    }
}
