//! Shortened-URL length policy.

use smallvec::SmallVec;

/// Accepted character counts for platform-shortened URLs.
///
/// Link shorteners emit fixed-length URLs, and the length moves over time
/// as the platform revises its wrapper. The accepted lengths are therefore
/// data, not constants: build a fresh policy with [`ShortUrlPolicy::new`]
/// when the platform changes, without touching code.
///
/// The default accepts 22 and 23 characters, the historical t.co lengths
/// for http and https links.
// TODO: read the current wrapper length from the platform's configuration
// endpoint instead of shipping a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrlPolicy {
    lengths: SmallVec<[usize; 2]>,
}

impl Default for ShortUrlPolicy {
    fn default() -> Self {
        Self::new(&[22, 23])
    }
}

impl ShortUrlPolicy {
    /// Creates a policy accepting exactly the given character counts.
    ///
    /// An empty slice yields a policy that matches nothing.
    #[must_use]
    pub fn new(lengths: &[usize]) -> Self {
        Self {
            lengths: SmallVec::from_slice(lengths),
        }
    }

    /// Accepted lengths, in construction order.
    #[must_use]
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// True iff the token's character count is one of the accepted lengths.
    ///
    /// Counts characters, not bytes.
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        let count = token.chars().count();
        self.lengths.contains(&count)
    }
}
