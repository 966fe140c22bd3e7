//! Structural token classification.
//!
//! Prefix heuristics for platform syntax: hashtags, mentions, and URLs.
//! These are lightweight structural tests, not validators — `#` makes a
//! hashtag no matter what follows, and URL detection is a two-byte scheme
//! sniff, not RFC parsing.

pub mod shorturl;

pub use shorturl::ShortUrlPolicy;

use peneira_types::TokenKind;

/// True iff the token starts with `#`.
///
/// The empty string is not a hashtag. No validation of the remainder.
#[must_use]
#[inline(always)]
pub fn is_hashtag(token: &str) -> bool {
    token.starts_with('#')
}

/// True iff the token starts with `@`.
///
/// Same shape and limits as [`is_hashtag`].
#[must_use]
#[inline(always)]
pub fn is_twitter_mention(token: &str) -> bool {
    token.starts_with('@')
}

/// True iff the token starts with `ht` or `hr`.
///
/// A crude sniff for `http`/`https` schemes. The `hr` arm reproduces the
/// classifier this library replaces, quirk included; downstream counters
/// depend on the exact match set, so any change here has to be coordinated
/// with them first.
#[must_use]
#[inline(always)]
pub fn is_url(token: &str) -> bool {
    token.starts_with("ht") || token.starts_with("hr")
}

/// Classifies a token by prefix, first match wins: hashtag, mention, URL,
/// then word.
#[must_use]
pub fn classify(token: &str) -> TokenKind {
    if is_hashtag(token) {
        TokenKind::Hashtag
    } else if is_twitter_mention(token) {
        TokenKind::Mention
    } else if is_url(token) {
        TokenKind::Url
    } else {
        TokenKind::Word
    }
}
