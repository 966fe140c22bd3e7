//! Shared vocabulary types for the peneira token-cleaning crates.
//!
//! This crate holds the small set of types that downstream consumers
//! (frequency counters, corpus cleaners) need without pulling in the
//! cleaning implementation itself. Keeping them separate ensures:
//!
//! - **Cheap to depend on**: no dependencies, nothing but plain data
//! - **Cross-crate compatibility**: core and callers share the same types
//! - **Clean boundaries**: no circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;

/// Structural class of a single token.
///
/// Classification looks only at the token's leading characters, never at
/// its content: a `#` prefix makes a hashtag regardless of what follows.
/// Stopword status is not a structural class — it depends on a configured
/// word list and is queried separately.
///
/// `#[repr(u8)]` guarantees a stable 1-byte layout so the kind can be
/// stored inline next to per-token counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Token starting with `#`.
    Hashtag = 0,
    /// Token starting with `@`.
    Mention = 1,
    /// Token matching the URL prefix heuristic.
    Url = 2,
    /// Anything else — ordinary prose.
    Word = 3,
}

impl TokenKind {
    /// True for classes that mark platform syntax rather than prose.
    ///
    /// Frequency counters typically drop marker tokens before counting.
    #[must_use]
    #[inline(always)]
    pub const fn is_marker(self) -> bool {
        !matches!(self, TokenKind::Word)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Hashtag => "hashtag",
            TokenKind::Mention => "mention",
            TokenKind::Url => "url",
            TokenKind::Word => "word",
        };
        f.write_str(name)
    }
}
