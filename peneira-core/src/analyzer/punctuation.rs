//! Punctuation stripping.
//!
//! Deletes undesired characters from a token outright — removal, not
//! substitution. The undesired set is ASCII punctuation plus four
//! typographic characters common in social-media text: curly double
//! quotes, the curly opening single quote, and the horizontal ellipsis.

/// True for characters deleted by [`remove_punctuation`].
///
/// Covers the 32 ASCII punctuation characters plus `“` (U+201C),
/// `”` (U+201D), `‘` (U+2018) and `…` (U+2026). The curly closing single
/// quote `’` (U+2019) is not in the set.
#[inline(always)]
pub const fn is_undesired(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '“' | '”' | '‘' | '…')
}

/// Strips undesired characters from `token` into an existing String buffer.
///
/// Clears the buffer before writing and reuses its capacity when
/// sufficient. Retained characters keep their relative order. A token made
/// entirely of punctuation collapses to the empty string, which is written
/// as-is — the caller decides whether to discard empties.
#[inline]
pub fn remove_punctuation_into(token: &str, out: &mut String) {
    out.clear();
    out.reserve(token.len());

    for c in token.chars() {
        if !is_undesired(c) {
            out.push(c);
        }
    }
}

/// Strips undesired characters and returns a new String.
#[inline]
pub fn remove_punctuation(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    remove_punctuation_into(token, &mut out);
    out
}
