//! Accent folding for lowercase accented vowels.
//!
//! Folds exactly six characters: á and à to `a`, é to `e`, í to `i`, ó to
//! `o`, ú to `u`. Everything else passes through untouched — including
//! uppercase accented letters and the accents the mapping does not cover
//! (ã, õ, â, ê, ô, ç, …).

/// Folds one of the six mapped accented vowels to its ASCII equivalent.
///
/// Any other character is returned unchanged.
#[inline(always)]
pub const fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' => 'a',
        'é' => 'e',
        'í' => 'i',
        'ó' => 'o',
        'ú' => 'u',
        _ => c,
    }
}

/// Folds accented vowels in `token` into an existing String buffer.
///
/// Clears the buffer before writing and reuses its capacity when
/// sufficient. Every mapped character is 2 bytes in UTF-8 and folds to 1
/// byte, so the output never exceeds the input length.
#[inline]
pub fn remove_accents_into(token: &str, out: &mut String) {
    out.clear();
    out.reserve(token.len());

    // The mapped characters are all multi-byte; pure ASCII copies through.
    if token.is_ascii() {
        out.push_str(token);
        return;
    }

    for c in token.chars() {
        out.push(fold_accent(c));
    }
}

/// Folds accented vowels and returns a new String.
#[inline]
pub fn remove_accents(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    remove_accents_into(token, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_all_six_vowels() {
        assert_eq!(remove_accents("áàéíóú"), "aaeiou");
    }

    #[test]
    fn cafe() {
        assert_eq!(remove_accents("café"), "cafe");
    }

    #[test]
    fn uppercase_not_mapped() {
        assert_eq!(remove_accents("ÁÀ"), "ÁÀ");
        assert_eq!(remove_accents("ÉÍÓÚ"), "ÉÍÓÚ");
    }

    #[test]
    fn unmapped_accents_pass_through() {
        assert_eq!(remove_accents("ãõâêôç"), "ãõâêôç");
        assert_eq!(remove_accents("coração"), "coração");
    }

    #[test]
    fn plain_ascii_unchanged() {
        assert_eq!(remove_accents("hello world"), "hello world");
        assert_eq!(remove_accents("123 #tag @user"), "123 #tag @user");
    }

    #[test]
    fn empty_input() {
        assert_eq!(remove_accents(""), "");
    }

    #[test]
    fn mixed_mapped_and_unmapped() {
        assert_eq!(remove_accents("está aí"), "esta ai");
        assert_eq!(remove_accents("não"), "não");
    }

    #[test]
    fn non_latin_pass_through() {
        assert_eq!(remove_accents("привет"), "привет");
        assert_eq!(remove_accents("こんにちは"), "こんにちは");
        assert_eq!(remove_accents("🌍"), "🌍");
    }

    #[test]
    fn idempotent() {
        let samples = ["café", "está aí", "ÁÀ", "coração", "plain"];
        for s in samples {
            let once = remove_accents(s);
            let twice = remove_accents(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn output_never_longer_than_input() {
        let samples = ["áàéíóú", "café", "plain", "ãõ"];
        for s in samples {
            assert!(remove_accents(s).len() <= s.len());
        }
    }

    #[test]
    fn fold_accent_identity_for_ascii() {
        for b in 0u8..128 {
            let c = b as char;
            assert_eq!(fold_accent(c), c);
        }
    }

    #[test]
    fn into_reuses_buffer() {
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        remove_accents_into("café", &mut buf);
        assert_eq!(buf, "cafe");
        assert_eq!(buf.capacity(), cap);

        remove_accents_into("árvore", &mut buf);
        assert_eq!(buf, "arvore");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn into_clears_previous_content() {
        let mut buf = String::from("stale");
        remove_accents_into("é", &mut buf);
        assert_eq!(buf, "e");
    }
}
