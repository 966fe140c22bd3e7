//! Token cleaning and classification for social-media text.
//!
//! `peneira-core` prepares short, pre-tokenized text fragments for
//! frequency analysis and corpus cleaning: it strips diacritics and
//! punctuation, and classifies a token as a stopword, hashtag, mention,
//! URL, or shortened URL.
//!
//! Every operation is a pure, single-pass function over one token. There
//! is no tokenizer here — input is assumed to be segmented already — and
//! no I/O: the library consumes word lists and length policies handed to
//! it as plain data.
//!
//! # Quick start
//!
//! ```
//! use peneira_core::{remove_accents, remove_punctuation, TextNormalizer};
//!
//! assert_eq!(remove_accents("café"), "cafe");
//! assert_eq!(remove_punctuation("hello, world!"), "hello world");
//!
//! let normalizer = TextNormalizer::default();
//! assert!(normalizer.is_stopword("de"));
//! assert!(normalizer.is_hashtag("#assunto"));
//! ```

pub mod analyzer;
pub mod classify;
pub mod normalizer;

pub use analyzer::{
    fold_accent, is_undesired, remove_accents, remove_accents_into, remove_punctuation,
    remove_punctuation_into, StopwordFilter,
};
pub use classify::{classify, is_hashtag, is_twitter_mention, is_url, ShortUrlPolicy};
pub use normalizer::TextNormalizer;
pub use peneira_types::TokenKind;
