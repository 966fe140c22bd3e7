//! Token cleaning pipeline.
//!
//! This module provides the per-token cleaning components:
//! - **Accents**: folds the six mapped accented vowels to ASCII
//! - **Punctuation**: deletes undesired characters outright
//! - **Stopwords**: exact-match membership against a configured word list

pub mod accents;
pub mod punctuation;
pub mod stopwords;

pub use accents::{fold_accent, remove_accents, remove_accents_into};
pub use punctuation::{is_undesired, remove_punctuation, remove_punctuation_into};
pub use stopwords::StopwordFilter;
