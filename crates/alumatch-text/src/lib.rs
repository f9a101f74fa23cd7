//! alumatch-text
//!
//! Text normalization and tokenization for the matching engine. Leaf crate:
//! everything here is pure and allocation-only.

pub mod normalize;
pub mod tokenize;

pub use normalize::{normalize, NormalizeMode, Normalizer};
pub use tokenize::{is_word_char, tokenize};
