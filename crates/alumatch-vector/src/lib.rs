//! alumatch-vector
//!
//! TF-IDF vectorization over a per-call vocabulary and cosine similarity
//! between the resulting weight vectors.

pub mod similarity;
pub mod tfidf;

pub use similarity::{cosine_similarity, dot, l2_norm};
pub use tfidf::TfIdfVectorizer;
