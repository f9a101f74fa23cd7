use std::collections::HashMap;

use alumatch_core::traits::TextVectorizer;
use alumatch_core::types::{VectorSet, WeightVector};
use alumatch_text::tokenize;

/// Smoothed TF-IDF over one query and N documents.
///
/// The vocabulary is rebuilt on every call from the texts passed in, so the
/// query vector and all document vectors of one `VectorSet` share the same
/// dimension and term order:
///
/// - vocabulary order: first occurrence, query first, then documents in order
/// - `tf = count / max(words, 1)`
/// - `df` counts the query as a text too
/// - `idf = ln((texts + 1) / (df + 1)) + 1`
#[derive(Debug, Clone, Copy)]
pub struct TfIdfVectorizer {
    min_token_len: usize,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self { Self { min_token_len: 1 } }
}

impl TfIdfVectorizer {
    pub fn new(min_token_len: usize) -> Self { Self { min_token_len: min_token_len.max(1) } }

    pub fn min_token_len(&self) -> usize { self.min_token_len }

    pub fn fit_transform<S: AsRef<str>>(&self, query: &str, documents: &[S]) -> VectorSet {
        let texts: Vec<Vec<String>> = std::iter::once(query)
            .chain(documents.iter().map(AsRef::as_ref))
            .map(|t| tokenize(t, self.min_token_len))
            .collect();

        let mut vocab: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for token in texts.iter().flatten() {
            index.entry(token.clone()).or_insert_with(|| {
                vocab.push(token.clone());
                vocab.len() - 1
            });
        }
        if vocab.is_empty() { return VectorSet::empty(documents.len()); }

        let tf: Vec<WeightVector> = texts.iter().map(|words| term_frequencies(words, &index, vocab.len())).collect();

        let total_texts = texts.len() as f64;
        let idf: Vec<f64> = (0..vocab.len())
            .map(|i| {
                let df = tf.iter().filter(|v| v[i] > 0.0).count() as f64;
                ((total_texts + 1.0) / (df + 1.0)).ln() + 1.0
            })
            .collect();

        let mut vectors = tf.into_iter().map(|mut v| {
            for (w, weight) in v.iter_mut().zip(&idf) { *w *= weight; }
            v
        });
        let query_vector = vectors.next().unwrap_or_default();
        VectorSet { query_vector, doc_vectors: vectors.collect(), vocab }
    }
}

fn term_frequencies(words: &[String], index: &HashMap<String, usize>, dim: usize) -> WeightVector {
    let mut v = vec![0.0; dim];
    for w in words {
        if let Some(&i) = index.get(w) { v[i] += 1.0; }
    }
    let len = words.len().max(1) as f64;
    for x in &mut v { *x /= len; }
    v
}

impl TextVectorizer for TfIdfVectorizer {
    fn vectorize(&self, query: &str, documents: &[String]) -> VectorSet { self.fit_transform(query, documents) }
}
