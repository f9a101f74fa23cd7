//! Domain types shared by the normalizer, vectorizer and ranker.

use serde::{Deserialize, Serialize};

pub type RecordId = String;
pub type WeightVector = Vec<f64>;

/// An alumnus profile as seen by the matching engine.
///
/// Only `field_of_study` and `skills` are matched; everything else is carried
/// through for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlumnusProfile {
    pub id: RecordId,
    pub name: String,
    pub field_of_study: String,
    pub skills: String,
    pub graduation_year: String,
    pub occupation: String,
    pub address: String,
    pub image_url: String,
}

/// A company posting that an alumnus can be matched against.
///
/// - `id`: external document key
/// - `qualification`: required field of study / qualification text
/// - `required_skills`: free-text skills the company asks for
/// - `name`/`industry`/`location`/`photo_url`: display passthrough
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: RecordId,
    pub name: String,
    pub industry: String,
    pub qualification: String,
    pub required_skills: String,
    pub location: String,
    pub photo_url: String,
}

/// A candidate together with its blended similarity score.
///
/// `similarity` is always finite and within `[0, 1]`. The two component
/// similarities are kept for diagnostics; under the combined strategy both
/// hold the single-pass similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub similarity: f64,
    pub field_similarity: f64,
    pub skills_similarity: f64,
}

impl ScoredCandidate {
    pub fn percent(&self) -> f64 { self.similarity * 100.0 }
}

/// Which pair of text fields a vectorizer run compared.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    FieldOfStudy,
    Skills,
    Combined,
}

/// Output of one TF-IDF run.
///
/// `query_vector` and every entry of `doc_vectors` are indexed by `vocab`.
/// When no usable token exists the set is empty: no vocabulary, an empty
/// query vector and one empty vector per input document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorSet {
    pub query_vector: WeightVector,
    pub doc_vectors: Vec<WeightVector>,
    pub vocab: Vec<String>,
}

impl VectorSet {
    pub fn empty(doc_count: usize) -> Self {
        Self { query_vector: Vec::new(), doc_vectors: vec![Vec::new(); doc_count], vocab: Vec::new() }
    }

    pub fn is_empty(&self) -> bool { self.vocab.is_empty() }

    pub fn dim(&self) -> usize { self.vocab.len() }
}
