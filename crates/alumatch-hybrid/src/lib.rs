//! alumatch-hybrid
//!
//! Blends the field-of-study and skills similarities of each candidate into one
//! score, then filters, orders and caps the list.

pub mod observer;

use alumatch_core::config::{MatchConfig, MatchStrategy};
use alumatch_core::error::{Error, Result};
use alumatch_core::traits::{RankObserver, Recommender, TextVectorizer};
use alumatch_core::types::{AlumnusProfile, Candidate, MatchField, ScoredCandidate};
use alumatch_text::Normalizer;
use alumatch_vector::{cosine_similarity, TfIdfVectorizer};

pub use observer::{NoopObserver, TracingObserver};

pub struct HybridRecommender<V = TfIdfVectorizer> where V: TextVectorizer {
    vectorizer: V,
    normalizer: Normalizer,
    config: MatchConfig,
    observer: Box<dyn RankObserver>,
}

impl HybridRecommender<TfIdfVectorizer> {
    pub fn new(config: MatchConfig) -> Result<Self> {
        let vectorizer = TfIdfVectorizer::new(config.min_token_len);
        Self::with_vectorizer(vectorizer, config)
    }
}

impl<V> HybridRecommender<V> where V: TextVectorizer {
    pub fn with_vectorizer(vectorizer: V, config: MatchConfig) -> Result<Self> {
        config.validate()?;
        let normalizer = Normalizer::new(config.normalize);
        Ok(Self { vectorizer, normalizer, config, observer: Box::new(TracingObserver) })
    }

    pub fn with_observer(mut self, observer: Box<dyn RankObserver>) -> Self { self.observer = observer; self }

    pub fn config(&self) -> &MatchConfig { &self.config }

    /// Scores every candidate against `alumnus` and returns the best matches,
    /// highest first. Equal scores keep their input order.
    pub fn rank(&self, alumnus: &AlumnusProfile, candidates: &[Candidate]) -> Result<Vec<ScoredCandidate>> {
        let scored = self.score(alumnus, candidates)?;
        let ranked = select_top(scored, self.config.threshold, self.config.top_n);
        self.observer.on_ranked(&ranked);
        Ok(ranked)
    }

    /// Scores every candidate, unfiltered and in input order.
    pub fn score(&self, alumnus: &AlumnusProfile, candidates: &[Candidate]) -> Result<Vec<ScoredCandidate>> {
        if candidates.is_empty() { return Ok(Vec::new()); }
        let scored: Vec<ScoredCandidate> = match self.config.strategy {
            MatchStrategy::Split => {
                let field = self.similarities(MatchField::FieldOfStudy, &alumnus.field_of_study, candidates.iter().map(|c| c.qualification.as_str()))?;
                let skills = self.similarities(MatchField::Skills, &alumnus.skills, candidates.iter().map(|c| c.required_skills.as_str()))?;
                candidates
                    .iter()
                    .zip(field.into_iter().zip(skills))
                    .map(|(c, (f, s))| ScoredCandidate {
                        candidate: c.clone(),
                        similarity: self.blend(f, s),
                        field_similarity: f,
                        skills_similarity: s,
                    })
                    .collect()
            }
            MatchStrategy::Combined => {
                let query = format!("{} {}", alumnus.field_of_study, alumnus.skills);
                let docs: Vec<String> = candidates.iter().map(|c| format!("{} {}", c.qualification, c.required_skills)).collect();
                let sims = self.similarities(MatchField::Combined, &query, docs.iter().map(String::as_str))?;
                candidates
                    .iter()
                    .zip(sims)
                    .map(|(c, sim)| {
                        let sim = finite_unit(sim);
                        ScoredCandidate { candidate: c.clone(), similarity: sim, field_similarity: sim, skills_similarity: sim }
                    })
                    .collect()
            }
        };
        Ok(scored)
    }

    /// One vectorizer run for one field pair; returns a similarity per document.
    fn similarities<'a>(&self, field: MatchField, query: &str, documents: impl Iterator<Item = &'a str>) -> Result<Vec<f64>> {
        let query = self.normalizer.normalize(Some(query));
        let documents: Vec<String> = documents.map(|d| self.normalizer.normalize(Some(d))).collect();
        let vectors = self.vectorizer.vectorize(&query, &documents);
        self.observer.on_vectorized(field, &vectors);
        if vectors.doc_vectors.len() != documents.len() {
            return Err(Error::LengthMismatch { expected: documents.len(), actual: vectors.doc_vectors.len() });
        }
        Ok(vectors.doc_vectors.iter().map(|d| cosine_similarity(&vectors.query_vector, d)).collect())
    }

    /// Weighted sum of the two similarities. Weights summing above 1 are
    /// rescaled to sum to 1 so the score stays in `[0, 1]` without saturating.
    fn blend(&self, field: f64, skills: f64) -> f64 {
        let total = self.config.field_weight + self.config.skills_weight;
        let scale = if total > 1.0 { total } else { 1.0 };
        finite_unit((field * self.config.field_weight + skills * self.config.skills_weight) / scale)
    }
}

impl<V> Recommender for HybridRecommender<V> where V: TextVectorizer {
    fn recommend(&self, alumnus: &AlumnusProfile, candidates: &[Candidate]) -> Result<Vec<ScoredCandidate>> { Self::rank(self, alumnus, candidates) }
}

/// Keeps scores above `threshold`, sorts them descending with a stable sort
/// and keeps the first `top_n`. NaN scores are treated as 0.
pub fn select_top(mut scored: Vec<ScoredCandidate>, threshold: f64, top_n: usize) -> Vec<ScoredCandidate> {
    for s in &mut scored { s.similarity = finite_unit(s.similarity); }
    scored.retain(|s| s.similarity > threshold);
    scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    scored.truncate(top_n);
    scored
}

fn finite_unit(x: f64) -> f64 { if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) } }
