use crate::error::Result;
use crate::types::{AlumnusProfile, Candidate, MatchField, ScoredCandidate, VectorSet};

pub trait TextVectorizer: Send + Sync {
    /// Vectorizes `query` and `documents` against one shared vocabulary.
    fn vectorize(&self, query: &str, documents: &[String]) -> VectorSet;
}

pub trait Recommender: Send + Sync {
    fn recommend(&self, alumnus: &AlumnusProfile, candidates: &[Candidate]) -> Result<Vec<ScoredCandidate>>;
}

/// Boundary hook for diagnostics around a ranking run.
pub trait RankObserver: Send + Sync {
    fn on_vectorized(&self, _field: MatchField, _vectors: &VectorSet) {}
    fn on_ranked(&self, _ranked: &[ScoredCandidate]) {}
}
