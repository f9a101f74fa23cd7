use alumatch_core::traits::RankObserver;
use alumatch_core::types::{MatchField, ScoredCandidate, VectorSet};
use tracing::debug;

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RankObserver for NoopObserver {}

/// Forwards ranking diagnostics to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RankObserver for TracingObserver {
    fn on_vectorized(&self, field: MatchField, vectors: &VectorSet) {
        debug!(?field, vocab = vectors.dim(), documents = vectors.doc_vectors.len(), empty = vectors.is_empty(), "vectorized");
    }

    fn on_ranked(&self, ranked: &[ScoredCandidate]) {
        let top = ranked.first().map(|s| s.similarity).unwrap_or(0.0);
        debug!(results = ranked.len(), top, "ranked candidates");
    }
}
