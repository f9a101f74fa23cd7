pub fn dot(a: &[f64], b: &[f64]) -> f64 { a.iter().zip(b).map(|(x, y)| x * y).sum() }

pub fn l2_norm(v: &[f64]) -> f64 { v.iter().map(|x| x * x).sum::<f64>().sqrt() }

/// Cosine similarity of two weight vectors from the same vectorizer run.
///
/// Returns 0 for empty or differently sized inputs and for all-zero vectors;
/// otherwise the result is clamped into `[0, 1]`.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() || a.len() != b.len() { return 0.0; }
    let (norm_a, norm_b) = (l2_norm(a), l2_norm(b));
    if norm_a == 0.0 || norm_b == 0.0 { return 0.0; }
    let sim = dot(a, b) / (norm_a * norm_b);
    if sim.is_nan() { 0.0 } else { sim.clamp(0.0, 1.0) }
}
