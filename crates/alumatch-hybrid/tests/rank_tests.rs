use std::sync::{Arc, Mutex};

use alumatch_core::config::MatchConfig;
use alumatch_core::error::Error;
use alumatch_core::traits::{RankObserver, Recommender, TextVectorizer};
use alumatch_core::types::{AlumnusProfile, Candidate, MatchField, ScoredCandidate, VectorSet};
use alumatch_hybrid::{select_top, HybridRecommender, NoopObserver};

fn alumnus(field_of_study: &str, skills: &str) -> AlumnusProfile {
    AlumnusProfile { id: "alumni-1".into(), name: "Rina".into(), field_of_study: field_of_study.into(), skills: skills.into(), ..Default::default() }
}

fn company(id: &str, qualification: &str, required_skills: &str) -> Candidate {
    Candidate { id: id.into(), name: format!("PT {id}"), qualification: qualification.into(), required_skills: required_skills.into(), ..Default::default() }
}

fn scored(id: &str, similarity: f64) -> ScoredCandidate {
    ScoredCandidate { candidate: company(id, "", ""), similarity, field_similarity: similarity, skills_similarity: similarity }
}

fn ids(ranked: &[ScoredCandidate]) -> Vec<&str> { ranked.iter().map(|s| s.candidate.id.as_str()).collect() }

#[test]
fn related_company_outranks_unrelated_one() {
    let rec = HybridRecommender::new(MatchConfig::default()).expect("recommender");
    let a = alumnus("Teknik Komputer", "javascript react nodejs");
    let candidates = vec![
        company("tech", "Teknik Informatika", "javascript react"),
        company("finance", "Akuntansi", "excel pembukuan"),
    ];

    let all = rec.score(&a, &candidates).expect("score");
    assert_eq!(ids(&all), vec!["tech", "finance"], "score keeps input order");
    assert!(all[0].similarity > all[1].similarity);
    assert!(all[0].field_similarity > 0.0);
    assert!(all[0].skills_similarity > 0.0);
    assert!(all[1].skills_similarity.abs() < 1e-12);
    assert!(all[1].field_similarity.abs() < 1e-12);

    let ranked = rec.rank(&a, &candidates).expect("rank");
    assert_eq!(ids(&ranked), vec!["tech"], "zero scores are filtered out");
    assert!((0.0..=1.0).contains(&ranked[0].similarity));
}

#[test]
fn equal_scores_keep_input_order() {
    let ranked = select_top(vec![scored("C", 0.3), scored("A", 0.9), scored("B", 0.9)], 0.0, 5);
    assert_eq!(ids(&ranked), vec!["A", "B", "C"]);
}

#[test]
fn identical_postings_tie_in_input_order() {
    let rec = HybridRecommender::new(MatchConfig::default()).expect("recommender");
    let a = alumnus("", "javascript react");
    let candidates = vec![
        company("C", "", "react excel"),
        company("A", "", "javascript react"),
        company("B", "", "javascript react"),
    ];
    let ranked = rec.rank(&a, &candidates).expect("rank");
    assert_eq!(ids(&ranked), vec!["A", "B", "C"]);
    assert_eq!(ranked[0].similarity, ranked[1].similarity);
    assert!(ranked[1].similarity > ranked[2].similarity);
}

#[test]
fn results_are_capped_and_sorted_descending() {
    let rec = HybridRecommender::new(MatchConfig::default()).expect("recommender");
    let a = alumnus("Informatika", "rust");
    let candidates: Vec<Candidate> = (0..10)
        .map(|i| {
            let filler: Vec<String> = (0..i).map(|j| format!("extra{j}")).collect();
            company(&format!("c{i}"), "", &format!("rust {}", filler.join(" ")))
        })
        .collect();

    let all = rec.score(&a, &candidates).expect("score");
    assert!(all.iter().all(|s| s.similarity > 0.0), "every posting shares 'rust'");

    let ranked = rec.rank(&a, &candidates).expect("rank");
    assert_eq!(ranked.len(), 5);
    for pair in ranked.windows(2) { assert!(pair[0].similarity >= pair[1].similarity); }
    assert_eq!(ranked[0].candidate.id, "c0", "the posting with only 'rust' matches best");
}

#[test]
fn threshold_drops_scores_at_or_below_it() {
    let ranked = select_top(vec![scored("low", 0.05), scored("edge", 0.1), scored("high", 0.2)], 0.1, 5);
    assert_eq!(ids(&ranked), vec!["high"]);
}

#[test]
fn nan_scores_are_treated_as_zero() {
    let ranked = select_top(vec![scored("nan", f64::NAN), scored("ok", 0.4)], 0.0, 5);
    assert_eq!(ids(&ranked), vec!["ok"]);
    let kept = select_top(vec![scored("nan", f64::NAN)], 0.0, 5);
    assert!(kept.is_empty());
}

#[test]
fn empty_inputs_give_empty_results() {
    let rec = HybridRecommender::new(MatchConfig::default()).expect("recommender");
    assert!(rec.rank(&alumnus("Teknik", "rust"), &[]).expect("rank").is_empty());

    let candidates = vec![company("a", "Teknik", "rust"), company("b", "", "")];
    let ranked = rec.rank(&AlumnusProfile::default(), &candidates).expect("rank");
    assert!(ranked.is_empty(), "a profile without text matches nothing");
}

#[test]
fn weights_select_which_field_counts() {
    let config = MatchConfig { field_weight: 1.0, skills_weight: 0.0, ..MatchConfig::default() };
    let rec = HybridRecommender::new(config).expect("recommender");
    let a = alumnus("Teknik Komputer", "javascript");
    let candidates = vec![company("skills-only", "Hukum", "javascript"), company("field-only", "Teknik Komputer", "excel")];
    let ranked = rec.rank(&a, &candidates).expect("rank");
    assert_eq!(ids(&ranked), vec!["field-only"]);
    assert!((ranked[0].similarity - ranked[0].field_similarity).abs() < 1e-12);
}

#[test]
fn strict_preset_ignores_short_tokens() {
    let rec = HybridRecommender::new(MatchConfig::strict()).expect("recommender");
    let a = alumnus("IT", "ui ux go");
    let candidates = vec![company("short", "IT", "ui ux go")];
    assert!(rec.rank(&a, &candidates).expect("rank").is_empty());

    let loose = HybridRecommender::new(MatchConfig::default()).expect("recommender");
    assert_eq!(loose.rank(&a, &candidates).expect("rank").len(), 1);
}

#[test]
fn invalid_config_is_rejected() {
    let config = MatchConfig { top_n: 0, ..MatchConfig::default() };
    assert!(matches!(HybridRecommender::new(config), Err(Error::InvalidConfig(_))));
}

#[test]
fn ranking_is_deterministic() {
    let rec = HybridRecommender::new(MatchConfig::default()).expect("recommender");
    let a = alumnus("Sistem Informasi", "sql python data analysis");
    let candidates = vec![
        company("a", "Sistem Informasi", "sql"),
        company("b", "Statistika", "python data"),
        company("c", "Informatika", "java spring"),
    ];
    let first = rec.rank(&a, &candidates).expect("rank");
    for _ in 0..3 { assert_eq!(rec.rank(&a, &candidates).expect("rank"), first); }
}

#[test]
fn combined_strategy_uses_one_pass() {
    let fields = Arc::new(Mutex::new(Vec::new()));
    let rec = HybridRecommender::new(MatchConfig::combined())
        .expect("recommender")
        .with_observer(Box::new(Recording { fields: fields.clone(), ranked: Arc::default() }));
    let a = alumnus("Teknik Komputer", "javascript react");
    let candidates = vec![company("tech", "Teknik Informatika", "javascript"), company("finance", "Akuntansi", "excel")];
    let ranked = rec.rank(&a, &candidates).expect("rank");
    assert_eq!(ids(&ranked), vec!["tech"]);
    assert_eq!(ranked[0].field_similarity, ranked[0].similarity);
    assert_eq!(*fields.lock().expect("lock"), vec![MatchField::Combined]);
}

struct Recording {
    fields: Arc<Mutex<Vec<MatchField>>>,
    ranked: Arc<Mutex<Vec<usize>>>,
}

impl RankObserver for Recording {
    fn on_vectorized(&self, field: MatchField, vectors: &VectorSet) {
        assert_eq!(vectors.query_vector.len(), vectors.vocab.len());
        self.fields.lock().expect("lock").push(field);
    }
    fn on_ranked(&self, ranked: &[ScoredCandidate]) { self.ranked.lock().expect("lock").push(ranked.len()); }
}

#[test]
fn observer_sees_both_field_runs() {
    let fields = Arc::new(Mutex::new(Vec::new()));
    let ranked_lens = Arc::new(Mutex::new(Vec::new()));
    let rec = HybridRecommender::new(MatchConfig::default())
        .expect("recommender")
        .with_observer(Box::new(Recording { fields: fields.clone(), ranked: ranked_lens.clone() }));
    let ranked = rec.recommend(&alumnus("Teknik", "rust"), &[company("a", "Teknik", "rust")]).expect("recommend");
    assert_eq!(*fields.lock().expect("lock"), vec![MatchField::FieldOfStudy, MatchField::Skills]);
    assert_eq!(*ranked_lens.lock().expect("lock"), vec![ranked.len()]);
}

struct ShortVectorizer;

impl TextVectorizer for ShortVectorizer {
    fn vectorize(&self, _query: &str, _documents: &[String]) -> VectorSet {
        VectorSet { query_vector: vec![1.0], doc_vectors: vec![vec![1.0]], vocab: vec!["x".to_string()] }
    }
}

#[test]
fn vector_count_mismatch_fails_loudly() {
    let rec = HybridRecommender::with_vectorizer(ShortVectorizer, MatchConfig::default())
        .expect("recommender")
        .with_observer(Box::new(NoopObserver));
    let candidates = vec![company("a", "x", "x"), company("b", "x", "x")];
    let err = rec.rank(&alumnus("x", "x"), &candidates).expect_err("mismatch");
    assert!(matches!(err, Error::LengthMismatch { expected: 2, actual: 1 }), "got {err:?}");
}

#[test]
fn scored_candidate_serializes_flat() {
    let rec = HybridRecommender::new(MatchConfig::default()).expect("recommender");
    let ranked = rec.rank(&alumnus("Teknik", "rust"), &[company("a", "Teknik", "rust")]).expect("rank");
    let json = serde_json::to_value(&ranked[0]).expect("json");
    assert_eq!(json["id"], "a");
    assert_eq!(json["requiredSkills"], "rust");
    assert!(json["similarity"].as_f64().expect("similarity") > 0.99);
    assert!((ranked[0].percent() - ranked[0].similarity * 100.0).abs() < 1e-12);
}

#[test]
fn weights_above_one_keep_scores_ordered() {
    let config = MatchConfig { field_weight: 1.0, skills_weight: 1.0, ..MatchConfig::default() };
    let rec = HybridRecommender::new(config).expect("recommender");
    let a = alumnus("Teknik Komputer", "javascript react");
    let candidates = vec![
        company("weaker", "Teknik Komputer", "javascript excel"),
        company("exact", "Teknik Komputer", "javascript react"),
    ];
    let ranked = rec.rank(&a, &candidates).expect("rank");
    assert_eq!(ids(&ranked), vec!["exact", "weaker"]);
    assert!(ranked[0].similarity > ranked[1].similarity, "scores must not saturate into a tie");
    assert!(ranked.iter().all(|s| (0.0..=1.0).contains(&s.similarity)));
    let expected = (ranked[1].field_similarity + ranked[1].skills_similarity) / 2.0;
    assert!((ranked[1].similarity - expected).abs() < 1e-12);
}
