use std::env;
use std::path::PathBuf;

use alumatch_core::config::{resolve_with_base, Config, MatchConfig, MatchStrategy};
use alumatch_core::data_processor::RecordLoader;
use alumatch_core::traits::TextVectorizer;
use alumatch_hybrid::HybridRecommender;
use alumatch_text::Normalizer;
use alumatch_vector::TfIdfVectorizer;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: alumatch <recommend|vectorize> [args...]
  recommend [alumnus.json] [candidates.json|dir] [--strict] [--combined] [--json]
  vectorize <query> <document>...";

fn parse_args() -> (String, Vec<String>, Vec<String>) {
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() { eprintln!("{}", USAGE); std::process::exit(1); }
    let cmd = args.remove(0);
    let (flags, positional): (Vec<String>, Vec<String>) = args.into_iter().partition(|a| a.starts_with("--"));
    (cmd, positional, flags)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn data_path(config: &Config, arg: Option<&String>, key: &str) -> anyhow::Result<PathBuf> {
    if let Some(p) = arg { return Ok(PathBuf::from(p)); }
    let configured: String = config.get(key).map_err(|e| anyhow::anyhow!("{} (pass the path explicitly)", e))?;
    Ok(resolve_with_base(&env::current_dir()?, configured))
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let (cmd, args, flags) = parse_args();
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let has_flag = |f: &str| flags.iter().any(|a| a == f);
    match cmd.as_str() {
        "recommend" => {
            let mut matching = if has_flag("--strict") { MatchConfig::strict() } else { config.matching()? };
            if has_flag("--combined") { matching.strategy = MatchStrategy::Combined; }
            let alumnus_path = data_path(&config, args.first(), "data.alumni_path")?;
            let candidates_path = data_path(&config, args.get(1), "data.candidates_path")?;

            let loader = RecordLoader::new();
            let alumnus = loader.load_alumnus(&alumnus_path)?;
            let candidates = loader.load_candidates(&candidates_path)?;
            if candidates.is_empty() { println!("No company data available yet."); return Ok(()); }

            let recommender = HybridRecommender::new(matching)?;
            let ranked = recommender.rank(&alumnus, &candidates)?;
            info!(alumnus = %alumnus.id, candidates = candidates.len(), results = ranked.len(), "recommendation complete");

            if has_flag("--json") {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
                return Ok(());
            }
            let who = if alumnus.name.is_empty() { &alumnus.id } else { &alumnus.name };
            println!("Recommendations for {}", who);
            if ranked.is_empty() { println!("No matching companies found."); return Ok(()); }
            for (i, s) in ranked.iter().enumerate() {
                println!("  {}. {:5.1}%  {}  ({})", i + 1, s.percent(), s.candidate.name, s.candidate.location);
                println!("     field={:.4} skills={:.4} id={}", s.field_similarity, s.skills_similarity, s.candidate.id);
            }
        }
        "vectorize" => {
            let Some((query, docs)) = args.split_first() else { eprintln!("{}", USAGE); std::process::exit(1) };
            let matching = config.matching()?;
            let normalizer = Normalizer::new(matching.normalize);
            let query = normalizer.normalize(Some(query));
            let docs: Vec<String> = docs.iter().map(|d| normalizer.normalize(Some(d))).collect();
            let vectors = TfIdfVectorizer::new(matching.min_token_len).vectorize(&query, &docs);
            if vectors.is_empty() { println!("No usable tokens."); return Ok(()); }
            println!("vocab: {}", vectors.vocab.join(" "));
            println!("query: {}", format_vector(&vectors.query_vector));
            for (i, v) in vectors.doc_vectors.iter().enumerate() { println!("doc {}: {}", i, format_vector(v)); }
        }
        _ => { eprintln!("Unknown command: {}\n{}", cmd, USAGE); std::process::exit(1); }
    }
    Ok(())
}

fn format_vector(v: &[f64]) -> String { v.iter().map(|x| format!("{:.4}", x)).collect::<Vec<_>>().join(" ") }
