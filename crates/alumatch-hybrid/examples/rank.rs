use alumatch_core::config::MatchConfig;
use alumatch_core::types::{AlumnusProfile, Candidate};
use alumatch_hybrid::HybridRecommender;

fn main() -> anyhow::Result<()> {
    let alumnus = AlumnusProfile { name: "Rina".into(), field_of_study: "Teknik Komputer".into(), skills: "javascript react nodejs".into(), ..Default::default() };
    let candidates = vec![
        Candidate { id: "tech".into(), name: "PT Digital".into(), qualification: "Teknik Informatika".into(), required_skills: "javascript react".into(), ..Default::default() },
        Candidate { id: "finance".into(), name: "KAP Sejahtera".into(), qualification: "Akuntansi".into(), required_skills: "excel pembukuan".into(), ..Default::default() },
        Candidate { id: "data".into(), name: "CV Data Prima".into(), qualification: "Sistem Informasi".into(), required_skills: "sql python nodejs".into(), ..Default::default() },
    ];
    for (label, config) in [("default", MatchConfig::default()), ("strict", MatchConfig::strict()), ("combined", MatchConfig::combined())] {
        let ranked = HybridRecommender::new(config)?.rank(&alumnus, &candidates)?;
        println!("[{}]", label);
        for s in &ranked { println!("  {:5.1}%  {}", s.percent(), s.candidate.name); }
    }
    Ok(())
}
