//! Configuration loader, matching tunables and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars
//! (`APP_MATCHING__TOP_N=3` overrides `matching.top_n`).

use alumatch_text::NormalizeMode;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.matching()?;
        Ok(config)
    }

    /// Builds a config from an inline TOML document, without env overrides.
    pub fn from_toml_str(toml: &str) -> anyhow::Result<Self> {
        let config = Self { figment: Figment::new().merge(Toml::string(toml)) };
        config.matching()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// The `[matching]` table layered over `MatchConfig::default()`, validated.
    pub fn matching(&self) -> anyhow::Result<MatchConfig> {
        let matching: MatchConfig = Figment::from(Serialized::defaults(MatchConfig::default()))
            .merge(self.figment.focus("matching"))
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to read 'matching': {}", e))?;
        matching.validate()?;
        Ok(matching)
    }
}

/// How the two text fields are turned into one score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Field of study and skills are vectorized separately and blended by weight.
    #[default]
    Split,
    /// Both fields are concatenated and compared in a single pass.
    Combined,
}

/// Tunables of a ranking run.
///
/// Defaults: weights 0.5/0.5, keep scores `> 0.0`, top 5, tokens of any
/// non-zero length, loose normalization. `strict()` pins the stricter variant:
/// weights 0.4/0.6, keep scores `> 0.1`, tokens longer than two characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub field_weight: f64,
    pub skills_weight: f64,
    pub threshold: f64,
    pub top_n: usize,
    pub min_token_len: usize,
    pub normalize: NormalizeMode,
    pub strategy: MatchStrategy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            field_weight: 0.5,
            skills_weight: 0.5,
            threshold: 0.0,
            top_n: 5,
            min_token_len: 1,
            normalize: NormalizeMode::Loose,
            strategy: MatchStrategy::Split,
        }
    }
}

impl MatchConfig {
    pub fn strict() -> Self {
        Self {
            field_weight: 0.4,
            skills_weight: 0.6,
            threshold: 0.1,
            min_token_len: 3,
            normalize: NormalizeMode::Strict,
            ..Self::default()
        }
    }

    /// Single-pass matching over concatenated fields, capped at three results.
    pub fn combined() -> Self {
        Self { top_n: 3, strategy: MatchStrategy::Combined, ..Self::default() }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, w) in [("field_weight", self.field_weight), ("skills_weight", self.skills_weight)] {
            if !w.is_finite() || w < 0.0 {
                return Err(Error::InvalidConfig(format!("{name} must be a non-negative number, got {w}")));
            }
        }
        if self.field_weight + self.skills_weight <= 0.0 {
            return Err(Error::InvalidConfig("field_weight and skills_weight cannot both be zero".to_string()));
        }
        if !self.threshold.is_finite() || !(0.0..1.0).contains(&self.threshold) {
            return Err(Error::InvalidConfig(format!("threshold must be within [0, 1), got {}", self.threshold)));
        }
        if self.top_n == 0 {
            return Err(Error::InvalidConfig("top_n must be at least 1".to_string()));
        }
        if self.min_token_len == 0 {
            return Err(Error::InvalidConfig("min_token_len must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
