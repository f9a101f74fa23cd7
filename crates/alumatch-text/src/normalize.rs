use serde::{Deserialize, Serialize};

use crate::tokenize::is_word_char;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizeMode {
    /// Every run of non-word characters becomes one space: `node.js` -> `node js`.
    #[default]
    Loose,
    /// Punctuation is dropped outright, then whitespace collapsed: `node.js` -> `nodejs`.
    Strict,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    mode: NormalizeMode,
}

impl Normalizer {
    pub fn new(mode: NormalizeMode) -> Self { Self { mode } }

    pub fn mode(&self) -> NormalizeMode { self.mode }

    pub fn normalize(&self, text: Option<&str>) -> String {
        let Some(text) = text else { return String::new() };
        let lower = text.to_lowercase();
        let mut out = String::with_capacity(lower.len());
        let mut pending_space = false;
        for c in lower.chars() {
            if is_word_char(c) {
                if pending_space && !out.is_empty() { out.push(' '); }
                pending_space = false;
                out.push(c);
            } else if c.is_whitespace() || self.mode == NormalizeMode::Loose {
                pending_space = true;
            }
        }
        out
    }
}

/// Loose normalization of an optional text field.
pub fn normalize(text: Option<&str>) -> String { Normalizer::default().normalize(text) }
