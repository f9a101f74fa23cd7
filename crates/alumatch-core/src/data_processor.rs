//! Loads alumnus and company records from JSON and converts them into typed
//! domain structs.
//!
//! Source documents are loosely typed: field names come in both the Indonesian
//! spelling used by the portal (`jurusan`, `skillDibutuhkan`, ...) and English
//! camelCase, and values may be missing, `null` or non-string. Every text field
//! is defaulted to an empty string here so the engine never sees an absent value.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::{AlumnusProfile, Candidate};

const ID: &[&str] = &["id", "uid"];
const NAME: &[&str] = &["name", "nama"];

const FIELD_OF_STUDY: &[&str] = &["fieldOfStudy", "field_of_study", "jurusan"];
const SKILLS: &[&str] = &["skills"];
const GRADUATION_YEAR: &[&str] = &["graduationYear", "graduation_year", "tahunLulus"];
const OCCUPATION: &[&str] = &["occupation", "pekerjaan"];
const ADDRESS: &[&str] = &["address", "alamat"];
const IMAGE_URL: &[&str] = &["imageUrl", "image_url"];

const INDUSTRY: &[&str] = &["industry", "bidangIndustri"];
const QUALIFICATION: &[&str] = &["qualification", "kualifikasi"];
const REQUIRED_SKILLS: &[&str] = &["requiredSkills", "required_skills", "skillDibutuhkan"];
const LOCATION: &[&str] = &["location", "lokasi"];
const PHOTO_URL: &[&str] = &["photoUrl", "photo_url", "fotoUrl"];

#[derive(Debug, Default)]
pub struct RecordLoader;

impl RecordLoader {
    pub fn new() -> Self { Self }

    /// Reads a single alumnus profile from a JSON object file.
    pub fn load_alumnus(&self, path: &Path) -> Result<AlumnusProfile> {
        let value = self.read_json(path)?;
        let obj = value
            .as_object()
            .ok_or_else(|| Error::InvalidRecord(format!("{}: expected a JSON object", path.display())))?;
        let mut alumnus = alumnus_from_map(obj);
        if alumnus.id.is_empty() { alumnus.id = file_stem(path); }
        debug!(id = %alumnus.id, "loaded alumnus profile");
        Ok(alumnus)
    }

    /// Reads candidates from a JSON array file, a single-object file, or a
    /// directory of such files (walked recursively, sorted by path).
    pub fn load_candidates(&self, path: &Path) -> Result<Vec<Candidate>> {
        if !path.exists() { return Err(Error::NotFound(path.display().to_string())); }
        let files = if path.is_dir() { self.list_json_files(path) } else { vec![path.to_path_buf()] };
        let mut candidates = Vec::new();
        for file in &files {
            let value = self.read_json(file)?;
            candidates.extend(candidates_from_value(&value, &file_stem(file), file)?);
        }
        info!("Loaded {} candidates from {} file(s) under {}", candidates.len(), files.len(), path.display());
        Ok(candidates)
    }

    fn read_json(&self, path: &Path) -> Result<Value> {
        if !path.exists() { return Err(Error::NotFound(path.display().to_string())); }
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => String::from_utf8_lossy(&fs::read(path)?).to_string(),
        };
        Ok(serde_json::from_str(&content)?)
    }

    fn list_json_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut json_files = Vec::new();
        for entry in walkdir::WalkDir::new(root).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()) {
            let path = entry.path(); if path.extension().and_then(|s| s.to_str()) == Some("json") { json_files.push(path.to_path_buf()); }
        }
        json_files.sort(); json_files
    }
}

fn candidates_from_value(value: &Value, stem: &str, file: &Path) -> Result<Vec<Candidate>> {
    match value {
        Value::Object(obj) => {
            let mut c = candidate_from_map(obj);
            if c.id.is_empty() { c.id = stem.to_string(); }
            Ok(vec![c])
        }
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let obj = item.as_object().ok_or_else(|| {
                    Error::InvalidRecord(format!("{}: entry {} is not a JSON object", file.display(), i))
                })?;
                let mut c = candidate_from_map(obj);
                if c.id.is_empty() { c.id = format!("{}:{}", stem, i); }
                Ok(c)
            })
            .collect(),
        _ => Err(Error::InvalidRecord(format!("{}: expected a JSON object or array", file.display()))),
    }
}

pub fn alumnus_from_map(obj: &Map<String, Value>) -> AlumnusProfile {
    AlumnusProfile {
        id: text_field(obj, ID),
        name: text_field(obj, NAME),
        field_of_study: text_field(obj, FIELD_OF_STUDY),
        skills: text_field(obj, SKILLS),
        graduation_year: text_field(obj, GRADUATION_YEAR),
        occupation: text_field(obj, OCCUPATION),
        address: text_field(obj, ADDRESS),
        image_url: text_field(obj, IMAGE_URL),
    }
}

pub fn candidate_from_map(obj: &Map<String, Value>) -> Candidate {
    Candidate {
        id: text_field(obj, ID),
        name: text_field(obj, NAME),
        industry: text_field(obj, INDUSTRY),
        qualification: text_field(obj, QUALIFICATION),
        required_skills: text_field(obj, REQUIRED_SKILLS),
        location: text_field(obj, LOCATION),
        photo_url: text_field(obj, PHOTO_URL),
    }
}

/// First present alias wins. Strings pass through, numbers and booleans are
/// rendered, arrays of scalars are joined with spaces, anything else is empty.
fn text_field(obj: &Map<String, Value>, aliases: &[&str]) -> String {
    aliases.iter().find_map(|k| obj.get(*k)).map(value_to_text).unwrap_or_default()
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        Value::Null | Value::Object(_) => String::new(),
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default()
}
