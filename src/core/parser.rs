// src/core/parser.rs
use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml_ng::Mapping;
use std::path::Path;

use crate::models::FrontMatter;

const DELIMITER: &str = "---";

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(#+)\s+(.+)$").expect("heading pattern"));

/// Locates the raw header block. Returns `(yaml, body)` only when the text
/// opens with a delimiter line and a matching closing line exists.
fn split_raw(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }
    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            let header = &content[header_start..offset];
            let body = &content[offset + line.len()..];
            return Some((header, body));
        }
        offset += line.len();
    }
    None
}

/// Splits a document into its header mapping and body.
///
/// Total over all inputs: a missing or malformed header degrades to
/// `(empty header, original text)` so one broken note never aborts a
/// workspace-wide report.
#[must_use]
pub fn split_front_matter(content: &str) -> (FrontMatter, &str) {
    let Some((header, body)) = split_raw(content) else {
        return (FrontMatter::default(), content);
    };
    if header.trim().is_empty() {
        return (FrontMatter::default(), body);
    }
    match serde_yaml_ng::from_str(header) {
        Ok(front) => (front, body),
        Err(_) => (FrontMatter::default(), content),
    }
}

/// All headings of a body as `(level, text)` pairs.
#[must_use]
pub fn extract_headings(body: &str) -> Vec<(usize, String)> {
    HEADING
        .captures_iter(body)
        .map(|cap| (cap[1].len(), cap[2].trim().to_owned()))
        .collect()
}

/// Header `title`, else the first level-1 heading, else the file stem.
/// Never empty.
#[must_use]
pub fn derive_title(front: &FrontMatter, body: &str, path: &Path) -> String {
    if let Some(title) = front.title.as_deref() {
        if !title.is_empty() {
            return title.to_owned();
        }
    }
    if let Some((_, text)) = extract_headings(body)
        .into_iter()
        .find(|&(level, _)| level == 1)
    {
        return text;
    }
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Merges `updates` into the document's header mapping and re-serializes
/// the whole document. The body is carried through untouched; writing the
/// result anywhere is the caller's business.
///
/// # Errors
///
/// Returns an error only if the merged mapping cannot be serialized as
/// YAML.
pub fn update_front_matter(content: &str, updates: &Mapping) -> Result<String> {
    let (mut mapping, body) = match split_raw(content) {
        Some((header, body)) => {
            let parsed: Mapping = if header.trim().is_empty() {
                Mapping::new()
            } else {
                serde_yaml_ng::from_str(header).unwrap_or_default()
            };
            (parsed, body)
        }
        None => (Mapping::new(), content),
    };
    for (key, value) in updates {
        mapping.insert(key.clone(), value.clone());
    }
    let header = serde_yaml_ng::to_string(&mapping)?;
    Ok(format!("---\n{header}---\n{body}"))
}
