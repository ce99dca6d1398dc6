// src/core/refs.rs
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::models::{Attachment, Document};

static IMAGE_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*\]\(([^)]+)\)").expect("image reference pattern"));
static LINK_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]*\]\(([^)]+)\)").expect("link reference pattern"));
static HTML_IMG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<img[^>]+src=["']([^"']+)["']"#).expect("html img pattern"));
static WIKI_EMBED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[\[([^\]]+)\]\]").expect("wiki embed pattern"));

/// Reduces a reference target to its filename component: path segments and
/// any `?query` suffix are discarded.
fn filename_component(target: &str) -> String {
    let trimmed = target.trim();
    let without_query = trimmed.split('?').next().unwrap_or_default();
    without_query
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_owned()
}

/// Attachment basenames referenced by a document through any of the four
/// recognized syntaxes: `![alt](target)`, `[text](target)` (local targets
/// only), `<img src="target">`, and `![[target]]` / `![[target|alias]]`.
///
/// Matching is by filename only; two attachments sharing a basename in
/// different folders are indistinguishable here.
#[must_use]
pub fn extract_attachment_refs(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut refs = Vec::new();
    let mut push = |name: String| {
        if !name.is_empty() && seen.insert(name.clone()) {
            refs.push(name);
        }
    };

    for cap in IMAGE_REF.captures_iter(raw) {
        push(filename_component(&cap[1]));
    }
    // `regex` has no lookbehind, so image syntax is excluded by checking
    // the byte before the match.
    for cap in LINK_REF.captures_iter(raw) {
        let Some(whole) = cap.get(0) else { continue };
        if whole.start() > 0 && raw.as_bytes()[whole.start() - 1] == b'!' {
            continue;
        }
        let target = cap[1].trim();
        if target.starts_with("http") || target.starts_with('#') {
            continue;
        }
        push(filename_component(target));
    }
    for cap in HTML_IMG.captures_iter(raw) {
        push(filename_component(&cap[1]));
    }
    for cap in WIKI_EMBED.captures_iter(raw) {
        let target = cap[1].split('|').next().unwrap_or_default();
        push(filename_component(target));
    }
    refs
}

/// The union of every document's reference set, keyed by basename.
/// Rebuilt on each run; never persisted.
#[derive(Debug, Default)]
pub struct ReferenceSet {
    names: HashSet<String>,
}

impl ReferenceSet {
    #[must_use]
    pub fn collect(documents: &[Document]) -> Self {
        let mut names = HashSet::new();
        for doc in documents {
            for name in &doc.attachment_refs {
                names.insert(name.clone());
            }
        }
        Self { names }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// An attachment is orphaned iff no document references its basename.
#[must_use]
pub fn is_orphan(attachment: &Attachment, refs: &ReferenceSet) -> bool {
    !refs.contains(&attachment.name)
}
