// src/core/text.rs
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::core::parser::split_front_matter;

static FENCED_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```.*?```").expect("fenced code pattern"));
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`[^`]+`").expect("inline code pattern"));
static MD_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("markdown link pattern"));
static HEADING_MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#+\s+").expect("heading marker pattern"));
static HASHTAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([0-9A-Za-z_-]+)").expect("hashtag pattern"));
static WIKI_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("wiki link pattern"));
static TASK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[\s-]*\[([ x])\]\s+(.+)$").expect("task pattern"));

/// Removes fenced code blocks, then inline code spans. Unpaired fences
/// stay in place.
#[must_use]
pub fn strip_code(text: &str) -> String {
    let without_blocks = FENCED_CODE.replace_all(text, "");
    INLINE_CODE.replace_all(&without_blocks, "").into_owned()
}

/// Counts prose words in a mixed CJK/Latin document.
///
/// The header is split off first, then code is removed, markdown links are
/// reduced to their labels, and heading markers are dropped. Each CJK
/// ideograph counts as one word; each maximal run of ASCII letters counts
/// as one word. Digits, punctuation and whitespace are not counted.
/// Code removal runs before link-unwrapping so link-like text inside code
/// never contributes.
#[must_use]
pub fn count_words(raw: &str) -> usize {
    let (_, body) = split_front_matter(raw);
    let stripped = strip_code(body);
    let without_links = MD_LINK.replace_all(&stripped, "$1");
    let without_headings = HEADING_MARK.replace_all(&without_links, "");

    let mut count = 0;
    let mut in_latin_run = false;
    for ch in without_headings.chars() {
        if ('\u{4e00}'..='\u{9fa5}').contains(&ch) {
            count += 1;
            in_latin_run = false;
        } else if ch.is_ascii_alphabetic() {
            if !in_latin_run {
                count += 1;
            }
            in_latin_run = true;
        } else {
            in_latin_run = false;
        }
    }
    count
}

/// Union of header-declared tags and inline `#hashtag` tokens,
/// deduplicated in first-seen order (header tags first).
///
/// With `include_code` the whole raw text is scanned, header block and
/// code included; without it the scan runs over the code-stripped body,
/// the same text the word counter sees.
#[must_use]
pub fn extract_tags(raw: &str, include_code: bool) -> Vec<String> {
    let (front, body) = split_front_matter(raw);
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    if let Some(declared) = &front.tags {
        for tag in declared {
            if seen.insert(tag.clone()) {
                tags.push(tag.clone());
            }
        }
    }
    let scanned: String = if include_code {
        raw.to_owned()
    } else {
        strip_code(body)
    };
    for cap in HASHTAG.captures_iter(&scanned) {
        let tag = cap[1].to_owned();
        if seen.insert(tag.clone()) {
            tags.push(tag);
        }
    }
    tags
}

/// Wiki-link targets from `[[target]]` / `[[target|alias]]` tokens,
/// alias stripped, deduplicated in first-seen order.
#[must_use]
pub fn extract_links(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for cap in WIKI_LINK.captures_iter(raw) {
        let target = cap[1].split('|').next().unwrap_or_default().to_owned();
        if seen.insert(target.clone()) {
            links.push(target);
        }
    }
    links
}

/// Counts `[ ]` / `[x]` checkbox items in the body as `(open, done)`.
#[must_use]
pub fn count_tasks(raw: &str) -> (usize, usize) {
    let (_, body) = split_front_matter(raw);
    let mut open = 0;
    let mut done = 0;
    for cap in TASK.captures_iter(body) {
        if &cap[1] == "x" {
            done += 1;
        } else {
            open += 1;
        }
    }
    (open, done)
}
