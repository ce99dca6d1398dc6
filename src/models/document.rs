// src/models/document.rs
use std::path::PathBuf;

/// A parsed markdown document. Every derived field is a pure function of
/// the file's bytes and its path; records are rebuilt from scratch on
/// every run.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub rel_path: String,
    pub title: String,
    pub words: usize,
    pub size: u64,
    /// Deduplicated, first-seen order (header tags before inline hashtags).
    pub tags: Vec<String>,
    /// Wiki-link targets, alias stripped, deduplicated, first-seen order.
    pub links: Vec<String>,
    /// Basenames of attachments referenced through any recognized syntax.
    pub attachment_refs: Vec<String>,
    pub tasks_open: usize,
    pub tasks_done: usize,
    /// Classification folder (`00_Inbox`, `01_Projects`, ...), if any.
    pub folder: Option<String>,
    /// Project directory under the projects root, if any.
    pub project: Option<String>,
}

/// A file that could not be read; kept in the batch so reports can surface
/// the omission instead of silently shrinking.
#[derive(Debug, Clone)]
pub struct Skipped {
    pub path: PathBuf,
    pub reason: String,
}
