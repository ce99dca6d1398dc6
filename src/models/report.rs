// src/models/report.rs
use crate::models::Category;
use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct Totals {
    pub files: usize,
    pub words: u64,
    pub average_words: u64,
    pub size: u64,
}

#[derive(Debug, Serialize)]
pub struct FolderBucket {
    pub folder: String,
    pub files: usize,
    pub words: u64,
    pub size: u64,
}

#[derive(Debug, Serialize)]
pub struct ProjectBucket {
    pub project: String,
    pub files: usize,
    pub words: u64,
}

#[derive(Debug, Serialize)]
pub struct TagBucket {
    pub tag: String,
    pub files: usize,
    pub words: u64,
}

#[derive(Debug, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct DocumentSummary {
    pub path: String,
    pub title: String,
    pub words: usize,
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GoalBucket {
    pub label: &'static str,
    pub threshold: usize,
    pub count: usize,
}

#[derive(Debug, Default, Serialize)]
pub struct LinkSummary {
    /// Distinct wiki-link targets across the workspace.
    pub targets: usize,
    /// Targets per document.
    pub density: f64,
}

#[derive(Debug, Default, Serialize)]
pub struct TaskSummary {
    pub open: usize,
    pub done: usize,
}

#[derive(Debug, Serialize)]
pub struct WordReport {
    pub totals: Totals,
    pub by_folder: Vec<FolderBucket>,
    pub by_project: Vec<ProjectBucket>,
    pub by_tag: Vec<TagBucket>,
    pub top_documents: Vec<DocumentSummary>,
    pub goals: Vec<GoalBucket>,
    pub skipped: usize,
}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub totals: Totals,
    pub by_folder: Vec<FolderBucket>,
    pub top_tags: Vec<TagCount>,
    pub longest: Vec<DocumentSummary>,
    pub links: LinkSummary,
    pub tasks: TaskSummary,
    pub skipped: usize,
}

#[derive(Debug, Serialize)]
pub struct OrphanEntry {
    pub path: String,
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Serialize)]
pub struct OrphanReport {
    pub attachments: usize,
    pub documents: usize,
    /// Distinct basenames referenced by at least one document.
    pub referenced: usize,
    pub orphans: Vec<OrphanEntry>,
    pub reclaimable: u64,
}

#[derive(Debug, Serialize)]
pub struct CategoryBucket {
    pub category: Category,
    pub count: usize,
    pub size: u64,
}

#[derive(Debug, Serialize)]
pub struct MisplacedEntry {
    pub path: String,
    pub category: Category,
    pub expected: String,
}

#[derive(Debug, Serialize)]
pub struct AttachmentReport {
    pub total: usize,
    pub total_size: u64,
    pub by_category: Vec<CategoryBucket>,
    pub misplaced: Vec<MisplacedEntry>,
    pub orphaned: Vec<OrphanEntry>,
}
