// src/core/scanner.rs
use anyhow::Result;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::core::classify::classify;
use crate::core::ignore::{load_ignore_patterns, Patterns};
use crate::core::parser::{derive_title, split_front_matter};
use crate::core::refs::extract_attachment_refs;
use crate::core::text::{count_tasks, count_words, extract_links, extract_tags};
use crate::models::{Attachment, Document, Skipped};
use crate::utils::{is_hidden, main_folder, relative_to};

pub const INBOX_DIR: &str = "00_Inbox";
pub const PROJECTS_DIR: &str = "01_Projects";
pub const AREAS_DIR: &str = "02_Areas";
pub const RESOURCES_DIR: &str = "03_Resources";
pub const ARCHIVE_DIR: &str = "04_Archive";
pub const ATTACHMENTS_DIR: &str = "05_Attachments";
pub const META_DIR: &str = "06_Meta";

const DOCUMENT_EXTENSION: &str = "md";

/// One scan of the workspace tree: every record is rebuilt from the
/// current filesystem state and discarded with the run.
#[derive(Debug, Default)]
pub struct Workspace {
    pub root: PathBuf,
    pub documents: Vec<Document>,
    pub skipped: Vec<Skipped>,
    pub attachments: Vec<Attachment>,
}

impl Workspace {
    #[must_use]
    pub fn attachments_root(&self) -> PathBuf {
        self.root.join(ATTACHMENTS_DIR)
    }
}

/// Walks the workspace and parses every markdown document and attachment.
///
/// A nonexistent root contributes zero records rather than failing, and a
/// file that cannot be read becomes a [`Skipped`] marker while the scan
/// continues.
///
/// # Errors
///
/// This function may return an error if:
/// * Directory traversal fails below an existing root
/// * The ignore patterns file cannot be read or parsed
pub fn scan_workspace(dir: &Path, exclude_dirs: &[&str], config: &Config) -> Result<Workspace> {
    let root = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()?.join(dir)
    };

    let mut workspace = Workspace {
        root: root.clone(),
        ..Workspace::default()
    };
    if !root.exists() {
        return Ok(workspace);
    }

    let ignore_patterns = load_ignore_patterns(&root)?;

    for entry in WalkDir::new(&root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !should_exclude(e, exclude_dirs, Some(&ignore_patterns)))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(DOCUMENT_EXTENSION) {
            continue;
        }
        if entry.file_name() == "README.md" {
            continue;
        }

        let size = entry.metadata().map_or(0, |m| m.len());
        match fs::read_to_string(path) {
            Ok(content) => {
                workspace
                    .documents
                    .push(parse_document(path, &root, &content, size, config));
            }
            Err(err) => workspace.skipped.push(Skipped {
                path: path.to_path_buf(),
                reason: err.to_string(),
            }),
        }
    }

    let attachments_root = workspace.attachments_root();
    if attachments_root.is_dir() {
        for entry in WalkDir::new(&attachments_root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some(DOCUMENT_EXTENSION) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let size = entry.metadata().map_or(0, |m| m.len());
            workspace.attachments.push(Attachment {
                path: path.to_path_buf(),
                name,
                size,
                category: classify(path),
            });
        }
    }

    Ok(workspace)
}

fn parse_document(path: &Path, root: &Path, content: &str, size: u64, config: &Config) -> Document {
    let (front, body) = split_front_matter(content);
    let title = derive_title(&front, body, path);
    let words = count_words(content);
    let tags = extract_tags(content, config.tags.include_code);
    let links = extract_links(content);
    let attachment_refs = extract_attachment_refs(content);
    let (tasks_open, tasks_done) = count_tasks(content);

    let rel_path = relative_to(path, root);
    let folder = main_folder(&rel_path);
    let project = project_of(&rel_path);

    Document {
        path: path.to_path_buf(),
        rel_path,
        title,
        words,
        size,
        tags,
        links,
        attachment_refs,
        tasks_open,
        tasks_done,
        folder,
        project,
    }
}

/// The project is the immediate child directory under the projects root;
/// files sitting directly in the projects root belong to none.
fn project_of(rel_path: &str) -> Option<String> {
    let mut components = Path::new(rel_path).components();
    if components.next()?.as_os_str() != PROJECTS_DIR {
        return None;
    }
    let child = components.next()?;
    components.next()?;
    Some(child.as_os_str().to_string_lossy().into_owned())
}

fn should_exclude(
    entry: &walkdir::DirEntry,
    exclude_dirs: &[&str],
    ignore_patterns: Option<&Patterns>,
) -> bool {
    if is_hidden(entry) {
        return true;
    }

    if let Some(path_str) = entry.path().to_str() {
        for dir in exclude_dirs {
            if entry.file_type().is_dir() && entry.file_name().to_str() == Some(*dir) {
                return true;
            }
            if path_str.contains(&format!("/{dir}/")) {
                return true;
            }
        }
    }

    if let Some(patterns) = ignore_patterns {
        if patterns.matches(entry.path()) {
            return true;
        }
    }

    false
}
