// src/core/classify.rs
use std::path::{Path, PathBuf};

use crate::models::{Attachment, Category};

const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "svg", "webp", "bmp"];
const DOCUMENT_EXTENSIONS: [&str; 8] = ["pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt"];
const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "mov", "avi", "mkv", "webm"];

/// Maps a path to its attachment category by extension. Pure; unknown and
/// missing extensions fall into `Other`.
#[must_use]
pub fn classify(path: &Path) -> Category {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return Category::Other;
    };
    let ext = ext.to_ascii_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Category::Image
    } else if DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
        Category::Document
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Category::Video
    } else {
        Category::Other
    }
}

/// Where an attachment of this category belongs.
#[must_use]
pub fn expected_dir(attachment: &Attachment, attachments_root: &Path) -> PathBuf {
    attachments_root.join(attachment.category.dir_name())
}

/// True when the attachment's actual parent differs from the category
/// folder. Reporting only; nothing ever moves files here.
#[must_use]
pub fn is_misplaced(attachment: &Attachment, attachments_root: &Path) -> bool {
    attachment
        .path
        .parent()
        .is_some_and(|actual| actual != expected_dir(attachment, attachments_root))
}
