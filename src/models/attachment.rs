// src/models/attachment.rs
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Image,
    Document,
    Video,
    Other,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Image, Self::Document, Self::Video, Self::Other];

    /// Expected subfolder under the attachments root.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Image => "images",
            Self::Document => "documents",
            Self::Video => "videos",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Image => "Images",
            Self::Document => "Documents",
            Self::Video => "Videos",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Attachment {
    pub path: PathBuf,
    /// Basename, the key the reference resolver matches against.
    pub name: String,
    pub size: u64,
    pub category: Category,
}
