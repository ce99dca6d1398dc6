// src/models.rs
mod attachment;
mod document;
mod frontmatter;
pub mod report;

pub use attachment::{Attachment, Category};
pub use document::{Document, Skipped};
pub use frontmatter::FrontMatter;
