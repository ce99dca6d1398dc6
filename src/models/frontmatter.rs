// src/models/frontmatter.rs
use serde::Deserialize;
use std::collections::BTreeMap;

/// The recognized header fields plus whatever else the header carries.
#[derive(Deserialize, Debug, Default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml_ng::Value>,
}
