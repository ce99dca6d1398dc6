// src/utils.rs
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static MAIN_FOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0[0-6]_\w+$").expect("main folder pattern"));

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| {
        // Don't consider temp directories as hidden
        if s.starts_with(".tmp") {
            return false;
        }
        s.starts_with('.')
    })
}

/// Path relative to the workspace root, for display and report keys.
pub fn relative_to(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// First path segment matching the `NN_Name` classification convention.
pub fn main_folder(rel_path: &str) -> Option<String> {
    Path::new(rel_path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .find(|c| MAIN_FOLDER.is_match(c))
        .map(|c| c.into_owned())
}

pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return String::from("0 Bytes");
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent])
}
