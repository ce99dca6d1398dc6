// src/core/ignore.rs
use anyhow::{Context as _, Result};
use glob::Pattern;
use std::fs;
use std::path::Path;

pub const IGNORE_FILE: &str = ".parastatignore";

/// Ignore patterns with gitignore-flavored conveniences: `#` comments,
/// `!` negation, `dir/` directory patterns, bare filenames, plain globs.
#[derive(Debug, Default)]
pub struct Patterns {
    patterns: Vec<(Pattern, bool)>, // (pattern, is_negation)
}

impl Patterns {
    /// Adds one pattern line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line expands to invalid glob syntax.
    pub fn add_pattern(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (raw, is_negation) = line
            .strip_prefix('!')
            .map_or((line, false), |stripped| (stripped, true));

        let has_glob = raw.contains(['*', '?', '[']);
        let expansions: Vec<String> = if has_glob {
            if raw.contains('/') {
                vec![raw.to_owned()]
            } else {
                vec![raw.to_owned(), format!("**/{raw}")]
            }
        } else if let Some(dir) = raw.strip_suffix('/') {
            vec![format!("{dir}/**"), format!("**/{dir}/**")]
        } else {
            vec![raw.to_owned(), format!("**/{raw}")]
        };

        for expansion in expansions {
            let compiled = Pattern::new(&expansion)
                .with_context(|| format!("Invalid ignore pattern: {expansion}"))?;
            self.patterns.push((compiled, is_negation));
        }
        Ok(())
    }

    /// Negations win over matches, matching both the full path and the
    /// bare filename.
    pub fn matches<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        let path_str = path.to_string_lossy();
        let filename = path
            .file_name()
            .map(|f| f.to_string_lossy())
            .unwrap_or_default();

        for (pattern, is_negation) in &self.patterns {
            if *is_negation && (pattern.matches(&path_str) || pattern.matches(&filename)) {
                return false;
            }
        }
        for (pattern, is_negation) in &self.patterns {
            if !is_negation && (pattern.matches(&path_str) || pattern.matches(&filename)) {
                return true;
            }
        }
        false
    }
}

/// Loads ignore patterns from the nearest ignore file, starting at `dir`
/// and walking parent directories until one is found.
///
/// # Errors
///
/// Returns an error if an ignore file exists but cannot be read, or if it
/// contains invalid pattern syntax.
pub fn load_ignore_patterns(dir: &Path) -> Result<Patterns> {
    let mut patterns = Patterns::default();
    let mut current = Some(dir.to_path_buf());

    while let Some(candidate) = current {
        let ignore_file = candidate.join(IGNORE_FILE);
        if ignore_file.exists() {
            let content = fs::read_to_string(&ignore_file).with_context(|| {
                format!("Failed to read ignore file: {}", ignore_file.display())
            })?;
            for line in content.lines() {
                patterns.add_pattern(line)?;
            }
            break;
        }
        current = candidate.parent().map(Path::to_path_buf);
    }

    Ok(patterns)
}
