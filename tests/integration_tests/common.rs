// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// A small PARA workspace: notes in several classification folders plus a
/// referenced and an unreferenced attachment.
pub fn setup_workspace() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(
        temp_dir.path(),
        "00_Inbox/idea.md",
        "A fleeting idea #inbox",
    )?;

    create_test_file(
        temp_dir.path(),
        "01_Projects/rewrite/plan.md",
        "---\ntitle: Rewrite Plan\ntags: [writing, planning]\n---\n\
         # Plan\nThe plan references ![mock](mock.png) and [[research-notes]].",
    )?;

    create_test_file(
        temp_dir.path(),
        "02_Areas/research-notes.md",
        "---\ntags: [writing]\n---\nLong-running notes on the craft #writing",
    )?;

    create_test_file(temp_dir.path(), "README.md", "Workspace readme, not content")?;

    create_test_file(temp_dir.path(), "05_Attachments/images/mock.png", "png-bytes")?;
    create_test_file(temp_dir.path(), "05_Attachments/other/dump.bin", "bin-bytes")?;

    Ok(temp_dir)
}
