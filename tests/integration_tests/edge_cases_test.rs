// tests/integration_tests/edge_cases_test.rs
use anyhow::Result;
use parastat::config::Config;
use parastat::core::aggregate::{stats_report, word_report};
use parastat::core::scanner::scan_workspace;

use crate::common::create_test_file;

#[test]
fn test_missing_root_yields_empty_report() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    let missing = dir.path().join("nope");
    let workspace = scan_workspace(&missing, &[], &Config::default())?;
    let report = word_report(&workspace, 10);
    assert_eq!(report.totals.files, 0);
    assert!(report.by_folder.is_empty());
    Ok(())
}

#[test]
fn test_malformed_header_degrades_to_body() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    create_test_file(
        dir.path(),
        "00_Inbox/broken-header.md",
        "---\ntitle: [unclosed\n---\nStill three words",
    )?;

    let workspace = scan_workspace(dir.path(), &[], &Config::default())?;
    assert_eq!(workspace.documents.len(), 1, "a malformed header never skips a file");
    let doc = &workspace.documents[0];
    assert_eq!(doc.title, "broken-header", "title falls back to the file stem");
    assert!(doc.words >= 3);
    Ok(())
}

#[test]
fn test_every_title_is_nonempty() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    create_test_file(dir.path(), "00_Inbox/a.md", "---\ntitle: Explicit\n---\nx")?;
    create_test_file(dir.path(), "00_Inbox/b.md", "# Heading Title\nx")?;
    create_test_file(dir.path(), "00_Inbox/c.md", "no heading at all")?;
    create_test_file(dir.path(), "00_Inbox/d.md", "")?;

    let workspace = scan_workspace(dir.path(), &[], &Config::default())?;
    assert_eq!(workspace.documents.len(), 4);
    for doc in &workspace.documents {
        assert!(!doc.title.is_empty(), "{} has an empty title", doc.rel_path);
    }
    Ok(())
}

#[test]
fn test_unconventional_folders_do_not_bucket() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    create_test_file(dir.path(), "scratch/free.md", "words out of tree")?;
    let workspace = scan_workspace(dir.path(), &[], &Config::default())?;
    let report = stats_report(&workspace);
    assert_eq!(report.totals.files, 1, "the note still counts toward totals");
    assert!(report.by_folder.is_empty(), "but joins no classification bucket");
    Ok(())
}

#[test]
fn test_config_include_code_policy() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    create_test_file(
        dir.path(),
        "00_Inbox/scripty.md",
        "notes #keep\n```sh\n# run with #caution\n```",
    )?;

    let default_scan = scan_workspace(dir.path(), &[], &Config::default())?;
    assert!(default_scan.documents[0]
        .tags
        .contains(&String::from("caution")));

    create_test_file(dir.path(), ".parastat.toml", "[tags]\ninclude_code = false\n")?;
    let config = parastat::Config::load(dir.path())?;
    let strict_scan = scan_workspace(dir.path(), &[], &config)?;
    assert_eq!(strict_scan.documents[0].tags, vec!["keep"]);
    Ok(())
}
