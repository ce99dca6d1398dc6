// tests/integration_tests/aggregation_test.rs
use anyhow::Result;
use parastat::config::Config;
use parastat::core::aggregate::{stats_report, word_report};
use parastat::core::scanner::scan_workspace;

use crate::common::{create_test_file, setup_workspace};

#[test]
fn test_totals_and_folders() -> Result<()> {
    let dir = setup_workspace()?;
    let workspace = scan_workspace(dir.path(), &[], &Config::default())?;
    let report = word_report(&workspace, 10);

    assert_eq!(report.totals.files, 3, "README.md is not a content file");
    assert!(report.totals.words > 0);

    let folders: Vec<&str> = report
        .by_folder
        .iter()
        .map(|b| b.folder.as_str())
        .collect();
    assert_eq!(
        folders,
        vec!["00_Inbox", "01_Projects", "02_Areas"],
        "folder buckets are sorted by name"
    );
    Ok(())
}

#[test]
fn test_project_rollup() -> Result<()> {
    let dir = setup_workspace()?;
    create_test_file(
        dir.path(),
        "01_Projects/rewrite/outline.md",
        "More words for the rewrite project",
    )?;
    create_test_file(
        dir.path(),
        "01_Projects/garden/seeds.md",
        "Two words..? no: five",
    )?;

    let workspace = scan_workspace(dir.path(), &[], &Config::default())?;
    let report = word_report(&workspace, 10);

    let rewrite = report
        .by_project
        .iter()
        .find(|b| b.project == "rewrite")
        .expect("rewrite project bucket");
    assert_eq!(rewrite.files, 2);
    assert!(report.by_project.iter().any(|b| b.project == "garden"));
    Ok(())
}

#[test]
fn test_tag_rollup_words_and_files() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    // two documents tagged writing: 100 and 50 words
    let hundred = "word ".repeat(100);
    let fifty = "word ".repeat(50);
    create_test_file(
        dir.path(),
        "02_Areas/long.md",
        &format!("---\ntags: [writing]\n---\n{hundred}"),
    )?;
    create_test_file(
        dir.path(),
        "02_Areas/short.md",
        &format!("---\ntags: [writing]\n---\n{fifty}"),
    )?;

    let workspace = scan_workspace(dir.path(), &[], &Config::default())?;
    let report = word_report(&workspace, 10);

    let writing = report
        .by_tag
        .iter()
        .find(|b| b.tag == "writing")
        .expect("writing bucket");
    assert_eq!(writing.words, 150);
    assert_eq!(writing.files, 2);
    Ok(())
}

#[test]
fn test_goal_buckets_from_scan() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    create_test_file(dir.path(), "00_Inbox/short.md", &"word ".repeat(400))?;
    create_test_file(dir.path(), "00_Inbox/medium.md", &"word ".repeat(1200))?;

    let workspace = scan_workspace(dir.path(), &[], &Config::default())?;
    let report = word_report(&workspace, 10);

    assert_eq!(report.goals[0].threshold, 500);
    assert_eq!(report.goals[0].count, 1, "only medium.md reaches 500 words");
    assert_eq!(report.goals[1].count, 1);
    assert_eq!(report.goals[2].count, 0);
    Ok(())
}

#[test]
fn test_top_documents_ranking() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    create_test_file(dir.path(), "00_Inbox/small.md", "three words here")?;
    create_test_file(dir.path(), "00_Inbox/big.md", &"word ".repeat(20))?;

    let workspace = scan_workspace(dir.path(), &[], &Config::default())?;
    let report = word_report(&workspace, 1);

    assert_eq!(report.top_documents.len(), 1);
    assert!(report.top_documents[0].path.ends_with("big.md"));
    Ok(())
}

#[test]
fn test_stats_links_and_tasks() -> Result<()> {
    let dir = setup_workspace()?;
    create_test_file(
        dir.path(),
        "02_Areas/tracking.md",
        "- [ ] draft the intro\n- [x] collect sources\nsee [[research-notes]]",
    )?;

    let workspace = scan_workspace(dir.path(), &[], &Config::default())?;
    let report = stats_report(&workspace);

    assert_eq!(report.tasks.open, 1);
    assert_eq!(report.tasks.done, 1);
    // plan.md and tracking.md both point at research-notes
    assert_eq!(report.links.targets, 1);
    assert!(report.links.density > 0.0);
    Ok(())
}

#[test]
fn test_skipped_files_are_visible() -> Result<()> {
    let dir = setup_workspace()?;
    std::fs::write(dir.path().join("00_Inbox/broken.md"), [0xff, 0xfe, 0x00])?;

    let workspace = scan_workspace(dir.path(), &[], &Config::default())?;
    let report = word_report(&workspace, 10);

    assert_eq!(report.skipped, 1, "the unreadable file must be accounted for");
    assert_eq!(report.totals.files, 3, "and must not join the rollups");
    Ok(())
}

#[test]
fn test_rerun_is_identical() -> Result<()> {
    let dir = setup_workspace()?;
    let first = word_report(&scan_workspace(dir.path(), &[], &Config::default())?, 10);
    let second = word_report(&scan_workspace(dir.path(), &[], &Config::default())?, 10);
    assert_eq!(
        serde_json::to_string(&first)?,
        serde_json::to_string(&second)?,
        "an unchanged tree must aggregate identically"
    );
    Ok(())
}
