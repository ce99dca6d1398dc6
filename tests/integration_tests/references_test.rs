// tests/integration_tests/references_test.rs
use anyhow::Result;
use parastat::config::Config;
use parastat::core::aggregate::orphan_report;
use parastat::core::scanner::scan_workspace;

use crate::common::{create_test_file, setup_workspace};

#[test]
fn test_referenced_attachment_is_not_orphaned() -> Result<()> {
    let dir = setup_workspace()?;
    let workspace = scan_workspace(dir.path(), &[], &Config::default())?;
    let report = orphan_report(&workspace);

    assert_eq!(report.attachments, 2);
    assert!(
        report.orphans.iter().all(|o| o.name != "mock.png"),
        "mock.png is embedded by plan.md"
    );
    assert!(
        report.orphans.iter().any(|o| o.name == "dump.bin"),
        "nothing references dump.bin"
    );
    Ok(())
}

#[test]
fn test_removing_the_reference_orphans_the_attachment() -> Result<()> {
    let dir = setup_workspace()?;

    // overwrite the only note that references mock.png
    create_test_file(
        dir.path(),
        "01_Projects/rewrite/plan.md",
        "---\ntitle: Rewrite Plan\n---\nNo attachment references anymore.",
    )?;

    let workspace = scan_workspace(dir.path(), &[], &Config::default())?;
    let report = orphan_report(&workspace);
    assert!(
        report.orphans.iter().any(|o| o.name == "mock.png"),
        "with the embed gone, mock.png must orphan"
    );
    Ok(())
}

#[test]
fn test_all_four_reference_syntaxes() -> Result<()> {
    let dir = setup_workspace()?;
    create_test_file(
        dir.path(),
        "03_Resources/references.md",
        "![a](05_Attachments/images/one.png)\n\
         [b](../05_Attachments/documents/two.pdf)\n\
         <img src=\"three.gif\">\n\
         ![[four.mp4|clip]]\n\
         [ext](https://example.com/five.zip)\n\
         [anchor](#six)\n",
    )?;
    for name in ["images/one.png", "documents/two.pdf", "images/three.gif", "videos/four.mp4"] {
        create_test_file(dir.path(), &format!("05_Attachments/{name}"), "bytes")?;
    }
    create_test_file(dir.path(), "05_Attachments/other/five.zip", "bytes")?;

    let workspace = scan_workspace(dir.path(), &[], &Config::default())?;
    let report = orphan_report(&workspace);

    let orphan_names: Vec<&str> = report.orphans.iter().map(|o| o.name.as_str()).collect();
    for referenced in ["one.png", "two.pdf", "three.gif", "four.mp4"] {
        assert!(
            !orphan_names.contains(&referenced),
            "{referenced} is referenced and must not orphan"
        );
    }
    assert!(
        orphan_names.contains(&"five.zip"),
        "an external URL match must not count as a local reference"
    );
    Ok(())
}

#[test]
fn test_basename_matching_ignores_query_and_path() -> Result<()> {
    let dir = setup_workspace()?;
    create_test_file(
        dir.path(),
        "00_Inbox/query.md",
        "![scaled](irrelevant/dir/dump.bin?width=100)",
    )?;

    let workspace = scan_workspace(dir.path(), &[], &Config::default())?;
    let report = orphan_report(&workspace);
    assert!(
        report.orphans.iter().all(|o| o.name != "dump.bin"),
        "basename matching resolves the reference regardless of path or query"
    );
    Ok(())
}

#[test]
fn test_empty_attachments_root_reports_empty() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    create_test_file(dir.path(), "00_Inbox/solo.md", "No attachments here")?;
    let workspace = scan_workspace(dir.path(), &[], &Config::default())?;
    let report = orphan_report(&workspace);
    assert_eq!(report.attachments, 0);
    assert!(report.orphans.is_empty());
    Ok(())
}
