// src/output.rs
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::scanner::INBOX_DIR;
use crate::models::report::{
    AttachmentReport, OrphanEntry, OrphanReport, StatsReport, WordReport,
};
use crate::utils::format_size;

const BAR_WIDTH: usize = 20;
const LIST_LIMIT: usize = 10;

fn progress_bar(current: u64, max: u64) -> String {
    let ratio = if max > 0 {
        current as f64 / max as f64
    } else {
        0.0
    };
    let filled = ((ratio * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn print_skipped(skipped: usize) {
    if skipped > 0 {
        println!("Skipped unreadable files: {skipped}");
    }
}

pub fn print_word_report(report: &WordReport) {
    println!("Word Count Report");

    if report.totals.files == 0 {
        println!("\nNo content files found.");
        return;
    }

    println!("\n=== Totals ===\n");
    println!("Notes: {}", report.totals.files);
    println!("Words: {}", report.totals.words);
    println!("Average: {} words/note", report.totals.average_words);
    print_skipped(report.skipped);

    println!("\n=== By Folder ===\n");
    let max_words = report.by_folder.iter().map(|b| b.words).max().unwrap_or(0);
    for bucket in &report.by_folder {
        println!("{}", bucket.folder);
        println!(
            "  {} {} words ({} notes)",
            progress_bar(bucket.words, max_words),
            bucket.words,
            bucket.files
        );
    }

    if !report.by_project.is_empty() {
        println!("\n=== By Project ===\n");
        let max_words = report.by_project.iter().map(|b| b.words).max().unwrap_or(0);
        for bucket in &report.by_project {
            println!("{}", bucket.project);
            println!(
                "  {} {} words ({} notes)",
                progress_bar(bucket.words, max_words),
                bucket.words,
                bucket.files
            );
        }
    }

    if !report.by_tag.is_empty() {
        println!("\n=== Top Tags by Words ===\n");
        let shown = &report.by_tag[..report.by_tag.len().min(LIST_LIMIT)];
        let max_words = shown.first().map_or(0, |b| b.words);
        for bucket in shown {
            println!("#{}", bucket.tag);
            println!(
                "  {} {} words ({} notes)",
                progress_bar(bucket.words, max_words),
                bucket.words,
                bucket.files
            );
        }
    }

    println!("\n=== Longest Notes ===\n");
    for (index, doc) in report.top_documents.iter().enumerate() {
        println!("{:2}. {}", index + 1, doc.title);
        println!("    {} words | {}", doc.words, doc.path);
    }

    println!("\n=== Writing Goals ===\n");
    for goal in &report.goals {
        println!("{} ({} words): {}", goal.label, goal.threshold, goal.count);
    }
}

pub fn print_stats_report(report: &StatsReport) {
    println!("Workspace Statistics");

    if report.totals.files == 0 {
        println!("\nNo content files found.");
        return;
    }

    println!("\n=== Overview ===\n");
    println!("Notes: {}", report.totals.files);
    println!("Words: {}", report.totals.words);
    println!("Average: {} words/note", report.totals.average_words);
    println!("Storage: {}", format_size(report.totals.size));
    print_skipped(report.skipped);

    println!("\n=== Folder Distribution ===\n");
    for bucket in &report.by_folder {
        println!("{}", bucket.folder);
        println!("  Notes: {}", bucket.files);
        println!("  Words: {}", bucket.words);
        println!("  Size: {}", format_size(bucket.size));
    }

    if !report.top_tags.is_empty() {
        println!("\n=== Top Tags ===\n");
        for (index, tag) in report.top_tags.iter().take(LIST_LIMIT).enumerate() {
            println!("{}. #{} ({})", index + 1, tag.tag, tag.count);
        }
    }

    println!("\n=== Longest Notes ===\n");
    for (index, doc) in report.longest.iter().enumerate() {
        println!("{}. {}", index + 1, doc.title);
        println!("   {} words | {}", doc.words, doc.path);
    }

    if report.links.targets > 0 {
        println!("\n=== Links ===\n");
        println!("Linked notes: {}", report.links.targets);
        println!("Link density: {:.2} per note", report.links.density);
    }

    if report.tasks.open > 0 || report.tasks.done > 0 {
        println!("\n=== Tasks ===\n");
        println!("Open: {}", report.tasks.open);
        println!("Done: {}", report.tasks.done);
    }

    println!("\n=== Suggestions ===\n");
    let mut suggested = false;
    if let Some(inbox) = report.by_folder.iter().find(|b| b.folder == INBOX_DIR) {
        if inbox.files > 5 {
            println!(
                "The inbox holds {} unprocessed notes; consider filing them",
                inbox.files
            );
            suggested = true;
        }
    }
    if report.top_tags.len() < 10 {
        println!("Few distinct tags; more tagging makes notes easier to find");
        suggested = true;
    }
    if report.links.density < 0.5 {
        println!("Few [[wiki links]] between notes; linking builds the knowledge net");
        suggested = true;
    }
    if !suggested {
        println!("Nothing to flag.");
    }
}

fn extension_key(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map_or_else(
            || String::from("(no extension)"),
            |ext| format!(".{}", ext.to_ascii_lowercase()),
        )
}

pub fn print_orphan_report(report: &OrphanReport) {
    println!("Orphaned Attachments");

    if report.attachments == 0 {
        println!("\nAttachment folder is empty or missing.");
        return;
    }

    println!("\nAttachments scanned: {}", report.attachments);
    println!("Documents scanned: {}", report.documents);
    println!("Referenced names: {}", report.referenced);

    if report.orphans.is_empty() {
        println!("\nNo orphans; every attachment is referenced.");
        return;
    }

    println!(
        "\nFound {} orphans ({}):\n",
        report.orphans.len(),
        format_size(report.reclaimable)
    );

    let mut by_extension: BTreeMap<String, Vec<&OrphanEntry>> = BTreeMap::new();
    for orphan in &report.orphans {
        by_extension
            .entry(extension_key(&orphan.name))
            .or_default()
            .push(orphan);
    }
    for (extension, orphans) in &by_extension {
        println!("{} ({}):", extension, orphans.len());
        for orphan in orphans {
            println!("  - {} ({})", orphan.path, format_size(orphan.size));
        }
        println!();
    }

    println!("=== Suggested Actions ===\n");
    println!("1. Confirm these files are no longer needed");
    println!("2. Move the confirmed ones into a dated backup folder before deleting");
}

pub fn print_attachment_report(report: &AttachmentReport) {
    println!("Attachment Organization Report");

    if report.total == 0 {
        println!("\nAttachment folder is empty or missing.");
        return;
    }

    println!("\n=== Overview ===\n");
    println!("Files: {}", report.total);
    println!("Size: {}", format_size(report.total_size));

    println!("\n=== Categories ===\n");
    for bucket in &report.by_category {
        println!("{}:", bucket.category.label());
        println!("  Count: {}", bucket.count);
        println!("  Size: {}", format_size(bucket.size));
    }

    if !report.misplaced.is_empty() {
        println!("\n=== Misplaced Files ===\n");
        println!("{} files sit outside their category folder:\n", report.misplaced.len());
        for entry in report.misplaced.iter().take(LIST_LIMIT) {
            println!("{}", entry.path);
            println!("  suggested: {}", entry.expected);
        }
        if report.misplaced.len() > LIST_LIMIT {
            println!("... and {} more", report.misplaced.len() - LIST_LIMIT);
        }
    }

    if !report.orphaned.is_empty() {
        println!("\n=== Unreferenced Files ===\n");
        let reclaimable: u64 = report.orphaned.iter().map(|o| o.size).sum();
        println!(
            "{} files are never referenced ({} reclaimable):\n",
            report.orphaned.len(),
            format_size(reclaimable)
        );
        for entry in report.orphaned.iter().take(LIST_LIMIT) {
            println!("{} ({})", entry.path, format_size(entry.size));
        }
        if report.orphaned.len() > LIST_LIMIT {
            println!("... and {} more", report.orphaned.len() - LIST_LIMIT);
        }
    }

    println!("\n=== Suggestions ===\n");
    let mut suggested = false;
    if !report.misplaced.is_empty() {
        println!("Moving files into their category folders keeps the tree tidy");
        suggested = true;
    }
    if !report.orphaned.is_empty() {
        println!("Clearing unreferenced attachments reclaims space");
        suggested = true;
    }
    if report.total_size > 100 * 1024 * 1024 {
        println!("The attachment tree exceeds 100 MB; consider compressing images");
        suggested = true;
    }
    if !suggested {
        println!("Nothing to flag.");
    }
}

/// Emits the structured report after the text report.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
