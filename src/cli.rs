// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::core::aggregate;
use crate::core::scanner::scan_workspace;
use crate::output;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workspace root to analyze (defaults to current directory)
    #[arg(short, long, default_value = ".", global = true)]
    pub directory: PathBuf,

    /// Directories to exclude from the scan (comma-separated)
    #[arg(short, long, default_value = ".git", global = true)]
    pub exclude: String,

    /// Emit a JSON report after the text report
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Word counts with folder, project, tag and goal rollups
    Words {
        /// Number of notes in the longest-notes ranking
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
    /// Workspace overview: notes, storage, tags, links, tasks
    Stats,
    /// Attachments never referenced by any note
    Orphans,
    /// Attachment categories and misplaced files
    Attachments,
}

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.directory)?;

    let mut exclude_dirs: Vec<&str> = cli
        .exclude
        .split(',')
        .filter(|dir| !dir.is_empty())
        .collect();
    exclude_dirs.extend(config.scan.exclude.iter().map(String::as_str));

    let workspace = scan_workspace(&cli.directory, &exclude_dirs, &config)
        .with_context(|| format!("Failed to scan workspace: {}", cli.directory.display()))?;

    match cli.command {
        Command::Words { top } => {
            let report = aggregate::word_report(&workspace, top);
            output::print_word_report(&report);
            if cli.json {
                output::print_json(&report)?;
            }
        }
        Command::Stats => {
            let report = aggregate::stats_report(&workspace);
            output::print_stats_report(&report);
            if cli.json {
                output::print_json(&report)?;
            }
        }
        Command::Orphans => {
            let report = aggregate::orphan_report(&workspace);
            output::print_orphan_report(&report);
            if cli.json {
                output::print_json(&report)?;
            }
        }
        Command::Attachments => {
            let report = aggregate::attachment_report(&workspace);
            output::print_attachment_report(&report);
            if cli.json {
                output::print_json(&report)?;
            }
        }
    }

    Ok(())
}
