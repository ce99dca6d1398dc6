// src/lib.rs
//! Content analysis for a PARA-style markdown workspace: word counts,
//! tag/link indexes, attachment reference resolution, and rollup reports.

pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod output;
pub mod utils;

pub use cli::{run, Cli, Command};
pub use config::Config;
pub use crate::core::scanner::{scan_workspace, Workspace};
