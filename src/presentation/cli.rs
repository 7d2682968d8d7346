//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --snapshot, --json, --verbose) are inherited by all subcommands
//! - Flags override environment variables, which override config files

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// gridclear - remove every entry from data-grid regions
#[derive(Parser, Debug)]
#[command(name = "gridclear")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./gridclear.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Grid snapshot file
    #[arg(long, global = true, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Output NDJSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove every entry from the named regions
    Clear {
        /// Region names or glob patterns (`*`, `?`)
        #[arg(required = true, value_name = "NAMES")]
        names: Vec<String>,

        /// Keys per bulk remove for string-keyed regions
        #[arg(long, value_name = "N")]
        batch_size: Option<usize>,

        /// Report what would be removed without removing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Describe the regions a name list resolves to
    List {
        /// Region names or glob patterns (default: every root region)
        #[arg(value_name = "PATTERNS")]
        patterns: Vec<String>,
    },
}
