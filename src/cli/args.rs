//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output (suppresses the banner)
//! - `--json`: Render task listings as JSON
//!
//! There are no subcommands: the program is menu-driven and all actions
//! are chosen interactively at runtime.

use clap::Parser;

/// Tasklist - a console task list manager
#[derive(Parser, Debug)]
#[command(name = "tasks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Minimal output; suppresses the welcome banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Render task listings as machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
