//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line flags
//! - Run the interactive menu over stdin/stdout
//! - Does NOT touch tasks directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses flags via clap, builds the output
//! verbosity, and hands the process's streams to [`menu::Menu`]. All
//! task state changes flow through the store inside the menu session.

pub mod args;
pub mod menu;

pub use args::Cli;

use std::io;

use anyhow::Result;

use crate::ui::output::{self, Verbosity};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    output::debug("starting interactive menu", verbosity);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = menu::Menu::new(stdin.lock(), stdout.lock(), verbosity, cli.json);
    menu.run()
}
