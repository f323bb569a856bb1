//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//! - [`prompts`] - Line-based input prompts
//!
//! # Design
//!
//! All output and prompts go through this module to ensure consistent
//! formatting. Prompts read from a generic `BufRead` and write to a
//! generic `Write`, so scripted tests can drive the whole menu without
//! touching the process's real stdin/stdout.

pub mod output;
pub mod prompts;
