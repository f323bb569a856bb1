//! Tasklist - a console task list manager
//!
//! Tasklist is a single-binary tool that keeps a short to-do list in
//! memory for the duration of one run: tasks are added, viewed, updated,
//! deleted, and toggled complete through a numbered menu.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses flags, runs the menu)
//! - [`core`] - Domain types and the in-memory task store
//! - [`ui`] - Output formatting and input prompts
//!
//! # Correctness Invariants
//!
//! Tasklist maintains the following invariants:
//!
//! 1. Invalid titles, descriptions, and ids cannot be constructed
//! 2. All task mutations flow through the store, which validates before
//!    mutating; a failed operation leaves the store unchanged
//! 3. Task identifiers are unique and never reused within a session
//! 4. Insertion order is preserved in every listing

pub mod cli;
pub mod core;
pub mod ui;
