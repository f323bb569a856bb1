//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! When `--json` is enabled, task listings are machine-readable JSON.

use std::fmt::Display;

use crate::core::types::Task;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format a single task as its display lines.
///
/// Layout: `[x] id. title` with the description, when present, indented
/// on the following line:
///
/// ```text
/// [ ] 1. Buy milk
///    2% if they have it
/// ```
pub fn format_task(task: &Task) -> String {
    let status = if task.completed { "[x]" } else { "[ ]" };
    match &task.description {
        Some(description) => {
            format!("{} {}. {}\n   {}", status, task.id, task.title, description)
        }
        None => format!("{} {}. {}", status, task.id, task.title),
    }
}

/// Format a list of tasks, one entry per task.
///
/// Returns `No tasks found.` for an empty list.
pub fn format_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }
    tasks
        .iter()
        .map(format_task)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render tasks as a pretty-printed JSON array.
pub fn tasks_to_json(tasks: &[Task]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Description, TaskId, Title};

    fn task(id: u64, title: &str, description: Option<&str>, completed: bool) -> Task {
        let mut task = Task::new(
            TaskId::new(id).unwrap(),
            Title::new(title).unwrap(),
            description.map(|d| Description::new(d).unwrap()),
        );
        task.completed = completed;
        task
    }

    mod verbosity {
        use super::*;

        #[test]
        fn quiet_wins_over_debug() {
            assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        }

        #[test]
        fn flag_mapping() {
            assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
            assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
            assert_eq!(Verbosity::from_flags(true, false), Verbosity::Quiet);
        }
    }

    mod formatting {
        use super::*;

        #[test]
        fn pending_task_without_description() {
            let line = format_task(&task(1, "Buy milk", None, false));
            assert_eq!(line, "[ ] 1. Buy milk");
        }

        #[test]
        fn completed_task_with_description() {
            let line = format_task(&task(2, "Ship it", Some("v0.1.0"), true));
            assert_eq!(line, "[x] 2. Ship it\n   v0.1.0");
        }

        #[test]
        fn empty_list_message() {
            assert_eq!(format_task_list(&[]), "No tasks found.");
        }

        #[test]
        fn list_joins_tasks_in_order() {
            let tasks = vec![
                task(1, "A", None, false),
                task(2, "B", Some("note"), true),
                task(3, "C", None, false),
            ];
            let text = format_task_list(&tasks);
            assert_eq!(text, "[ ] 1. A\n[x] 2. B\n   note\n[ ] 3. C");
        }

        #[test]
        fn json_is_an_array_of_tasks() {
            let tasks = vec![task(1, "A", None, false)];
            let json = tasks_to_json(&tasks).unwrap();
            let parsed: Vec<Task> = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, tasks);
        }
    }
}
