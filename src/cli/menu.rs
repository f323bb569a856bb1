//! cli::menu
//!
//! The interactive menu loop.
//!
//! # Responsibilities
//!
//! - Render the numbered menu and read the user's choice
//! - Prompt for the inputs each action needs
//! - Delegate to the [`TaskStore`] and render results or errors
//!
//! The loop never mutates tasks itself; every change flows through the
//! store, and every store error is rendered as an `error:` line on the
//! menu's output stream without ending the session. End of input exits
//! the loop the same way the Exit action does.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::store::{StoreError, TaskStore};
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts;

/// One of the six numbered menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Update,
    Delete,
    MarkComplete,
    Exit,
}

impl MenuChoice {
    /// Parse a menu choice from the user's answer.
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::Update),
            "4" => Some(Self::Delete),
            "5" => Some(Self::MarkComplete),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The interactive session: a store plus the streams that drive it.
///
/// Generic over its streams so tests can run whole sessions against
/// in-memory buffers.
pub struct Menu<R, W> {
    input: R,
    output: W,
    store: TaskStore,
    verbosity: Verbosity,
    json: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu session over an empty store.
    pub fn new(input: R, output: W, verbosity: Verbosity, json: bool) -> Self {
        Self {
            input,
            output,
            store: TaskStore::new(),
            verbosity,
            json,
        }
    }

    /// The store backing this session.
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Run the menu loop until Exit or end of input.
    pub fn run(&mut self) -> Result<()> {
        if self.verbosity != Verbosity::Quiet {
            writeln!(self.output, "Welcome to the Todo App!")?;
        }

        loop {
            self.print_menu()?;
            let Some(answer) =
                prompts::line("Choose an option (1-6): ", &mut self.input, &mut self.output)?
            else {
                // End of input: leave as gracefully as an explicit Exit.
                break;
            };

            match MenuChoice::parse(&answer) {
                Some(MenuChoice::Add) => self.handle_add()?,
                Some(MenuChoice::View) => self.handle_view()?,
                Some(MenuChoice::Update) => self.handle_update()?,
                Some(MenuChoice::Delete) => self.handle_delete()?,
                Some(MenuChoice::MarkComplete) => self.handle_mark_complete()?,
                Some(MenuChoice::Exit) => {
                    if self.verbosity != Verbosity::Quiet {
                        writeln!(self.output, "Goodbye!")?;
                    }
                    break;
                }
                None => {
                    self.report_error("invalid option. Please choose a number between 1 and 6")?;
                }
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Todo App ---")?;
        writeln!(self.output, "1. Add Task")?;
        writeln!(self.output, "2. View Tasks")?;
        writeln!(self.output, "3. Update Task")?;
        writeln!(self.output, "4. Delete Task")?;
        writeln!(self.output, "5. Mark Complete")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    fn report_error(&mut self, message: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "error: {}", message)?;
        Ok(())
    }

    /// Prompt for a task id, rendering a parse failure as an error line.
    ///
    /// `Ok(None)` means either end of input or invalid text; in both
    /// cases the current action is abandoned and the loop continues.
    fn prompt_id(&mut self, prompt: &str) -> Result<Option<crate::core::types::TaskId>> {
        match prompts::task_id(prompt, &mut self.input, &mut self.output)? {
            Some(Ok(id)) => Ok(Some(id)),
            Some(Err(_)) => {
                self.report_error("invalid input. Please enter a positive task number")?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn handle_add(&mut self) -> Result<()> {
        let Some(title) =
            prompts::line("Enter task title: ", &mut self.input, &mut self.output)?
        else {
            return Ok(());
        };
        let description = prompts::optional_line(
            "Enter task description (optional, press Enter to skip): ",
            &mut self.input,
            &mut self.output,
        )?;

        match self.store.add(&title, description.as_deref()) {
            Ok(id) => writeln!(self.output, "Task added successfully with ID: {}", id)?,
            Err(err) => self.report_error(err)?,
        }
        Ok(())
    }

    fn handle_view(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- All Tasks ---")?;
        let tasks = self.store.list_all();
        if self.json {
            writeln!(self.output, "{}", output::tasks_to_json(&tasks)?)?;
        } else {
            writeln!(self.output, "{}", output::format_task_list(&tasks))?;
        }
        Ok(())
    }

    fn handle_update(&mut self) -> Result<()> {
        let Some(id) = self.prompt_id("Enter task ID to update: ")? else {
            return Ok(());
        };

        // Show the current values before asking for replacements.
        let Some(task) = self.store.get(id) else {
            self.report_error(StoreError::NotFound(id))?;
            return Ok(());
        };
        writeln!(self.output, "Current task: {}", task.title)?;
        if let Some(description) = &task.description {
            writeln!(self.output, "Current description: {}", description)?;
        }

        let title = prompts::optional_line(
            "Enter new title (or press Enter to keep current): ",
            &mut self.input,
            &mut self.output,
        )?;
        let description = prompts::optional_line(
            "Enter new description (or press Enter to keep current): ",
            &mut self.input,
            &mut self.output,
        )?;

        if title.is_none() && description.is_none() {
            writeln!(self.output, "No changes made.")?;
            return Ok(());
        }

        match self.store.update(id, title.as_deref(), description.as_deref()) {
            Ok(()) => writeln!(self.output, "Task updated successfully.")?,
            Err(err) => self.report_error(err)?,
        }
        Ok(())
    }

    fn handle_delete(&mut self) -> Result<()> {
        let Some(id) = self.prompt_id("Enter task ID to delete: ")? else {
            return Ok(());
        };
        match self.store.delete(id) {
            Ok(()) => writeln!(self.output, "Task deleted successfully.")?,
            Err(err) => self.report_error(err)?,
        }
        Ok(())
    }

    fn handle_mark_complete(&mut self) -> Result<()> {
        let Some(id) = self.prompt_id("Enter task ID to toggle completion: ")? else {
            return Ok(());
        };
        match self.store.toggle_completion(id) {
            Ok(true) => writeln!(self.output, "Task marked as completed.")?,
            Ok(false) => writeln!(self.output, "Task marked as pending.")?,
            Err(err) => self.report_error(err)?,
        }
        Ok(())
    }
}
