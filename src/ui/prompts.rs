//! ui::prompts
//!
//! Line-based input prompts.
//!
//! # Design
//!
//! Every prompt takes the input and output streams as arguments rather
//! than reading the process's stdin directly, so the menu loop can be
//! exercised end to end with in-memory buffers. Prompt text is written
//! without a trailing newline and flushed before reading.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::core::types::{InvalidInput, TaskId};

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Prompt for a line of input.
///
/// Returns the entered line with surrounding whitespace stripped, or
/// `Ok(None)` on end of input.
pub fn line(
    prompt: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<String>, PromptError> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

/// Prompt for an optional line: an empty answer means "not provided".
///
/// Returns `Ok(None)` on end of input as well; callers that need to
/// distinguish EOF from "skipped" should use [`line`] directly.
pub fn optional_line(
    prompt: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<String>, PromptError> {
    Ok(line(prompt, input, output)?.filter(|answer| !answer.is_empty()))
}

/// Prompt for a task id.
///
/// Returns `Ok(None)` on end of input, `Ok(Some(Err(_)))` when the text
/// is not a positive integer.
pub fn task_id(
    prompt: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<Result<TaskId, InvalidInput>>, PromptError> {
    Ok(line(prompt, input, output)?.map(|answer| answer.parse()))
}
