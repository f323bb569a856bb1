//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`TaskId`] - Positive task identifier
//! - [`Title`] - Validated, trimmed task title
//! - [`Description`] - Validated optional task description
//! - [`Task`] - A single to-do item
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use tasklist::core::types::{TaskId, Title, Description};
//!
//! // Valid constructions
//! let id = TaskId::new(1).unwrap();
//! let title = Title::new("  Buy milk  ").unwrap();
//! assert_eq!(title.as_str(), "Buy milk");
//!
//! // Invalid constructions fail at creation time
//! assert!(TaskId::new(0).is_err());
//! assert!(Title::new("   ").is_err());
//! assert!(Description::new("x".repeat(1001)).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum title length in characters, after trimming.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Errors from field validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("title cannot be empty or contain only whitespace")]
    EmptyTitle,

    #[error("title cannot exceed {MAX_TITLE_LEN} characters (got {0})")]
    TitleTooLong(usize),

    #[error("description cannot exceed {MAX_DESCRIPTION_LEN} characters (got {0})")]
    DescriptionTooLong(usize),

    #[error("task id must be a positive integer")]
    NonPositiveId,
}

/// A positive task identifier.
///
/// Identifiers are unique within a store and never change once assigned.
///
/// # Example
///
/// ```
/// use tasklist::core::types::TaskId;
///
/// let id = TaskId::new(7).unwrap();
/// assert_eq!(id.get(), 7);
///
/// assert!(TaskId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct TaskId(u64);

impl TaskId {
    /// Create a new validated task id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput::NonPositiveId` if `id` is zero.
    pub fn new(id: u64) -> Result<Self, InvalidInput> {
        if id == 0 {
            return Err(InvalidInput::NonPositiveId);
        }
        Ok(Self(id))
    }

    /// Get the numeric value.
    pub fn get(self) -> u64 {
        self.0
    }

    /// The first id a store assigns.
    pub fn first() -> Self {
        Self(1)
    }

    /// The identifier one greater than this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl TryFrom<u64> for TaskId {
    type Error = InvalidInput;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<TaskId> for u64 {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

impl std::str::FromStr for TaskId {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u64 = s.trim().parse().map_err(|_| InvalidInput::NonPositiveId)?;
        Self::new(n)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated task title.
///
/// Titles are trimmed at construction and must be:
/// - Non-empty after trimming
/// - At most 200 characters after trimming
///
/// # Example
///
/// ```
/// use tasklist::core::types::Title;
///
/// let title = Title::new("  Water the plants ").unwrap();
/// assert_eq!(title.as_str(), "Water the plants");
///
/// assert!(Title::new("").is_err());
/// assert!(Title::new("   ").is_err());
/// assert!(Title::new("x".repeat(201)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Create a new validated title.
    ///
    /// Leading and trailing whitespace is stripped before validation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the trimmed title is empty or exceeds
    /// 200 characters.
    pub fn new(title: impl Into<String>) -> Result<Self, InvalidInput> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(InvalidInput::EmptyTitle);
        }
        let len = trimmed.chars().count();
        if len > MAX_TITLE_LEN {
            return Err(InvalidInput::TitleTooLong(len));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Title {
    type Error = InvalidInput;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> Self {
        title.0
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated task description.
///
/// Descriptions are optional on a task; when present they must be at most
/// 1000 characters. Unlike titles, descriptions are kept verbatim.
///
/// # Example
///
/// ```
/// use tasklist::core::types::Description;
///
/// let desc = Description::new("2% if they have it").unwrap();
/// assert_eq!(desc.as_str(), "2% if they have it");
///
/// assert!(Description::new("x".repeat(1001)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Create a new validated description.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput::DescriptionTooLong` if the description
    /// exceeds 1000 characters.
    pub fn new(description: impl Into<String>) -> Result<Self, InvalidInput> {
        let description = description.into();
        let len = description.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            return Err(InvalidInput::DescriptionTooLong(len));
        }
        Ok(Self(description))
    }

    /// Get the description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Description {
    type Error = InvalidInput;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.0
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item.
///
/// Field invariants live in the newtype constructors, so any `Task` that
/// exists is valid. The id never changes after creation; the store enforces
/// uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: Title,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new pending task.
    pub fn new(id: TaskId, title: Title, description: Option<Description>) -> Self {
        Self {
            id,
            title,
            description,
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod task_id {
        use super::*;

        #[test]
        fn positive_accepted() {
            assert!(TaskId::new(1).is_ok());
            assert!(TaskId::new(u64::MAX).is_ok());
        }

        #[test]
        fn zero_rejected() {
            assert_eq!(TaskId::new(0), Err(InvalidInput::NonPositiveId));
        }

        #[test]
        fn next_increments() {
            let id = TaskId::new(41).unwrap();
            assert_eq!(id.next().get(), 42);
        }

        #[test]
        fn parses_from_str() {
            let id: TaskId = "7".parse().unwrap();
            assert_eq!(id.get(), 7);
            let padded: TaskId = " 12 ".parse().unwrap();
            assert_eq!(padded.get(), 12);
        }

        #[test]
        fn bad_strings_rejected() {
            assert!("0".parse::<TaskId>().is_err());
            assert!("-3".parse::<TaskId>().is_err());
            assert!("abc".parse::<TaskId>().is_err());
            assert!("".parse::<TaskId>().is_err());
            assert!("1.5".parse::<TaskId>().is_err());
        }

        #[test]
        fn serde_roundtrip() {
            let id = TaskId::new(3).unwrap();
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, "3");
            let parsed: TaskId = serde_json::from_str(&json).unwrap();
            assert_eq!(id, parsed);
        }

        #[test]
        fn serde_rejects_zero() {
            assert!(serde_json::from_str::<TaskId>("0").is_err());
        }
    }

    mod title {
        use super::*;

        #[test]
        fn valid_titles() {
            assert!(Title::new("Buy milk").is_ok());
            assert!(Title::new("a").is_ok());
            assert!(Title::new("x".repeat(200)).is_ok());
        }

        #[test]
        fn trims_whitespace() {
            let title = Title::new("  padded  ").unwrap();
            assert_eq!(title.as_str(), "padded");
        }

        #[test]
        fn empty_rejected() {
            assert_eq!(Title::new(""), Err(InvalidInput::EmptyTitle));
        }

        #[test]
        fn whitespace_only_rejected() {
            assert_eq!(Title::new("   "), Err(InvalidInput::EmptyTitle));
            assert_eq!(Title::new("\t\n"), Err(InvalidInput::EmptyTitle));
        }

        #[test]
        fn too_long_rejected() {
            let long = "x".repeat(201);
            assert_eq!(Title::new(long), Err(InvalidInput::TitleTooLong(201)));
        }

        #[test]
        fn length_counted_after_trimming() {
            // 200 content chars plus surrounding whitespace is still valid
            let padded = format!("  {}  ", "x".repeat(200));
            assert!(Title::new(padded).is_ok());
        }

        #[test]
        fn length_counted_in_chars_not_bytes() {
            let title = "é".repeat(200);
            assert!(Title::new(title).is_ok());
            assert!(Title::new("é".repeat(201)).is_err());
        }

        #[test]
        fn serde_roundtrip() {
            let title = Title::new("Call the bank").unwrap();
            let json = serde_json::to_string(&title).unwrap();
            let parsed: Title = serde_json::from_str(&json).unwrap();
            assert_eq!(title, parsed);
        }

        #[test]
        fn serde_rejects_blank() {
            assert!(serde_json::from_str::<Title>("\"  \"").is_err());
        }
    }

    mod description {
        use super::*;

        #[test]
        fn valid_descriptions() {
            assert!(Description::new("").is_ok());
            assert!(Description::new("details").is_ok());
            assert!(Description::new("x".repeat(1000)).is_ok());
        }

        #[test]
        fn kept_verbatim() {
            let desc = Description::new("  spaced  ").unwrap();
            assert_eq!(desc.as_str(), "  spaced  ");
        }

        #[test]
        fn too_long_rejected() {
            let long = "x".repeat(1001);
            assert_eq!(
                Description::new(long),
                Err(InvalidInput::DescriptionTooLong(1001))
            );
        }

        #[test]
        fn serde_roundtrip() {
            let desc = Description::new("before noon").unwrap();
            let json = serde_json::to_string(&desc).unwrap();
            let parsed: Description = serde_json::from_str(&json).unwrap();
            assert_eq!(desc, parsed);
        }
    }

    mod task {
        use super::*;

        fn sample() -> Task {
            Task::new(
                TaskId::new(1).unwrap(),
                Title::new("Write report").unwrap(),
                Some(Description::new("quarterly numbers").unwrap()),
            )
        }

        #[test]
        fn new_task_is_pending() {
            assert!(!sample().completed);
        }

        #[test]
        fn serde_roundtrip() {
            let task = sample();
            let json = serde_json::to_string(&task).unwrap();
            let parsed: Task = serde_json::from_str(&json).unwrap();
            assert_eq!(task, parsed);
        }

        #[test]
        fn description_omitted_when_absent() {
            let task = Task::new(TaskId::new(2).unwrap(), Title::new("Quick").unwrap(), None);
            let json = serde_json::to_string(&task).unwrap();
            assert!(!json.contains("description"));
        }

        #[test]
        fn serde_rejects_invalid_fields() {
            assert!(serde_json::from_str::<Task>(r#"{"id":0,"title":"ok"}"#).is_err());
            assert!(serde_json::from_str::<Task>(r#"{"id":1,"title":"   "}"#).is_err());
        }

        #[test]
        fn completed_defaults_to_false_in_json() {
            let task: Task = serde_json::from_str(r#"{"id":1,"title":"ok"}"#).unwrap();
            assert!(!task.completed);
            assert!(task.description.is_none());
        }
    }
}
