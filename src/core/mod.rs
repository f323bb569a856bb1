//! core
//!
//! Core domain types and operations.
//!
//! # Modules
//!
//! - [`types`] - Strong types: TaskId, Title, Description, Task
//! - [`store`] - In-memory task storage and its operations
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Operations validate before mutating; failures never leave partial state
//! - All operations are deterministic and synchronous

pub mod store;
pub mod types;
