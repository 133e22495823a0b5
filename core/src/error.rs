//! Error types for the todo store.
//!
//! # Design
//! `NotFound` carries the requested id so the server can log what was
//! missing. Name validation has its own variant because the HTTP layer maps
//! it to a different status than a missing record.

use thiserror::Error;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with the given id exists.
    #[error("todo {0:?} not found")]
    NotFound(String),

    /// The supplied name was empty or only whitespace.
    #[error("todo name must not be empty")]
    EmptyName,
}
