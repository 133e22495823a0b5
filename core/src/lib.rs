//! In-memory todo domain for the htmx demo server.
//!
//! # Overview
//! Holds the ordered todo list that the server's handlers read and mutate.
//! Nothing here touches the network or a runtime; the server owns a single
//! `TodoStore` and decides how to share it between requests.
//!
//! # Design
//! - Insertion order is display order, so the store is a `Vec`, not a map.
//! - Every id-keyed lookup returns a `Result`, and callers must handle
//!   `StoreError::NotFound` before rendering anything.
//! - Names are validated here rather than trusting the client's `required`
//!   attribute.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::TodoStore;
pub use types::Todo;
