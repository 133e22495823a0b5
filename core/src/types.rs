//! The todo record.

/// A single todo item.
///
/// `id` is a string rather than a `Uuid` because the seed record uses the
/// fixed id `"example"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub name: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed: false,
        }
    }

    /// Path of the record's resource, e.g. `/todos/example`.
    pub fn path(&self) -> String {
        format!("/todos/{}", self.id)
    }

    /// Path toggled by the completion checkbox.
    pub fn completion_path(&self) -> String {
        format!("/todos/{}/completion", self.id)
    }

    /// DOM id of the rendered list item.
    pub fn dom_id(&self) -> String {
        format!("todo-{}", self.id)
    }
}
