//! Ordered, in-memory collection of todo records.
//!
//! # Design
//! Records live in a `Vec` because insertion order is display order and the
//! list only ever holds a handful of items; linear lookups are fine. Ids are
//! time-ordered UUIDv7 strings, so they are derived from the creation
//! timestamp while staying unique within a millisecond.

use uuid::Uuid;

use crate::error::StoreError;
use crate::types::Todo;

/// Id of the record `TodoStore::seeded` starts with.
pub const SEED_ID: &str = "example";

#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the single `Example` record the demo page starts with.
    pub fn seeded() -> Self {
        Self {
            todos: vec![Todo::new(SEED_ID, "Example")],
        }
    }

    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn find(&self, id: &str) -> Result<&Todo, StoreError> {
        self.todos
            .iter()
            .find(|todo| todo.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Append a new pending record and return a reference to it.
    pub fn create(&mut self, name: &str) -> Result<&Todo, StoreError> {
        let name = validate_name(name)?;
        let id = self.fresh_id();
        self.todos.push(Todo::new(id, name));
        Ok(&self.todos[self.todos.len() - 1])
    }

    pub fn set_completed(&mut self, id: &str, completed: bool) -> Result<&Todo, StoreError> {
        let todo = self.find_mut(id)?;
        todo.completed = completed;
        Ok(todo)
    }

    /// Overwrite the name of a record. `id` and `completed` are untouched.
    pub fn rename(&mut self, id: &str, name: &str) -> Result<&Todo, StoreError> {
        let name = validate_name(name)?;
        let todo = self.find_mut(id)?;
        todo.name = name.to_string();
        Ok(todo)
    }

    /// Remove a record, returning it. Deleting an absent id is a no-op.
    pub fn delete(&mut self, id: &str) -> Option<Todo> {
        let index = self.todos.iter().position(|todo| todo.id == id)?;
        Some(self.todos.remove(index))
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Todo, StoreError> {
        self.todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::now_v7().to_string();
            if self.find(&id).is_err() {
                return id;
            }
        }
    }
}

fn validate_name(name: &str) -> Result<&str, StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::EmptyName);
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_holds_example() {
        let store = TodoStore::seeded();
        assert_eq!(store.len(), 1);
        let todo = store.find(SEED_ID).unwrap();
        assert_eq!(todo.name, "Example");
        assert!(!todo.completed);
    }

    #[test]
    fn create_appends_pending_record() {
        let mut store = TodoStore::seeded();
        let before = store.len();

        let created = store.create("Buy milk").unwrap().clone();
        assert_eq!(created.name, "Buy milk");
        assert!(!created.completed);
        assert!(!created.id.is_empty());

        assert_eq!(store.len(), before + 1);
        assert_eq!(store.list().last(), Some(&created));
    }

    #[test]
    fn create_assigns_unique_ids() {
        let mut store = TodoStore::new();
        for i in 0..50 {
            store.create(&format!("item {i}")).unwrap();
        }
        let mut ids: Vec<_> = store.list().iter().map(|t| t.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut store = TodoStore::new();
        store.create("first").unwrap();
        store.create("second").unwrap();
        store.create("third").unwrap();
        let names: Vec<_> = store.list().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn create_rejects_blank_name() {
        let mut store = TodoStore::new();
        assert_eq!(store.create("").unwrap_err(), StoreError::EmptyName);
        assert_eq!(store.create("   ").unwrap_err(), StoreError::EmptyName);
        assert!(store.is_empty());
    }

    #[test]
    fn create_trims_name() {
        let mut store = TodoStore::new();
        let todo = store.create("  Walk dog \n").unwrap();
        assert_eq!(todo.name, "Walk dog");
    }

    #[test]
    fn complete_then_uncomplete_restores_pending() {
        let mut store = TodoStore::seeded();

        let done = store.set_completed(SEED_ID, true).unwrap();
        assert!(done.completed);

        let undone = store.set_completed(SEED_ID, false).unwrap();
        assert!(!undone.completed);
        assert_eq!(undone.id, SEED_ID);
        assert_eq!(undone.name, "Example");
    }

    #[test]
    fn rename_changes_only_name() {
        let mut store = TodoStore::seeded();
        store.set_completed(SEED_ID, true).unwrap();

        let renamed = store.rename(SEED_ID, "Renamed").unwrap();
        assert_eq!(renamed.id, SEED_ID);
        assert_eq!(renamed.name, "Renamed");
        assert!(renamed.completed);
    }

    #[test]
    fn rename_rejects_blank_name_and_keeps_old_one() {
        let mut store = TodoStore::seeded();
        assert_eq!(store.rename(SEED_ID, " ").unwrap_err(), StoreError::EmptyName);
        assert_eq!(store.find(SEED_ID).unwrap().name, "Example");
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut store = TodoStore::seeded();
        let missing = StoreError::NotFound("nope".to_string());
        assert_eq!(store.find("nope").unwrap_err(), missing);
        assert_eq!(store.set_completed("nope", true).unwrap_err(), missing);
        assert_eq!(store.rename("nope", "x").unwrap_err(), missing);
    }

    #[test]
    fn delete_removes_exactly_that_record() {
        let mut store = TodoStore::seeded();
        let id = store.create("Temporary").unwrap().id.clone();

        let removed = store.delete(&id).unwrap();
        assert_eq!(removed.name, "Temporary");
        assert_eq!(store.len(), 1);
        assert!(store.find(&id).is_err());
        assert!(store.find(SEED_ID).is_ok());
    }

    #[test]
    fn delete_absent_id_is_a_noop() {
        let mut store = TodoStore::seeded();
        assert!(store.delete("nope").is_none());
        assert_eq!(store.list(), TodoStore::seeded().list());
    }
}
