//! Todo store service

use crate::error::Result;
use crate::storage::TodoStorage;
use crate::todo::{Todo, TodoId};
use chrono::Utc;

/// Fixed storage-backend key under which the entire list is persisted.
pub const STORAGE_KEY: &str = "todos";

/// In-memory ordered todo collection with a persistence bridge.
///
/// Every mutation persists the whole list before returning, so the
/// storage backend is never left stale behind memory. Storage failures
/// propagate to the caller.
pub struct TodoStore<S: TodoStorage> {
    storage: S,
    todos: Vec<Todo>,
    last_id: TodoId,
}

impl<S: TodoStorage> TodoStore<S> {
    /// Create an empty store. Call [`load`](Self::load) to pick up a
    /// previously persisted list.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            todos: Vec::new(),
            last_id: 0,
        }
    }

    /// Append a new todo with a fresh id and `completed = false`, then
    /// persist. Empty text is accepted.
    pub fn add_todo(&mut self, text: impl Into<String>) -> Result<()> {
        let todo = Todo::new(self.next_id(), text);
        tracing::debug!(id = todo.id, "adding todo");
        self.todos.push(todo);
        self.save()
    }

    /// Flip the completion flag of the first todo matching `id`, then
    /// persist. Unknown ids are a silent no-op and nothing is written.
    pub fn toggle_todo_completion(&mut self, id: TodoId) -> Result<()> {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.completed = !todo.completed;
            tracing::debug!(id, completed = todo.completed, "toggled todo");
            self.save()
        } else {
            Ok(())
        }
    }

    /// Remove every todo matching `id`, then persist. The list is
    /// re-written even when nothing matched.
    pub fn remove_todo(&mut self, id: TodoId) -> Result<()> {
        self.todos.retain(|todo| todo.id != id);
        tracing::debug!(id, remaining = self.todos.len(), "removed todo");
        self.save()
    }

    /// Replace the text of the first todo matching `id`, then persist.
    /// Unknown ids are a silent no-op and nothing is written.
    pub fn edit_todo(&mut self, id: TodoId, new_text: impl Into<String>) -> Result<()> {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.text = new_text.into();
            tracing::debug!(id, "edited todo");
            self.save()
        } else {
            Ok(())
        }
    }

    /// Serialize the whole list and write it under [`STORAGE_KEY`],
    /// fully overwriting any prior value.
    pub fn save(&self) -> Result<()> {
        let contents = serde_json::to_string(&self.todos)?;
        self.storage.set(STORAGE_KEY, &contents)?;
        tracing::debug!(count = self.todos.len(), "saved todo list");
        Ok(())
    }

    /// Replace the in-memory list with the persisted one. An absent
    /// key leaves the list unchanged; a malformed value returns a
    /// serialization error with the in-memory list intact.
    pub fn load(&mut self) -> Result<()> {
        let Some(contents) = self.storage.get(STORAGE_KEY)? else {
            tracing::debug!("no persisted todo list, keeping current state");
            return Ok(());
        };
        let todos: Vec<Todo> = serde_json::from_str(&contents).map_err(|err| {
            tracing::warn!(%err, "persisted todo list is malformed");
            err
        })?;
        // Keep id generation ahead of everything we just loaded.
        self.last_id = todos.iter().map(|todo| todo.id).max().unwrap_or(0).max(self.last_id);
        tracing::debug!(count = todos.len(), "loaded todo list");
        self.todos = todos;
        Ok(())
    }

    /// All todos in insertion order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// First todo matching `id`, if any.
    pub fn get_todo(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    // Wall-clock milliseconds, bumped past the previous id so two
    // additions within one clock tick still get distinct ids.
    fn next_id(&mut self) -> TodoId {
        self.last_id = Utc::now().timestamp_millis().max(self.last_id + 1);
        self.last_id
    }
}
