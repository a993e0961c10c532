//! # Todo Store
//!
//! Client-side state container for a todo list: add, toggle, remove,
//! edit, and persist items to a synchronous key-value storage backend.
//! Every mutation writes the whole list back to storage before
//! returning.

pub mod error;
pub mod storage;
pub mod store;
pub mod todo;

// Re-exports
pub use error::{Result, TodoError};
pub use storage::{FileTodoStorage, MemoryTodoStorage, TodoStorage};
pub use store::{TodoStore, STORAGE_KEY};
pub use todo::{Todo, TodoId};
