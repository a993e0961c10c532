//! Todo data structures

use serde::{Deserialize, Serialize};

/// Todo identifier. Millisecond-timestamp magnitude, assigned by the
/// store at creation time and immutable afterwards.
pub type TodoId = i64;

/// One task record: identifier, text, completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique within the list in normal operation (see `TodoStore` id
    /// generation); duplicates are tolerated, not rejected.
    pub id: TodoId,

    /// Human-readable content.
    pub text: String,

    /// Completion flag, false at creation.
    pub completed: bool,
}

impl Todo {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}
