//! Domain DTOs for the todo collection.
//!
//! # Design
//! These types mirror the remote service's schema but are defined
//! independently of the mock-server crate; the end-to-end test catches any
//! schema drift between the two. Ids are server-assigned at creation time —
//! the client never fabricates one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item as confirmed by the remote service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
}

/// Request payload for creating a new todo. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTodo {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for updating an existing todo. The PUT carries the full
/// record; the server replaces both fields and echoes back the stored
/// representation, which is authoritative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodo {
    pub text: String,
    pub completed: bool,
}

impl UpdateTodo {
    /// Full-record payload for the given item with its completion flag
    /// flipped.
    pub fn toggled_from(item: &TodoItem) -> Self {
        Self {
            text: item.text.clone(),
            completed: !item.completed,
        }
    }
}
