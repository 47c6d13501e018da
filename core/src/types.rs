//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates. Field
//! names follow the service's camelCase wire format (`userId`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-assigned todo identifier.
pub type TodoId = u64;

/// Identifier of the user owning a todo collection.
pub type UserId = u64;

/// Owner used when a client is built without an explicit user id.
pub const DEFAULT_USER_ID: UserId = 2048;

/// A single todo item returned by the API.
///
/// `user_id` is optional because the service may leave it out of list
/// responses; it is never required for decoding. Fields the client does not
/// model are kept in `extra` and serialized back out unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of a successful delete.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Deleted {
    /// Empty body, `null` or `{}`.
    Empty,
    /// The deleted todo, as the server last knew it.
    Todo(Todo),
    /// Any other body, returned as sent. Non-JSON text becomes a string.
    Other(Value),
}

impl Deleted {
    pub fn todo(&self) -> Option<&Todo> {
        match self {
            Deleted::Todo(todo) => Some(todo),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Deleted::Empty)
    }
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub user_id: UserId,
    pub title: String,
    pub completed: bool,
}

/// Caller input for an update: which todo, and the values to set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoUpdate {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

/// Wire body of an update. The id travels in the path, the owner is never
/// re-sent.
#[derive(Debug, Serialize)]
pub(crate) struct TodoPatch<'a> {
    pub title: &'a str,
    pub completed: bool,
}

impl<'a> From<&'a TodoUpdate> for TodoPatch<'a> {
    fn from(update: &'a TodoUpdate) -> Self {
        Self {
            title: &update.title,
            completed: update.completed,
        }
    }
}
