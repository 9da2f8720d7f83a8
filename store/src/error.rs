//! Error types for the todo store and its remote collaborator.
//!
//! # Design
//! Two layers. `ServiceError` covers everything that can go wrong talking to
//! the remote service; the store treats all of them uniformly — a non-2xx
//! status, a transport fault, and a malformed body are each "that call
//! failed," with the detail kept only for diagnostics. `StoreError` wraps a
//! `ServiceError` in the operation that failed (fetch, create, update,
//! delete), plus a `NotFound` variant for calls that address an id absent
//! from the local collection — a caller-contract violation, raised before
//! any request is sent.

use std::fmt;

use uuid::Uuid;

/// A failed interaction with the remote todo service.
#[derive(Debug)]
pub enum ServiceError {
    /// The server answered with a non-2xx status.
    Http { status: u16, body: String },

    /// The request never completed (connect failure, timeout, broken pipe).
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ServiceError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ServiceError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ServiceError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ServiceError {}

/// A failed `TodoStore` operation. Local state is guaranteed unchanged
/// whenever one of these is returned.
#[derive(Debug)]
pub enum StoreError {
    /// `load` could not fetch the list.
    Fetch(ServiceError),

    /// `add` could not create the item.
    Create(ServiceError),

    /// `toggle_completed` could not update the item.
    Update(ServiceError),

    /// `remove` (or the delete inside `begin_edit`) could not delete the item.
    Delete(ServiceError),

    /// The operation addressed an id not present in the local collection.
    NotFound(Uuid),
}

impl StoreError {
    /// The user-facing notification text for this failure.
    pub fn message(&self) -> &'static str {
        match self {
            StoreError::Fetch(_) => "Failed to fetch todos!",
            StoreError::Create(_) => "Failed to add todo!",
            StoreError::Update(_) => "Failed to update todo status!",
            StoreError::Delete(_) => "Failed to delete todo!",
            StoreError::NotFound(_) => "Todo not found!",
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Fetch(e) => write!(f, "fetch failed: {e}"),
            StoreError::Create(e) => write!(f, "create failed: {e}"),
            StoreError::Update(e) => write!(f, "update failed: {e}"),
            StoreError::Delete(e) => write!(f, "delete failed: {e}"),
            StoreError::NotFound(id) => write!(f, "no todo with id {id}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Fetch(e)
            | StoreError::Create(e)
            | StoreError::Update(e)
            | StoreError::Delete(e) => Some(e),
            StoreError::NotFound(_) => None,
        }
    }
}
