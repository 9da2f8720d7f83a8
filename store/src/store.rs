//! The client-side cache and mutation coordinator for the todo collection.
//!
//! # Design
//! `TodoStore` mediates between UI intents and the remote collection. The
//! local `items` vec is a cache, never a source of truth: every mutation is
//! applied only after the service confirms it, and a failed call leaves the
//! cache exactly as it was. Busy flags are set at operation entry and
//! cleared before the outcome is inspected, so they release on every path.
//!
//! Operations take `&mut self` and block on one round-trip each, so they are
//! naturally serialized; a toggle issued after a successful remove of the
//! same id fails with `NotFound` instead of corrupting the cache. There is
//! no retry and no cancellation — each failure is terminal for that call.

use uuid::Uuid;

use crate::error::StoreError;
use crate::notice::Notice;
use crate::service::RemoteTodoService;
use crate::types::{NewTodo, TodoItem, UpdateTodo};

/// Minimum length (in characters, exclusive) for a todo's text before a
/// create request is issued. Shorter input is silently ignored, mirroring
/// the disabled add control in the UI.
const MIN_TEXT_LEN: usize = 3;

/// Client-side store for a remote todo collection.
pub struct TodoStore<S> {
    service: S,
    items: Vec<TodoItem>,
    is_loading: bool,
    is_submitting: bool,
    notices: Vec<Notice>,
}

impl<S: RemoteTodoService> TodoStore<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            items: Vec::new(),
            is_loading: false,
            is_submitting: false,
            notices: Vec::new(),
        }
    }

    /// The cached collection, in display order (newest first after local
    /// adds, otherwise server order).
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Whether a list fetch or a mutation round-trip is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether a create round-trip is in flight. Tracked separately so the
    /// UI can disable the add control without blanking the whole list.
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Drain the queued notifications for the UI to display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Items to render given the view's show-finished toggle. Pure filter;
    /// never touches the cache.
    pub fn visible_items(&self, show_finished: bool) -> impl Iterator<Item = &TodoItem> {
        self.items
            .iter()
            .filter(move |item| show_finished || !item.completed)
    }

    /// Fetch the full list and replace the cache wholesale.
    pub fn load(&mut self) -> Result<(), StoreError> {
        self.is_loading = true;
        let result = self.service.list();
        self.is_loading = false;

        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "loaded todos");
                self.items = items;
                Ok(())
            }
            Err(e) => Err(self.fail(StoreError::Fetch(e))),
        }
    }

    /// Create a new item and prepend the server-confirmed record.
    ///
    /// Text of [`MIN_TEXT_LEN`] characters or fewer is a silent no-op: no
    /// request is made and nothing changes. The UI mirrors this guard by
    /// disabling its add control.
    pub fn add(&mut self, text: &str) -> Result<(), StoreError> {
        if text.chars().count() <= MIN_TEXT_LEN {
            return Ok(());
        }

        let input = NewTodo {
            text: text.to_string(),
            completed: false,
        };

        self.is_submitting = true;
        let result = self.service.create(&input);
        self.is_submitting = false;

        match result {
            Ok(created) => {
                tracing::debug!(id = %created.id, "todo created");
                self.items.insert(0, created);
                self.notices.push(Notice::success("Todo added successfully!"));
                Ok(())
            }
            Err(e) => Err(self.fail(StoreError::Create(e))),
        }
    }

    /// Flip an item's completion flag via a full-record update, then store
    /// the record the server echoes back — the server's representation is
    /// authoritative, not the locally flipped value.
    pub fn toggle_completed(&mut self, id: Uuid) -> Result<(), StoreError> {
        let Some(index) = self.position(id) else {
            return Err(self.not_found(id));
        };
        let input = UpdateTodo::toggled_from(&self.items[index]);

        self.is_loading = true;
        let result = self.service.update(id, &input);
        self.is_loading = false;

        match result {
            Ok(updated) => {
                tracing::debug!(id = %id, completed = updated.completed, "todo updated");
                self.items[index] = updated;
                self.notices.push(Notice::success("Todo status updated!"));
                Ok(())
            }
            Err(e) => Err(self.fail(StoreError::Update(e))),
        }
    }

    /// Delete an item and drop it from the cache once confirmed.
    pub fn remove(&mut self, id: Uuid) -> Result<(), StoreError> {
        if self.position(id).is_none() {
            return Err(self.not_found(id));
        }

        self.is_loading = true;
        let result = self.service.delete(id);
        self.is_loading = false;

        match result {
            Ok(()) => {
                tracing::debug!(id = %id, "todo deleted");
                self.items.retain(|item| item.id != id);
                self.notices
                    .push(Notice::success("Todo deleted successfully!"));
                Ok(())
            }
            Err(e) => Err(self.fail(StoreError::Delete(e))),
        }
    }

    /// Start editing an item: return its text for the caller to prefill,
    /// and delete the item as a side effect.
    ///
    /// Editing is modeled as delete-then-recreate: the record is removed
    /// from the remote service immediately, and the caller is expected to
    /// resubmit the revised text via [`add`](Self::add), which yields a new
    /// server-assigned id. If the delete fails, nothing changes and no text
    /// is returned.
    pub fn begin_edit(&mut self, id: Uuid) -> Result<String, StoreError> {
        let Some(index) = self.position(id) else {
            return Err(self.not_found(id));
        };
        let text = self.items[index].text.clone();
        self.remove(id)?;
        Ok(text)
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Record a remote failure: diagnostic log entry plus an error notice.
    /// The cache is untouched by construction — callers only reach here
    /// before applying any change.
    fn fail(&mut self, err: StoreError) -> StoreError {
        tracing::error!(error = %err, "todo operation failed");
        self.notices.push(Notice::error(err.message()));
        err
    }

    /// A caller-contract violation, not a remote failure: the UI must not
    /// address ids absent from the collection. Logged but not toasted.
    fn not_found(&self, id: Uuid) -> StoreError {
        tracing::warn!(id = %id, "operation on unknown todo id");
        StoreError::NotFound(id)
    }
}
