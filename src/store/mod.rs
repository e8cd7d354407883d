pub mod memory;
pub mod persistent;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Todo;

pub use memory::MemoryStore;
pub use persistent::SledStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(u64),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Backend seam for the todo list. Implementations synchronize internally,
/// so handlers share a plain `Arc<dyn TodoStore>`.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// All current todos, in a stable order.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Creates a todo with a fresh unique id and `completed = false`.
    /// Emptiness of `content` is checked at the route boundary, not here.
    async fn add(&self, content: String) -> Result<Todo, StoreError>;

    /// Flips the completed flag and returns the updated record.
    async fn toggle(&self, id: u64) -> Result<Todo, StoreError>;

    /// Deletes the todo. An unknown id is a quiet no-op, unlike `toggle`.
    async fn remove(&self, id: u64) -> Result<(), StoreError>;
}
