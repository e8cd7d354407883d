use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, TodoStore};
use crate::models::Todo;

/// In-memory backend. Insertion order is the list order; ids come from an
/// atomic counter so concurrent adds never collide.
#[derive(Debug)]
pub struct MemoryStore {
    todos: RwLock<Vec<Todo>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            todos: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// The two-item starter list the demo boots with.
    pub fn seeded() -> Self {
        Self {
            todos: RwLock::new(vec![
                Todo::new(1, "Buy groceries".to_string()),
                Todo::new(2, "Learn Typescript".to_string()),
            ]),
            next_id: AtomicU64::new(3),
        }
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.todos.read().await.clone())
    }

    async fn add(&self, content: String) -> Result<Todo, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let todo = Todo::new(id, content);
        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn toggle(&self, id: u64) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;
        todo.completed = !todo.completed;
        Ok(todo.clone())
    }

    async fn remove(&self, id: u64) -> Result<(), StoreError> {
        self.todos.write().await.retain(|todo| todo.id != id);
        Ok(())
    }
}
