use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use bincode::{
    config::{BigEndian, WithOtherEndian},
    DefaultOptions, Options,
};
use sled::Db;

use super::{StoreError, TodoStore};
use crate::models::Todo;

const KEY_PREFIX: &str = "todo:";

/// Sled-backed backend. Each todo is bincode-encoded under a zero-padded
/// `todo:{id}` key so a prefix scan yields records in id order; ids come from
/// sled's monotonic id generator.
pub struct SledStore {
    handle: Db,
    encoder: WithOtherEndian<DefaultOptions, BigEndian>,
}

impl SledStore {
    pub fn open(path: &str) -> Result<Self> {
        let handle = sled::open(path).with_context(|| format!("opening sled db at {path}"))?;
        let encoder = bincode::options().with_big_endian();
        Ok(Self { handle, encoder })
    }

    fn key(id: u64) -> String {
        format!("{KEY_PREFIX}{id:020}")
    }

    fn encode(&self, todo: &Todo) -> Result<Vec<u8>> {
        Ok(self.encoder.serialize(todo)?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Todo> {
        Ok(self.encoder.deserialize(bytes)?)
    }

    fn fetch(&self, id: u64) -> Result<Option<Todo>> {
        match self.handle.get(Self::key(id))? {
            Some(bytes) => Ok(Some(self.decode(&bytes)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl TodoStore for SledStore {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        let mut todos = Vec::new();
        for item in self.handle.scan_prefix(KEY_PREFIX) {
            let (_, bytes) = item.map_err(|e| anyhow!(e))?;
            todos.push(self.decode(&bytes)?);
        }
        Ok(todos)
    }

    async fn add(&self, content: String) -> Result<Todo, StoreError> {
        let id = self.handle.generate_id().map_err(|e| anyhow!(e))? + 1;
        let todo = Todo::new(id, content);
        self.handle
            .insert(Self::key(id), self.encode(&todo)?)
            .map_err(|e| anyhow!(e))?;
        Ok(todo)
    }

    async fn toggle(&self, id: u64) -> Result<Todo, StoreError> {
        let mut todo = self.fetch(id)?.ok_or(StoreError::NotFound(id))?;
        todo.completed = !todo.completed;
        self.handle
            .insert(Self::key(id), self.encode(&todo)?)
            .map_err(|e| anyhow!(e))?;
        Ok(todo)
    }

    async fn remove(&self, id: u64) -> Result<(), StoreError> {
        self.handle.remove(Self::key(id)).map_err(|e| anyhow!(e))?;
        Ok(())
    }
}

impl std::fmt::Debug for SledStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SledStore").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Result<(String, SledStore)> {
        let tick = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_nanos();
        let path = format!("test_db_{}", tick);
        let store = SledStore::open(&path)?;
        Ok((path, store))
    }
    fn teardown((path, store): (String, SledStore)) -> Result<()> {
        drop(store);
        std::fs::remove_dir_all(path)?;
        Ok(())
    }

    #[tokio::test]
    async fn add_assigns_fresh_ids() -> Result<()> {
        let (path, store) = setup()?;
        let a = store.add("first".to_string()).await?;
        let b = store.add("second".to_string()).await?;
        assert_ne!(a.id, b.id);
        assert!(!a.completed);
        teardown((path, store))?;
        Ok(())
    }

    #[tokio::test]
    async fn list_returns_records_in_id_order() -> Result<()> {
        let (path, store) = setup()?;
        let a = store.add("first".to_string()).await?;
        let b = store.add("second".to_string()).await?;
        let todos = store.list().await?;
        assert_eq!(todos, vec![a, b]);
        teardown((path, store))?;
        Ok(())
    }

    #[tokio::test]
    async fn toggle_persists_the_flip() -> Result<()> {
        let (path, store) = setup()?;
        let todo = store.add("flip me".to_string()).await?;
        let flipped = store.toggle(todo.id).await?;
        assert!(flipped.completed);
        let listed = store.list().await?;
        assert!(listed[0].completed);
        teardown((path, store))?;
        Ok(())
    }

    #[tokio::test]
    async fn toggle_unknown_id_is_not_found() -> Result<()> {
        let (path, store) = setup()?;
        let err = store.toggle(9999).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(9999)));
        teardown((path, store))?;
        Ok(())
    }

    #[tokio::test]
    async fn remove_deletes_and_tolerates_repeats() -> Result<()> {
        let (path, store) = setup()?;
        let todo = store.add("gone soon".to_string()).await?;
        store.remove(todo.id).await?;
        assert!(store.list().await?.is_empty());
        store.remove(todo.id).await?;
        teardown((path, store))?;
        Ok(())
    }
}
