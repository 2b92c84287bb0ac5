//! Document-store contract for the catalog.
//!
//! The store holds two collections, `components` and `steps`, rebuilt from
//! the seed set on every process start and immutable afterwards. All backends
//! (MongoDB, memory) implement this trait; request handlers only see the
//! trait object.

use async_trait::async_trait;
use std::sync::RwLock;

use ludo_core::{ComponentId, Error, Result};

use crate::model::{Component, DifficultyLevel, Step};

/// Document store holding the `components` and `steps` collections.
///
/// Reads are plain queries with no caching; every call is one store round
/// trip. The `replace_*` operations are delete-all followed by insert-all:
/// a reader interleaved with a replace may observe a transient empty
/// collection, and a failure partway leaves the collection partially
/// written. Callers own the single-writer contract.
#[async_trait]
pub trait CatalogStore: Send + Sync + 'static {
    /// Replaces the entire `components` collection.
    async fn replace_components(&self, components: Vec<Component>) -> Result<()>;

    /// Replaces the entire `steps` collection.
    async fn replace_steps(&self, steps: Vec<Step>) -> Result<()>;

    /// Lists components, optionally filtered by difficulty, ordered by
    /// ascending `step_order`.
    ///
    /// Returns an empty vec if nothing matches; never errors on no match.
    async fn list_components(
        &self,
        difficulty: Option<DifficultyLevel>,
    ) -> Result<Vec<Component>>;

    /// Fetches a single component by ID.
    ///
    /// Returns `None` if no document has that ID.
    async fn get_component(&self, id: &ComponentId) -> Result<Option<Component>>;

    /// Lists all steps ordered by ascending `step_number`.
    async fn list_steps(&self) -> Result<Vec<Step>>;

    /// Fetches a single step by its sequence number.
    ///
    /// Returns `None` if no document has that number.
    async fn get_step(&self, step_number: u32) -> Result<Option<Step>>;

    /// Shallow connectivity probe for readiness checks.
    async fn ping(&self) -> Result<()>;
}

/// In-memory catalog store for debug mode and tests.
///
/// Thread-safe via `RwLock`. Not suitable for production.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

#[derive(Debug, Default)]
struct Collections {
    components: Vec<Component>,
    steps: Vec<Step>,
}

impl MemoryStore {
    /// Creates a new empty memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Collections>> {
        self.inner
            .read()
            .map_err(|_| Error::storage("memory store lock poisoned"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Collections>> {
        self.inner
            .write()
            .map_err(|_| Error::storage("memory store lock poisoned"))
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn replace_components(&self, components: Vec<Component>) -> Result<()> {
        let mut inner = self.write()?;
        inner.components.clear();
        inner.components.extend(components);
        Ok(())
    }

    async fn replace_steps(&self, steps: Vec<Step>) -> Result<()> {
        let mut inner = self.write()?;
        inner.steps.clear();
        inner.steps.extend(steps);
        Ok(())
    }

    async fn list_components(
        &self,
        difficulty: Option<DifficultyLevel>,
    ) -> Result<Vec<Component>> {
        let inner = self.read()?;
        let mut components: Vec<Component> = inner
            .components
            .iter()
            .filter(|c| difficulty.is_none_or(|d| c.difficulty_level == d))
            .cloned()
            .collect();
        components.sort_by_key(|c| c.step_order);
        Ok(components)
    }

    async fn get_component(&self, id: &ComponentId) -> Result<Option<Component>> {
        let inner = self.read()?;
        Ok(inner.components.iter().find(|c| c.id == *id).cloned())
    }

    async fn list_steps(&self) -> Result<Vec<Step>> {
        let inner = self.read()?;
        let mut steps = inner.steps.clone();
        steps.sort_by_key(|s| s.step_number);
        Ok(steps)
    }

    async fn get_step(&self, step_number: u32) -> Result<Option<Step>> {
        let inner = self.read()?;
        Ok(inner
            .steps
            .iter()
            .find(|s| s.step_number == step_number)
            .cloned())
    }

    async fn ping(&self) -> Result<()> {
        self.read().map(|_| ())
    }
}
