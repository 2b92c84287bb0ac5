//! Read-only accessors over the catalog store.
//!
//! Thin pass-throughs with no caching; every call re-queries the store.
//! Request handlers construct a reader per request from the shared store
//! handle.

use std::sync::Arc;

use ludo_core::{ComponentId, Result};

use crate::model::{Component, DifficultyLevel, Step};
use crate::store::CatalogStore;

/// Read-only view of the catalog.
#[derive(Clone)]
pub struct CatalogReader {
    store: Arc<dyn CatalogStore>,
}

impl std::fmt::Debug for CatalogReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogReader")
            .field("store", &"<CatalogStore>")
            .finish()
    }
}

impl CatalogReader {
    /// Creates a reader over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Lists components, optionally filtered by difficulty, ordered by
    /// ascending `step_order`. Returns an empty vec when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store query fails.
    pub async fn list_components(
        &self,
        difficulty: Option<DifficultyLevel>,
    ) -> Result<Vec<Component>> {
        self.store.list_components(difficulty).await
    }

    /// Fetches a single component by ID, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store query fails.
    pub async fn get_component(&self, id: &ComponentId) -> Result<Option<Component>> {
        self.store.get_component(id).await
    }

    /// Lists all steps ordered by ascending `step_number`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store query fails.
    pub async fn list_steps(&self) -> Result<Vec<Step>> {
        self.store.list_steps().await
    }

    /// Fetches a single step by its sequence number, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store query fails.
    pub async fn get_step(&self, step_number: u32) -> Result<Option<Step>> {
        self.store.get_step(step_number).await
    }
}
