//! Startup seeding of the catalog.
//!
//! The catalog is rebuilt from the seed set on every process start: each
//! collection is emptied, then the seed documents are inserted. The
//! operation runs exactly once, before the server accepts traffic, under a
//! single-writer contract; it is not re-entrant and not transactional. A
//! failure partway leaves the store partially seeded, and the process aborts
//! startup rather than serving inconsistent content.

use crate::seed::SeedData;
use crate::store::CatalogStore;

use ludo_core::Result;

/// Replaces both collections' contents with the seed data set.
///
/// # Errors
///
/// Returns the first store error encountered. On error the store may hold a
/// partial delete or partial insert; callers must treat this as fatal.
pub async fn reset_and_load(store: &dyn CatalogStore, seed: SeedData) -> Result<()> {
    let component_count = seed.components.len();
    let step_count = seed.steps.len();

    store.replace_components(seed.components).await?;
    store.replace_steps(seed.steps).await?;

    tracing::info!(
        components = component_count,
        steps = step_count,
        "Catalog seeded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn reset_and_load_populates_both_collections() {
        let store = MemoryStore::new();
        reset_and_load(&store, SeedData::load().unwrap()).await.unwrap();

        assert_eq!(store.list_components(None).await.unwrap().len(), 10);
        assert_eq!(store.list_steps().await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn reseeding_replaces_rather_than_appends() {
        let store = MemoryStore::new();
        reset_and_load(&store, SeedData::load().unwrap()).await.unwrap();
        reset_and_load(&store, SeedData::load().unwrap()).await.unwrap();

        assert_eq!(store.list_components(None).await.unwrap().len(), 10);
        assert_eq!(store.list_steps().await.unwrap().len(), 8);
    }
}
