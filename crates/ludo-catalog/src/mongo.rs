//! MongoDB-backed catalog store.
//!
//! Two collections, `components` and `steps`, live in the configured
//! database. Filtering and ordering are pushed down to the server so the
//! store contract behaves identically across backends. Connection pooling
//! and timeouts are the driver defaults.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};

use ludo_core::{ComponentId, Error, Result};

use crate::model::{Component, DifficultyLevel, Step};
use crate::store::CatalogStore;

const COMPONENTS: &str = "components";
const STEPS: &str = "steps";

/// Catalog store backed by a MongoDB database.
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connects to MongoDB and selects the given database.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the connection string cannot be parsed or
    /// the client cannot be constructed. Reachability is not verified here;
    /// use [`CatalogStore::ping`] for that.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| Error::storage_with_source("failed to create MongoDB client", e))?;
        Ok(Self {
            database: client.database(db_name),
        })
    }

    /// Creates a store over an existing database handle.
    #[must_use]
    pub fn with_database(database: Database) -> Self {
        Self { database }
    }

    fn components(&self) -> Collection<Component> {
        self.database.collection(COMPONENTS)
    }

    fn steps(&self) -> Collection<Step> {
        self.database.collection(STEPS)
    }
}

#[async_trait]
impl CatalogStore for MongoStore {
    async fn replace_components(&self, components: Vec<Component>) -> Result<()> {
        let collection = self.components();
        collection
            .delete_many(doc! {})
            .await
            .map_err(|e| Error::storage_with_source("failed to clear components", e))?;
        if components.is_empty() {
            return Ok(());
        }
        collection
            .insert_many(components)
            .await
            .map_err(|e| Error::storage_with_source("failed to insert components", e))?;
        Ok(())
    }

    async fn replace_steps(&self, steps: Vec<Step>) -> Result<()> {
        let collection = self.steps();
        collection
            .delete_many(doc! {})
            .await
            .map_err(|e| Error::storage_with_source("failed to clear steps", e))?;
        if steps.is_empty() {
            return Ok(());
        }
        collection
            .insert_many(steps)
            .await
            .map_err(|e| Error::storage_with_source("failed to insert steps", e))?;
        Ok(())
    }

    async fn list_components(
        &self,
        difficulty: Option<DifficultyLevel>,
    ) -> Result<Vec<Component>> {
        let filter = match difficulty {
            Some(level) => doc! { "difficulty_level": level.as_str() },
            None => doc! {},
        };
        let cursor = self
            .components()
            .find(filter)
            .sort(doc! { "step_order": 1 })
            .await
            .map_err(|e| Error::storage_with_source("failed to query components", e))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| Error::storage_with_source("failed to read component cursor", e))
    }

    async fn get_component(&self, id: &ComponentId) -> Result<Option<Component>> {
        self.components()
            .find_one(doc! { "id": id.to_string() })
            .await
            .map_err(|e| Error::storage_with_source("failed to query component", e))
    }

    async fn list_steps(&self) -> Result<Vec<Step>> {
        let cursor = self
            .steps()
            .find(doc! {})
            .sort(doc! { "step_number": 1 })
            .await
            .map_err(|e| Error::storage_with_source("failed to query steps", e))?;
        cursor
            .try_collect()
            .await
            .map_err(|e| Error::storage_with_source("failed to read step cursor", e))
    }

    async fn get_step(&self, step_number: u32) -> Result<Option<Step>> {
        self.steps()
            .find_one(doc! { "step_number": i64::from(step_number) })
            .await
            .map_err(|e| Error::storage_with_source("failed to query step", e))
    }

    async fn ping(&self) -> Result<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| Error::storage_with_source("MongoDB ping failed", e))
    }
}
