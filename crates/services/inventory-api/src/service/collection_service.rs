use tracing::info;

use super::require_name;
use crate::db::CollectionRepository;
use crate::error::Result;
use crate::models::{Collection, CollectionDetail};

#[derive(Debug, Clone)]
pub struct CollectionService {
    repository: CollectionRepository,
}

impl CollectionService {
    pub fn new(repository: CollectionRepository) -> Self {
        Self { repository }
    }

    /// Creates an empty collection. A duplicate name is rejected by the
    /// storage constraint and surfaces as `AlreadyExists`.
    pub async fn create_collection(&self, name: &str) -> Result<CollectionDetail> {
        let name = require_name(name)?;
        let detail = self.repository.create(name).await?;

        info!(
            collection_id = detail.collection.id,
            name = %detail.collection.name,
            "Collection created"
        );
        Ok(detail)
    }

    pub async fn get_collection(&self, id: i64) -> Result<CollectionDetail> {
        self.repository.get(id).await
    }

    pub async fn list_collections(&self) -> Result<Vec<Collection>> {
        self.repository.list().await
    }

    pub async fn delete_collection(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await?;

        info!(collection_id = id, "Collection deleted");
        Ok(())
    }
}
