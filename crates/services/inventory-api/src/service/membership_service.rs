use std::collections::BTreeSet;

use tracing::info;

use crate::db::MembershipRepository;
use crate::error::Result;
use crate::models::ItemDetail;

/// Adds and removes an item's collection memberships.
///
/// Ids are treated as a set: repeats collapse to one edge. Either every id
/// resolves and all edges are written, or the item is left untouched.
#[derive(Debug, Clone)]
pub struct MembershipService {
    repository: MembershipRepository,
}

impl MembershipService {
    pub fn new(repository: MembershipRepository) -> Self {
        Self { repository }
    }

    pub async fn add_memberships(
        &self,
        item_id: i64,
        collection_ids: &[i64],
    ) -> Result<ItemDetail> {
        let ids: BTreeSet<i64> = collection_ids.iter().copied().collect();
        let detail = self.repository.link(item_id, &ids).await?;

        info!(
            item_id,
            requested = ?ids,
            collections = ?detail.collection_ids(),
            "Collections added to item"
        );
        Ok(detail)
    }

    pub async fn remove_memberships(
        &self,
        item_id: i64,
        collection_ids: &[i64],
    ) -> Result<ItemDetail> {
        let ids: BTreeSet<i64> = collection_ids.iter().copied().collect();
        let detail = self.repository.unlink(item_id, &ids).await?;

        info!(
            item_id,
            requested = ?ids,
            collections = ?detail.collection_ids(),
            "Collections removed from item"
        );
        Ok(detail)
    }
}
