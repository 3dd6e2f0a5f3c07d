mod collection_service;
mod item_service;
mod membership_service;

pub use collection_service::CollectionService;
pub use item_service::ItemService;
pub use membership_service::MembershipService;

use crate::error::{InventoryError, Result};

/// Names are required and must contain something other than whitespace.
fn require_name(name: &str) -> Result<&str> {
    if name.trim().is_empty() {
        return Err(InventoryError::validation("name", "must not be empty"));
    }
    Ok(name)
}
