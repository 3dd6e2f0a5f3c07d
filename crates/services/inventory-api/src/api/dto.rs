use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{InventoryError, Result};
use crate::models::{Collection, CollectionDetail, Item, ItemDetail};

/// `?id=` selector shared by every single-resource endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdQuery {
    pub id: i64,
}

// Requests

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItemRequest {
    #[validate(
        required(message = "must not be null"),
        length(min = 1, message = "must not be empty")
    )]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct EditItemRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,

    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCollectionRequest {
    #[validate(
        required(message = "must not be null"),
        length(min = 1, message = "must not be empty")
    )]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipRequest {
    pub collection_ids: Option<Vec<i64>>,
}

impl MembershipRequest {
    /// The requested ids, reported under the wire name `collectionIds` when
    /// absent.
    pub fn into_collection_ids(self) -> Result<Vec<i64>> {
        self.collection_ids
            .ok_or_else(|| InventoryError::validation("collectionIds", "must not be null"))
    }
}

// Views. An item view lists its collections without their members, and a
// collection view lists its items without their memberships.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CollectionSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemSummary {
    pub id: i64,
    pub name: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemView {
    pub id: i64,
    pub name: String,
    pub count: i64,
    pub collections: Vec<CollectionSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CollectionView {
    pub id: i64,
    pub name: String,
    pub items: Vec<ItemSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}

impl From<Collection> for CollectionSummary {
    fn from(collection: Collection) -> Self {
        Self {
            id: collection.id,
            name: collection.name,
        }
    }
}

impl From<Item> for ItemSummary {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            count: item.count,
        }
    }
}

impl From<ItemDetail> for ItemView {
    fn from(detail: ItemDetail) -> Self {
        Self {
            id: detail.item.id,
            name: detail.item.name,
            count: detail.item.count,
            collections: detail.collections.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CollectionDetail> for CollectionView {
    fn from(detail: CollectionDetail) -> Self {
        Self {
            id: detail.collection.id,
            name: detail.collection.name,
            items: detail.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_item_requires_name() {
        let req: CreateItemRequest = serde_json::from_str("{}").unwrap();
        let err: InventoryError = req.validate().unwrap_err().into();
        assert_eq!(err.to_string(), "name must not be null");

        let req = CreateItemRequest {
            name: Some(String::new()),
        };
        let err: InventoryError = req.validate().unwrap_err().into();
        assert_eq!(err.to_string(), "name must not be empty");

        let req = CreateItemRequest {
            name: Some("Milk".to_string()),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_edit_item_rejects_negative_count() {
        let req: EditItemRequest = serde_json::from_str(r#"{"count": -1}"#).unwrap();
        let err: InventoryError = req.validate().unwrap_err().into();
        assert_eq!(err.to_string(), "count must be greater than or equal to 0");
    }

    #[test]
    fn test_edit_item_fields_are_optional() {
        let req: EditItemRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_ok());
        assert!(req.name.is_none());
        assert!(req.count.is_none());

        let req: EditItemRequest = serde_json::from_str(r#"{"count": 0}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_edit_item_reports_every_violation() {
        let req = EditItemRequest {
            name: Some(String::new()),
            count: Some(-3),
        };
        let err: InventoryError = req.validate().unwrap_err().into();
        assert_eq!(
            err.to_string(),
            "count must be greater than or equal to 0, name must not be empty"
        );
    }

    #[test]
    fn test_membership_request_uses_camel_case() {
        let req: MembershipRequest =
            serde_json::from_str(r#"{"collectionIds": [1, 2, 2]}"#).unwrap();
        assert_eq!(req.into_collection_ids().unwrap(), vec![1, 2, 2]);

        let req: MembershipRequest = serde_json::from_str("{}").unwrap();
        let err = req.into_collection_ids().unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
        assert_eq!(err.to_string(), "collectionIds must not be null");
    }

    #[test]
    fn test_item_view_omits_collection_members() {
        let view = ItemView::from(ItemDetail {
            item: Item {
                id: 1,
                name: "Milk".to_string(),
                count: 5,
            },
            collections: vec![Collection {
                id: 2,
                name: "Dairy".to_string(),
            }],
        });

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Milk",
                "count": 5,
                "collections": [{"id": 2, "name": "Dairy"}]
            })
        );
    }

    #[test]
    fn test_collection_view_omits_item_memberships() {
        let view = CollectionView::from(CollectionDetail {
            collection: Collection {
                id: 2,
                name: "Dairy".to_string(),
            },
            items: vec![Item {
                id: 1,
                name: "Milk".to_string(),
                count: 5,
            }],
        });

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 2,
                "name": "Dairy",
                "items": [{"id": 1, "name": "Milk", "count": 5}]
            })
        );
    }
}
