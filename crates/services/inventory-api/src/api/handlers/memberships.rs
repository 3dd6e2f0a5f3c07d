use std::sync::Arc;

use axum::{extract::State, Json};

use crate::api::dto::{IdQuery, ItemView, MembershipRequest};
use crate::api::extract::{ApiJson, ApiQuery};
use crate::api::routes::AppState;
use crate::error::Result;

#[utoipa::path(
    put,
    path = "/api/item/collection",
    params(IdQuery),
    request_body = MembershipRequest,
    responses(
        (status = 200, description = "Item with its updated collections", body = ItemView),
        (status = 400, description = "collectionIds missing"),
        (status = 404, description = "Item or one of the collections not found; nothing was changed")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn add_memberships(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<IdQuery>,
    ApiJson(req): ApiJson<MembershipRequest>,
) -> Result<Json<ItemView>> {
    let ids = req.into_collection_ids()?;
    let item = state
        .membership_service
        .add_memberships(query.id, &ids)
        .await?;

    Ok(Json(item.into()))
}

#[utoipa::path(
    delete,
    path = "/api/item/collection",
    params(IdQuery),
    request_body = MembershipRequest,
    responses(
        (status = 200, description = "Item with its updated collections", body = ItemView),
        (status = 400, description = "collectionIds missing"),
        (status = 404, description = "Item or one of the collections not found; nothing was changed")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn remove_memberships(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<IdQuery>,
    ApiJson(req): ApiJson<MembershipRequest>,
) -> Result<Json<ItemView>> {
    let ids = req.into_collection_ids()?;
    let item = state
        .membership_service
        .remove_memberships(query.id, &ids)
        .await?;

    Ok(Json(item.into()))
}
