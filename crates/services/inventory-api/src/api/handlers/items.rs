use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::api::dto::{CreateItemRequest, EditItemRequest, IdQuery, ItemView};
use crate::api::extract::{ApiJson, ApiQuery};
use crate::api::routes::AppState;
use crate::error::{InventoryError, Result};

#[utoipa::path(
    get,
    path = "/api/item/all",
    responses(
        (status = 200, description = "All items", body = Vec<ItemView>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<ItemView>>> {
    let items = state.item_service.list_items().await?;
    Ok(Json(items.into_iter().map(ItemView::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/item",
    params(IdQuery),
    responses(
        (status = 200, description = "Item found", body = ItemView),
        (status = 404, description = "Item not found")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> Result<Json<ItemView>> {
    let item = state.item_service.get_item(query.id).await?;
    Ok(Json(item.into()))
}

#[utoipa::path(
    post,
    path = "/api/item",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = ItemView),
        (status = 400, description = "Name missing or empty")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemView>)> {
    req.validate()?;

    let name = req
        .name
        .ok_or_else(|| InventoryError::validation("name", "must not be null"))?;
    let item = state.item_service.create_item(&name).await?;

    Ok((StatusCode::CREATED, Json(item.into())))
}

#[utoipa::path(
    put,
    path = "/api/item",
    params(IdQuery),
    request_body = EditItemRequest,
    responses(
        (status = 200, description = "Item edited", body = ItemView),
        (status = 400, description = "Negative count or empty name"),
        (status = 404, description = "Item not found")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn edit_item(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<IdQuery>,
    ApiJson(req): ApiJson<EditItemRequest>,
) -> Result<Json<ItemView>> {
    req.validate()?;

    let item = state
        .item_service
        .edit_item(query.id, req.name.as_deref(), req.count)
        .await?;

    Ok(Json(item.into()))
}

#[utoipa::path(
    delete,
    path = "/api/item",
    params(IdQuery),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> Result<StatusCode> {
    state.item_service.delete_item(query.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
