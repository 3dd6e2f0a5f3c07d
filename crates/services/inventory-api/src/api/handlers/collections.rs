use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::api::dto::{CollectionSummary, CollectionView, CreateCollectionRequest, IdQuery};
use crate::api::extract::{ApiJson, ApiQuery};
use crate::api::routes::AppState;
use crate::error::{InventoryError, Result};

#[utoipa::path(
    get,
    path = "/api/collection/all",
    responses(
        (status = 200, description = "All collections, without member lists", body = Vec<CollectionSummary>)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_collections(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CollectionSummary>>> {
    let collections = state.collection_service.list_collections().await?;
    Ok(Json(
        collections.into_iter().map(CollectionSummary::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/collection",
    params(IdQuery),
    responses(
        (status = 200, description = "Collection found", body = CollectionView),
        (status = 404, description = "Collection not found")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_collection(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> Result<Json<CollectionView>> {
    let collection = state.collection_service.get_collection(query.id).await?;
    Ok(Json(collection.into()))
}

#[utoipa::path(
    post,
    path = "/api/collection",
    request_body = CreateCollectionRequest,
    responses(
        (status = 201, description = "Collection created", body = CollectionView),
        (status = 400, description = "Name missing or empty"),
        (status = 409, description = "A collection with this name already exists")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn create_collection(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateCollectionRequest>,
) -> Result<(StatusCode, Json<CollectionView>)> {
    req.validate()?;

    let name = req
        .name
        .ok_or_else(|| InventoryError::validation("name", "must not be null"))?;
    let collection = state.collection_service.create_collection(&name).await?;

    Ok((StatusCode::CREATED, Json(collection.into())))
}

#[utoipa::path(
    delete,
    path = "/api/collection",
    params(IdQuery),
    responses(
        (status = 204, description = "Collection deleted and removed from its items"),
        (status = 404, description = "Collection not found")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_collection(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<IdQuery>,
) -> Result<StatusCode> {
    state.collection_service.delete_collection(query.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
