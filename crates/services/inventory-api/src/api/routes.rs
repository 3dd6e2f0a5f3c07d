use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api::handlers::{
    add_memberships, create_collection, create_item, delete_collection, delete_item, edit_item,
    get_collection, get_item, health_check, list_collections, list_items, remove_memberships,
};
use crate::db::{CollectionRepository, ItemRepository, MembershipRepository};
use crate::service::{CollectionService, ItemService, MembershipService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool, used directly only by the health check.
    pub pool: SqlitePool,
    pub item_service: ItemService,
    pub collection_service: CollectionService,
    pub membership_service: MembershipService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            item_service: ItemService::new(ItemRepository::new(pool.clone())),
            collection_service: CollectionService::new(CollectionRepository::new(pool.clone())),
            membership_service: MembershipService::new(MembershipRepository::new(pool.clone())),
            pool,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health::health_check,
        crate::api::handlers::items::list_items,
        crate::api::handlers::items::get_item,
        crate::api::handlers::items::create_item,
        crate::api::handlers::items::edit_item,
        crate::api::handlers::items::delete_item,
        crate::api::handlers::collections::list_collections,
        crate::api::handlers::collections::get_collection,
        crate::api::handlers::collections::create_collection,
        crate::api::handlers::collections::delete_collection,
        crate::api::handlers::memberships::add_memberships,
        crate::api::handlers::memberships::remove_memberships,
    ),
    components(
        schemas(
            crate::api::dto::CreateItemRequest,
            crate::api::dto::EditItemRequest,
            crate::api::dto::CreateCollectionRequest,
            crate::api::dto::MembershipRequest,
            crate::api::dto::ItemView,
            crate::api::dto::ItemSummary,
            crate::api::dto::CollectionView,
            crate::api::dto::CollectionSummary,
            crate::api::dto::HealthResponse,
        )
    ),
    tags(
        (name = "inventory", description = "Inventory items and collections API")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn create_router(pool: SqlitePool) -> Router {
    let state = Arc::new(AppState::new(pool));

    let api_routes = Router::new()
        .route("/item/all", get(list_items))
        .route(
            "/item",
            get(get_item).post(create_item).put(edit_item).delete(delete_item),
        )
        .route(
            "/item/collection",
            axum::routing::put(add_memberships).delete(remove_memberships),
        )
        .route("/collection/all", get(list_collections))
        .route(
            "/collection",
            get(get_collection)
                .post(create_collection)
                .delete(delete_collection),
        );

    Router::new()
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
