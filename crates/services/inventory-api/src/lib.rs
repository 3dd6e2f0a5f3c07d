pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod service;

pub use api::{create_router, AppState};
pub use config::Config;
pub use db::{CollectionRepository, DbPool, ItemRepository, MembershipRepository};
pub use error::{InventoryError, Result};
pub use service::{CollectionService, ItemService, MembershipService};
