pub mod dto;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::{create_router, AppState};
