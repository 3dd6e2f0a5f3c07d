pub mod collections;
pub mod health;
pub mod items;
pub mod memberships;

pub use collections::{create_collection, delete_collection, get_collection, list_collections};
pub use health::health_check;
pub use items::{create_item, delete_item, edit_item, get_item, list_items};
pub use memberships::{add_memberships, remove_memberships};
