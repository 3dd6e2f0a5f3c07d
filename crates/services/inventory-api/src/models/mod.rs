mod collection;
mod item;

pub use collection::{Collection, CollectionDetail};
pub use item::{Item, ItemDetail};
