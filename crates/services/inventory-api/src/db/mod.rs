mod collection_repo;
mod item_repo;
mod membership_repo;
mod pool;

pub use collection_repo::CollectionRepository;
pub use item_repo::ItemRepository;
pub use membership_repo::MembershipRepository;
pub use pool::DbPool;

/// Mutating transactions take the write lock up front and wait on
/// `busy_timeout` for it.
const WRITE_TRANSACTION: &str = "BEGIN IMMEDIATE";
