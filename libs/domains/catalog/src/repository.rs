use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{Item, ItemFilter, PageRequest};

/// Read-only data access for catalog items.
///
/// Implementations can use different storage backends; the service only
/// depends on this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Count items matching a filter
    async fn count(&self, filter: ItemFilter) -> ItemResult<u64>;

    /// List one page of matching items, ordered by name
    async fn list(&self, filter: ItemFilter, page: PageRequest) -> ItemResult<Vec<Item>>;

    /// Get the single item with this id.
    ///
    /// Returns `ItemError::DuplicateId` if more than one stored item carries it.
    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>>;

    /// Get every item whose id is in `ids`, in storage order
    async fn list_by_ids(&self, ids: Vec<i32>) -> ItemResult<Vec<Item>>;
}
