//! Catalog Service - query layer over an ItemRepository

use std::sync::Arc;
use tracing::instrument;

use crate::error::{INVALID_IDS_MESSAGE, ItemError, ItemResult};
use crate::models::{Item, ItemFilter, PageRequest, PaginatedItems};
use crate::repository::ItemRepository;

/// Read-only catalog queries.
///
/// Every operation is a stateless read; the service holds nothing but the
/// repository handle.
pub struct CatalogService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> CatalogService<R> {
    /// Create a new CatalogService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// One page of all items, ordered by name
    #[instrument(skip(self))]
    pub async fn list_items(&self, page: PageRequest) -> ItemResult<PaginatedItems<Item>> {
        self.page_of(ItemFilter::all(), page).await
    }

    /// Items whose ids appear in a comma-separated list.
    ///
    /// Fails if any token is not an integer, and also when the list parses
    /// but matches no item.
    #[instrument(skip(self))]
    pub async fn list_items_by_ids(&self, ids: &str) -> ItemResult<Vec<Item>> {
        let ids = parse_ids(ids)?;

        let items = self.repository.list_by_ids(ids).await?;
        if items.is_empty() {
            return Err(ItemError::InvalidArgument(INVALID_IDS_MESSAGE.to_string()));
        }

        Ok(items)
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i32) -> ItemResult<Item> {
        if id <= 0 {
            return Err(ItemError::InvalidArgument(format!(
                "Item id must be positive, got {}",
                id
            )));
        }

        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// One page of the items whose name starts with `name`, ordered by name
    #[instrument(skip(self))]
    pub async fn search_items_by_name(
        &self,
        name: &str,
        page: PageRequest,
    ) -> ItemResult<PaginatedItems<Item>> {
        if name.is_empty() {
            return Err(ItemError::InvalidArgument(
                "name must not be empty".to_string(),
            ));
        }

        self.page_of(ItemFilter::name_starts_with(name), page).await
    }

    async fn page_of(
        &self,
        filter: ItemFilter,
        page: PageRequest,
    ) -> ItemResult<PaginatedItems<Item>> {
        let count = self.repository.count(filter.clone()).await?;
        let data = self.repository.list(filter, page).await?;

        let count = i64::try_from(count)
            .map_err(|_| ItemError::Internal(format!("item count {} out of range", count)))?;

        Ok(PaginatedItems::new(page, count, data))
    }
}

impl<R: ItemRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Parse a comma-separated list of integers, rejecting the whole list if any
/// token is not a number. Surrounding whitespace on a token is ignored.
pub fn parse_ids(ids: &str) -> ItemResult<Vec<i32>> {
    ids.split(',')
        .map(|token| token.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ItemError::InvalidArgument(INVALID_IDS_MESSAGE.to_string()))
}
