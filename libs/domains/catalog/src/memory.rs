//! In-memory implementation of ItemRepository
//!
//! The store is seeded once and never mutated, so it is shared between
//! requests without locking.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemFilter, PageRequest};
use crate::repository::ItemRepository;

const BUNDLED_SEED: &str = include_str!("../data/items.json");

/// Immutable, in-memory item store
#[derive(Debug, Clone)]
pub struct InMemoryItemRepository {
    items: Arc<[Item]>,
    /// Indexes into `items`, ordered by name
    by_name: Arc<[usize]>,
}

impl InMemoryItemRepository {
    /// Create a store holding `items` in the given order
    pub fn new(items: Vec<Item>) -> Self {
        let mut by_name: Vec<usize> = (0..items.len()).collect();
        by_name.sort_by(|&a, &b| items[a].name.cmp(&items[b].name));

        Self {
            items: items.into(),
            by_name: by_name.into(),
        }
    }

    /// Load items from a JSON array
    pub fn from_json_str(json: &str) -> ItemResult<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Ok(Self::new(items))
    }

    /// Load items from a JSON file containing an array of items
    pub fn from_json_file(path: impl AsRef<Path>) -> ItemResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| ItemError::SeedIo {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json_str(&json)
    }

    /// Store seeded with the catalog bundled into the binary
    pub fn bundled() -> ItemResult<Self> {
        Self::from_json_str(BUNDLED_SEED)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn ordered<'a>(&'a self, filter: &'a ItemFilter) -> impl Iterator<Item = &'a Item> + 'a {
        self.by_name
            .iter()
            .map(|&idx| &self.items[idx])
            .filter(move |item| filter.matches(item))
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    #[instrument(skip(self))]
    async fn count(&self, filter: ItemFilter) -> ItemResult<u64> {
        let count = self.items.iter().filter(|item| filter.matches(item)).count();
        Ok(count as u64)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ItemFilter, page: PageRequest) -> ItemResult<Vec<Item>> {
        let items = self
            .ordered(&filter)
            .skip(page.offset())
            .take(page.limit())
            .cloned()
            .collect();
        Ok(items)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let mut matches = self.items.iter().filter(|item| item.id == id);

        let found = matches.next().cloned();
        if matches.next().is_some() {
            tracing::error!(item_id = id, "Multiple items stored with the same id");
            return Err(ItemError::DuplicateId(id));
        }

        Ok(found)
    }

    #[instrument(skip(self))]
    async fn list_by_ids(&self, ids: Vec<i32>) -> ItemResult<Vec<Item>> {
        let wanted: HashSet<i32> = ids.into_iter().collect();
        let items = self
            .items
            .iter()
            .filter(|item| wanted.contains(&item.id))
            .cloned()
            .collect();
        Ok(items)
    }
}
