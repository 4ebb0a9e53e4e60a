use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// Catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier
    pub id: i32,
    /// Item name, used for ordering and prefix search
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Optional price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Item {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price: None,
        }
    }
}

/// A page of results together with paging metadata and the total match count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedItems<T> {
    /// Zero-based page index as requested
    pub page_index: i32,
    /// Page size as requested
    pub page_size: i32,
    /// Number of matching items before paging
    pub count: i64,
    /// Items on the requested page
    pub data: Vec<T>,
}

impl<T> PaginatedItems<T> {
    pub fn new(page: PageRequest, count: i64, data: Vec<T>) -> Self {
        Self {
            page_index: page.page_index,
            page_size: page.page_size,
            count,
            data,
        }
    }
}

/// Body of the item listing endpoint: a page of items, or the plain array
/// returned when items are looked up by id
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ItemListing {
    Page(PaginatedItems<Item>),
    Items(Vec<Item>),
}

/// Paging parameters taken from the query string.
///
/// Values are not validated. A negative offset skips nothing and a
/// non-positive size yields an empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct PageRequest {
    /// Number of items per page
    #[serde(default = "default_page_size")]
    #[param(default = 10)]
    pub page_size: i32,
    /// Zero-based page index
    #[serde(default)]
    #[param(default = 0)]
    pub page_index: i32,
}

fn default_page_size() -> i32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_index: 0,
        }
    }
}

impl PageRequest {
    pub fn new(page_size: i32, page_index: i32) -> Self {
        Self {
            page_size,
            page_index,
        }
    }

    /// Number of items to skip
    pub fn offset(&self) -> usize {
        let skip = i64::from(self.page_index) * i64::from(self.page_size);
        usize::try_from(skip.max(0)).unwrap_or(usize::MAX)
    }

    /// Maximum number of items to take
    pub fn limit(&self) -> usize {
        usize::try_from(self.page_size.max(0)).unwrap_or(0)
    }
}

/// Query string for the item listing endpoint
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListItemsQuery {
    /// Number of items per page
    #[serde(default = "default_page_size")]
    #[param(default = 10)]
    pub page_size: i32,
    /// Zero-based page index
    #[serde(default)]
    #[param(default = 0)]
    pub page_index: i32,
    /// Comma-separated list of item ids; when present, paging is ignored
    pub ids: Option<String>,
}

impl ListItemsQuery {
    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.page_size, self.page_index)
    }

    /// The `ids` value, if one was supplied and is not empty
    pub fn ids(&self) -> Option<&str> {
        self.ids.as_deref().filter(|ids| !ids.is_empty())
    }
}

/// Path segment for the name prefix search
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NamePrefix {
    #[validate(length(min = 1))]
    pub name: String,
}

/// Selection applied before ordering and paging
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Only items whose name starts with this prefix (ordinal, case-sensitive)
    pub name_prefix: Option<String>,
}

impl ItemFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn name_starts_with(prefix: impl Into<String>) -> Self {
        Self {
            name_prefix: Some(prefix.into()),
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self.name_prefix {
            Some(ref prefix) => item.name.starts_with(prefix.as_str()),
            None => true,
        }
    }
}
