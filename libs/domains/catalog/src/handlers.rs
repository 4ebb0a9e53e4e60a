use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    IdPath, QueryParams, ValidatedPath,
    errors::responses::{
        BadRequestResponse, DataIntegrityResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{Item, ItemListing, ListItemsQuery, NamePrefix, PageRequest, PaginatedItems};
use crate::repository::ItemRepository;
use crate::service::CatalogService;

/// OpenAPI documentation for the item catalog API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, get_item, search_items_by_name),
    components(
        schemas(Item, PaginatedItems<Item>, ItemListing),
        responses(
            BadRequestResponse,
            NotFoundResponse,
            DataIntegrityResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "ItemCatalog", description = "Read-only item catalog queries")
    )
)]
pub struct ApiDoc;

/// Create the item catalog router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/items", get(list_items))
        .route("/items/{id}", get(get_item))
        .route("/items/withname/{name}", get(search_items_by_name))
        .with_state(shared_service)
}

/// List items, one page at a time, or look items up by a list of ids
///
/// Without `ids` the response is a paginated envelope ordered by name.
/// With `ids` the response is a plain array of the matching items and paging
/// parameters are ignored.
#[utoipa::path(
    get,
    path = "/items",
    tag = "ItemCatalog",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "One page of items, or a plain array of items when `ids` is given", body = ItemListing),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    QueryParams(query): QueryParams<ListItemsQuery>,
) -> ItemResult<Json<ItemListing>> {
    let listing = match query.ids() {
        Some(ids) => ItemListing::Items(service.list_items_by_ids(ids).await?),
        None => ItemListing::Page(service.list_items(query.page()).await?),
    };
    Ok(Json(listing))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "ItemCatalog",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = DataIntegrityResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(id).await?;
    Ok(Json(item))
}

/// Search items whose name starts with a prefix
///
/// Matching is case-sensitive. Results are ordered by name and paged.
#[utoipa::path(
    get,
    path = "/items/withname/{name}",
    tag = "ItemCatalog",
    params(
        ("name" = String, Path, description = "Name prefix (at least one character)"),
        PageRequest
    ),
    responses(
        (status = 200, description = "One page of matching items", body = PaginatedItems<Item>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_items_by_name<R: ItemRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedPath(NamePrefix { name }): ValidatedPath<NamePrefix>,
    QueryParams(page): QueryParams<PageRequest>,
) -> ItemResult<Json<PaginatedItems<Item>>> {
    let page = service.search_items_by_name(&name, page).await?;
    Ok(Json(page))
}
