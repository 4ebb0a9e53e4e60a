//! Handler tests for the item catalog domain
//!
//! These tests drive the domain router directly with an in-memory store:
//! - Query/path parsing
//! - Response serialization
//! - HTTP status codes
//! - Error responses

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_catalog::*;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app_with(items: Vec<Item>) -> Router {
    let repo = InMemoryItemRepository::new(items);
    let service = CatalogService::new(repo);
    handlers::router(service)
}

fn app() -> Router {
    app_with(vec![
        Item::new(1, "Widget"),
        Item::new(2, "Gadget"),
        Item::new(3, "Widgetry"),
        Item::new(4, "Anvil"),
        Item::new(5, "Hammer"),
    ])
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

fn names(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

#[tokio::test]
async fn test_list_items_defaults() {
    let response = get(app(), "/items").await;
    assert_eq!(response.status(), StatusCode::OK);

    let page: PaginatedItems<Item> = json_body(response.into_body()).await;
    assert_eq!(page.page_index, 0);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.count, 5);
    assert_eq!(
        names(&page.data),
        ["Anvil", "Gadget", "Hammer", "Widget", "Widgetry"]
    );
}

#[tokio::test]
async fn test_list_items_envelope_field_names() {
    let response = get(app(), "/items?pageSize=2").await;
    let body: Value = json_body(response.into_body()).await;

    assert_eq!(body["pageIndex"], 0);
    assert_eq!(body["pageSize"], 2);
    assert_eq!(body["count"], 5);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_items_page_size_bounds_page() {
    for page_index in 0..4 {
        let uri = format!("/items?pageSize=2&pageIndex={}", page_index);
        let page: PaginatedItems<Item> = json_body(get(app(), &uri).await.into_body()).await;

        assert!(page.data.len() <= 2);
        assert_eq!(page.count, 5, "count must not depend on pageIndex");
    }
}

#[tokio::test]
async fn test_list_items_second_page() {
    let response = get(app(), "/items?pageSize=2&pageIndex=1").await;
    let page: PaginatedItems<Item> = json_body(response.into_body()).await;

    assert_eq!(names(&page.data), ["Hammer", "Widget"]);
}

#[tokio::test]
async fn test_list_items_past_the_end_is_empty() {
    let response = get(app(), "/items?pageSize=10&pageIndex=7").await;
    assert_eq!(response.status(), StatusCode::OK);

    let page: PaginatedItems<Item> = json_body(response.into_body()).await;
    assert!(page.data.is_empty());
    assert_eq!(page.count, 5);
    assert_eq!(page.page_index, 7);
}

#[tokio::test]
async fn test_list_items_negative_paging_passes_through() {
    let response = get(app(), "/items?pageSize=-3&pageIndex=-1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let page: PaginatedItems<Item> = json_body(response.into_body()).await;
    assert!(page.data.is_empty());
    assert_eq!(page.page_size, -3);
    assert_eq!(page.page_index, -1);
    assert_eq!(page.count, 5);
}

#[tokio::test]
async fn test_list_items_is_deterministic() {
    let first: Value = json_body(get(app(), "/items?pageSize=3").await.into_body()).await;
    let second: Value = json_body(get(app(), "/items?pageSize=3").await.into_body()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_list_items_non_numeric_page_size_is_rejected() {
    let response = get(app(), "/items?pageSize=ten").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "QUERY_EXTRACTION");
    assert_eq!(body["code"], 1006);
    assert!(body["message"].as_str().unwrap().contains("pageSize"));
}

#[tokio::test]
async fn test_list_items_by_ids_returns_plain_array() {
    let app = app_with(vec![Item::new(1, "Widget"), Item::new(3, "Gadget")]);
    let response = get(app, "/items?ids=1,2,3").await;
    assert_eq!(response.status(), StatusCode::OK);

    let items: Vec<Item> = json_body(response.into_body()).await;
    let mut ids: Vec<i32> = items.iter().map(|i| i.id).collect();
    ids.sort();
    assert_eq!(ids, [1, 3]);
}

#[tokio::test]
async fn test_list_items_by_ids_ignores_paging() {
    let response = get(app(), "/items?ids=1,2,3,4&pageSize=1").await;
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert_eq!(items.len(), 4);
}

#[tokio::test]
async fn test_list_items_by_ids_duplicates_collapse() {
    let response = get(app(), "/items?ids=2,2,2").await;
    let items: Vec<Item> = json_body(response.into_body()).await;
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_list_items_by_ids_non_numeric_is_bad_request() {
    let response = get(app(), "/items?ids=1,2,x").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(
        body["message"],
        "ids value invalid. Must be comma-separated list of numbers"
    );
    assert_eq!(body["error"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_list_items_by_ids_without_matches_is_bad_request() {
    let response = get(app(), "/items?ids=100,200").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_items_empty_ids_falls_back_to_paging() {
    let response = get(app(), "/items?ids=").await;
    assert_eq!(response.status(), StatusCode::OK);

    let page: PaginatedItems<Item> = json_body(response.into_body()).await;
    assert_eq!(page.count, 5);
}

#[tokio::test]
async fn test_get_item_returns_200() {
    let response = get(app(), "/items/3").await;
    assert_eq!(response.status(), StatusCode::OK);

    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item, Item::new(3, "Widgetry"));
}

#[tokio::test]
async fn test_get_item_returns_404_for_missing() {
    let response = get(app(), "/items/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_item_returns_404_on_empty_store() {
    let response = get(app_with(vec![]), "/items/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_item_returns_400_for_non_positive_id() {
    for uri in ["/items/0", "/items/-5"] {
        let response = get(app(), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }
}

#[tokio::test]
async fn test_get_item_non_integer_segment_is_404() {
    let response = get(app(), "/items/abc").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_item_duplicate_ids_is_500() {
    let app = app_with(vec![Item::new(6, "First"), Item::new(6, "Second")]);
    let response = get(app, "/items/6").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "DATA_INTEGRITY");
}

#[tokio::test]
async fn test_search_by_name_prefix() {
    let app = app_with(vec![
        Item::new(1, "Widgetry"),
        Item::new(2, "Widget"),
        Item::new(3, "Gadget"),
    ]);
    let response = get(app, "/items/withname/Wid").await;
    assert_eq!(response.status(), StatusCode::OK);

    let page: PaginatedItems<Item> = json_body(response.into_body()).await;
    assert_eq!(page.count, 2);
    assert_eq!(names(&page.data), ["Widget", "Widgetry"]);
}

#[tokio::test]
async fn test_search_by_name_count_independent_of_page_size() {
    let response = get(app(), "/items/withname/Wid?pageSize=1").await;
    let page: PaginatedItems<Item> = json_body(response.into_body()).await;

    assert_eq!(page.count, 2);
    assert_eq!(names(&page.data), ["Widget"]);

    let response = get(app(), "/items/withname/Wid?pageSize=1&pageIndex=1").await;
    let page: PaginatedItems<Item> = json_body(response.into_body()).await;
    assert_eq!(names(&page.data), ["Widgetry"]);
}

#[tokio::test]
async fn test_search_by_name_is_case_sensitive() {
    let response = get(app(), "/items/withname/wid").await;
    assert_eq!(response.status(), StatusCode::OK);

    let page: PaginatedItems<Item> = json_body(response.into_body()).await;
    assert_eq!(page.count, 0);
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn test_search_by_name_percent_encoded_prefix() {
    let app = app_with(vec![Item::new(1, "Claw Hammer"), Item::new(2, "Claws")]);
    let response = get(app, "/items/withname/Claw%20H").await;

    let page: PaginatedItems<Item> = json_body(response.into_body()).await;
    assert_eq!(names(&page.data), ["Claw Hammer"]);
}

#[tokio::test]
async fn test_search_by_name_non_numeric_page_index_is_rejected() {
    let response = get(app(), "/items/withname/Wid?pageIndex=x").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "QUERY_EXTRACTION");
}

#[tokio::test]
async fn test_search_by_name_empty_segment_does_not_match() {
    let response = get(app(), "/items/withname/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_openapi_documents_both_listing_bodies() {
    use utoipa::OpenApi;

    let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
    let listing = &doc["components"]["schemas"]["ItemListing"];
    assert_eq!(listing["oneOf"].as_array().map(Vec::len), Some(2));

    let ok = &doc["paths"]["/items"]["get"]["responses"]["200"];
    assert_eq!(
        ok["content"]["application/json"]["schema"]["$ref"],
        "#/components/schemas/ItemListing"
    );
}
