//! Query string extractor with JSON error responses.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Drop-in replacement for `axum::extract::Query`.
///
/// A query string that does not deserialize into `T` is rejected with a 400
/// `QUERY_EXTRACTION` error body instead of axum's plain-text rejection.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::QueryParams;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Paging {
///     page_size: i32,
/// }
///
/// async fn list(QueryParams(paging): QueryParams<Paging>) -> String {
///     format!("page size {}", paging.page_size)
/// }
///
/// let app = Router::new().route("/items", get(list));
/// ```
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(QueryParams(value))
    }
}
