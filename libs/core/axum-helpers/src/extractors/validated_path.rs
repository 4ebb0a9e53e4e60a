//! Path extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Path extractor with automatic validation.
///
/// Deserializes the path parameters into `T` and validates them with the
/// `validator` crate's `Validate` trait. Validation failures produce a 400
/// with per-field details.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::ValidatedPath;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct Search {
///     #[validate(length(min = 1))]
///     name: String,
/// }
///
/// async fn search(ValidatedPath(params): ValidatedPath<Search>) -> String {
///     format!("Searching for: {}", params.name)
/// }
///
/// let app = Router::new().route("/search/{name}", get(search));
/// ```
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(data) = Path::<T>::from_request_parts(parts, state).await?;
        data.validate()?;

        Ok(ValidatedPath(data))
    }
}
