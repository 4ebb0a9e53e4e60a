use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use std::path::PathBuf;
use thiserror::Error;

/// Message returned when an `ids` list cannot be parsed or matches nothing
pub const INVALID_IDS_MESSAGE: &str = "ids value invalid. Must be comma-separated list of numbers";

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Item not found: {0}")]
    NotFound(i32),

    #[error("More than one item stored with id {0}")]
    DuplicateId(i32),

    #[error("Failed to read catalog seed {}: {source}", .path.display())]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog seed: {0}")]
    SeedFormat(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::InvalidArgument(msg) => AppError::BadRequest(msg),
            ItemError::NotFound(id) => AppError::NotFound(format!("Item {} not found", id)),
            ItemError::DuplicateId(id) => {
                AppError::DataIntegrity(format!("Item id {} is not unique", id))
            }
            ItemError::SeedIo { source, .. } => AppError::Io(source),
            ItemError::SeedFormat(e) => AppError::SerdeJson(e),
            ItemError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
