//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid argument",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_ARGUMENT",
        "message": "ids value invalid. Must be comma-separated list of numbers"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Resource not found"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Stored data violates a uniqueness invariant",
    content_type = "application/json",
    example = json!({
        "code": 2001,
        "error": "DATA_INTEGRITY",
        "message": "Item id 7 is not unique"
    })
)]
pub struct DataIntegrityResponse(pub ErrorResponse);
