//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item Catalog API",
        version = "1.0.0",
        description = "Read-only, paginated REST API over a catalog of items"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/v1/itemcatalog", api = domain_catalog::ApiDoc)
    ),
    tags(
        (name = "ItemCatalog", description = "Item catalog endpoints")
    )
)]
pub struct ApiDoc;
