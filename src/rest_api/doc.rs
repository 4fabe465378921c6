//! # OpenAPI Document
//!
//! Generates the OpenAPI specification for the Item API, served at
//! `/swagger.json` and dumped by the `openapi` CLI command.

use utoipa::OpenApi;

use crate::store::Item;

use super::errors::ErrorResponse;
use super::request::{CreateItemRequest, UpdateItemRequest};
use super::response::{
    DeleteItemResponse, HealthResponse, ListItemsResponse, UpdateItemResponse,
};

/// OpenAPI document for the Item API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item API",
        version = "v1",
        description = "API documentation for Item management",
        license(name = "BSD License")
    ),
    paths(
        super::server::create_item,
        super::server::read_items,
        super::server::update_item,
        super::server::delete_item,
        super::server::health,
    ),
    components(schemas(
        Item,
        CreateItemRequest,
        UpdateItemRequest,
        ListItemsResponse,
        UpdateItemResponse,
        DeleteItemResponse,
        HealthResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_covers_all_endpoints() {
        let doc = ApiDoc::openapi();

        for path in [
            "/create-item/",
            "/read-items/",
            "/update-item/{item_id}/",
            "/delete-item/{item_id}/",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_document_metadata() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Item API");
        assert_eq!(doc.info.version, "v1");
    }
}
