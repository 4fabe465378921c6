//! # REST API HTTP Server
//!
//! Axum-based HTTP server for the Item CRUD endpoints. Handlers are
//! stateless request/response transformations; the only shared state is
//! the injected store handle.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::config::HttpServerConfig;
use crate::store::{Item, ItemId, ItemStore};

use super::doc::ApiDoc;
use super::errors::ApiError;
use super::request::{CreateItemRequest, UpdateItemRequest};
use super::response::{
    DeleteItemResponse, HealthResponse, ListItemsResponse, UpdateItemResponse,
};

/// Shared handler state: the store client constructed at startup and
/// passed into handlers
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ItemStore>,
}

/// REST API server for the Item resource
pub struct RestServer {
    config: HttpServerConfig,
    router: Router,
}

impl RestServer {
    /// Create a server with default configuration
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self::with_config(store, HttpServerConfig::default())
    }

    /// Create a server with custom configuration
    pub fn with_config(store: Arc<dyn ItemStore>, config: HttpServerConfig) -> Self {
        let router = Self::build_router(store, &config);
        Self { config, router }
    }

    /// Build the Axum router with all endpoints
    fn build_router(store: Arc<dyn ItemStore>, config: &HttpServerConfig) -> Router {
        let state = AppState { store };

        // Permissive CORS when no origins are configured (development);
        // otherwise restrict to the configured list.
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health))
            .route("/swagger.json", get(openapi_document))
            .route("/create-item/", post(create_item))
            .route("/read-items/", get(read_items))
            .route("/update-item/{item_id}/", post(update_item))
            .route("/delete-item/{item_id}/", delete(delete_item))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        tracing::info!(%addr, "Starting Item API HTTP server");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Create item handler
#[utoipa::path(
    post,
    path = "/create-item/",
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "Created item with generated id", body = Item),
        (status = 400, description = "Malformed body or missing fields", body = super::errors::ErrorResponse),
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Item>, ApiError> {
    let request = CreateItemRequest::parse(&body)?;
    let item = state.store.insert(request.name, request.age).await?;

    Ok(Json(item))
}

/// List items handler
#[utoipa::path(
    get,
    path = "/read-items/",
    responses(
        (status = 200, description = "All stored items", body = ListItemsResponse),
    )
)]
pub async fn read_items(
    State(state): State<AppState>,
) -> Result<Json<ListItemsResponse>, ApiError> {
    let items = state.store.find_all().await?;

    Ok(Json(ListItemsResponse::new(items)))
}

/// Update item handler
#[utoipa::path(
    post,
    path = "/update-item/{item_id}/",
    params(("item_id" = String, Path, description = "Item identifier")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Number of records modified", body = UpdateItemResponse),
        (status = 400, description = "Malformed body or identifier", body = super::errors::ErrorResponse),
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    body: Bytes,
) -> Result<Json<UpdateItemResponse>, ApiError> {
    // Fail fast on malformed identifiers instead of passing them through
    // to the store.
    let id = ItemId::parse(&item_id)?;
    let request = UpdateItemRequest::parse(&body)?;

    let modified_count = state.store.update_fields(&id, request.into_patch()).await?;

    Ok(Json(UpdateItemResponse::new(modified_count)))
}

/// Delete item handler
#[utoipa::path(
    delete,
    path = "/delete-item/{item_id}/",
    params(("item_id" = String, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Number of records deleted", body = DeleteItemResponse),
        (status = 400, description = "Malformed identifier", body = super::errors::ErrorResponse),
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<DeleteItemResponse>, ApiError> {
    let id = ItemId::parse(&item_id)?;

    let deleted_count = state.store.delete(&id).await?;

    Ok(Json(DeleteItemResponse::new(deleted_count)))
}

/// Health check handler
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Serve the generated OpenAPI document
async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryItemStore;

    fn create_test_server() -> RestServer {
        RestServer::new(Arc::new(MemoryItemStore::new()))
    }

    #[test]
    fn test_server_creation() {
        let server = create_test_server();
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig {
            port: 9090,
            ..Default::default()
        };
        let server = RestServer::with_config(Arc::new(MemoryItemStore::new()), config);
        assert_eq!(server.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_router_builds() {
        let server = create_test_server();
        let _router = server.router();
        // If we get here, router construction succeeded
    }
}
