//! # Item REST API Module
//!
//! Provides the HTTP endpoints for CRUD operations on the Item resource:
//! parse and validate input, invoke the Resource Store, and serialize
//! results as JSON.

pub mod doc;
pub mod errors;
pub mod request;
pub mod response;
pub mod server;

pub use doc::ApiDoc;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use request::{CreateItemRequest, UpdateItemRequest};
pub use response::{DeleteItemResponse, ListItemsResponse, UpdateItemResponse};
pub use server::RestServer;
