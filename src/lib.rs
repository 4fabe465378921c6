//! item-api - A minimal CRUD HTTP API for Item records backed by MongoDB

pub mod cli;
pub mod config;
pub mod rest_api;
pub mod store;
