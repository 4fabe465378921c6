//! CLI module for item-api
//!
//! Provides command-line interface for:
//! - start: Load configuration, connect to the store, and serve HTTP
//! - openapi: Print the generated OpenAPI document

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{openapi, run, run_command, start};
pub use errors::{CliError, CliResult};
