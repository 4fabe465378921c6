//! CLI argument definitions using clap
//!
//! Commands:
//! - item-api start --config <path>
//! - item-api openapi

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// item-api - A minimal CRUD HTTP API for Item records backed by MongoDB
#[derive(Parser, Debug)]
#[command(name = "item-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the Item API server
    Start {
        /// Path to configuration file (defaults apply if absent)
        #[arg(long, default_value = "./item-api.json")]
        config: PathBuf,
    },

    /// Print the OpenAPI document to stdout and exit
    Openapi,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
