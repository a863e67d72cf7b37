//! CLI command definitions and dispatch.

pub mod edition;
pub mod file;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use conspects_client::ReqwestTransport;
use conspects_core::config::ClientConfig;
use conspects_core::error::AppError;
use conspects_core::traits::transport::HttpTransport;

use crate::output::OutputFormat;

/// Conspects: browse, edit, duplicate, and export course content
#[derive(Debug, Parser)]
#[command(name = "conspects", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "CONSPECTS_CONFIG",
        default_value = "config/conspects.toml"
    )]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show, edit, and download files
    File(file::FileArgs),
    /// List, create, duplicate, and export editions
    Edition(edition::EditionArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &ClientConfig) -> Result<(), AppError> {
        let transport = connect(config)?;
        match &self.command {
            Commands::File(args) => file::execute(args, transport, self.format).await,
            Commands::Edition(args) => {
                edition::execute(args, transport, config, self.format).await
            }
        }
    }
}

/// Helper: build the HTTP transport from config
pub fn connect(config: &ClientConfig) -> Result<Arc<dyn HttpTransport>, AppError> {
    Ok(Arc::new(ReqwestTransport::new(&config.api)?))
}

/// Helper: map a dialoguer failure
pub fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {}", e))
}
