//! CLI command definitions and dispatch.

pub mod migrate;
pub mod school;
pub mod serve;

use clap::{Parser, Subcommand};

use schoolauth_core::config::AppConfig;
use schoolauth_core::error::AppError;
use sqlx::PgPool;

use schoolauth_database::pool;

use crate::output::OutputFormat;

/// SchoolAuth: school-registry authentication backend
#[derive(Debug, Parser)]
#[command(name = "schoolauth", version, about, long_about = None)]
pub struct Cli {
    /// Path to an overlay configuration file (merged over config/default.toml)
    #[arg(short, long, default_value = "config/local.toml")]
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
    /// Start the SchoolAuth server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// School registry management
    School(school::SchoolArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::School(args) => school::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: connect to the database from config
pub async fn connect(config: &AppConfig) -> Result<PgPool, AppError> {
    pool::connect(&config.database).await
}
