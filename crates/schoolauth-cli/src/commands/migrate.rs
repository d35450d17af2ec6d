//! Database migration management commands.

use clap::{Args, Subcommand};

use schoolauth_core::error::AppError;
use schoolauth_database::migration::run_migrations;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::connect(&config).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            match run_migrations(&pool).await? {
                Some(version) => {
                    output::print_success(&format!("Schema is at version {version}."))
                }
                None => output::print_warning("No migrations are embedded."),
            }
        }
    }

    pool.close().await;
    Ok(())
}
