//! School registry CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use schoolauth_auth::validation::is_valid_school_id;
use schoolauth_core::error::AppError;
use schoolauth_database::repositories::SchoolRepository;
use schoolauth_entity::school::School;

use crate::output::{self, OutputFormat};

/// Arguments for school commands
#[derive(Debug, Args)]
pub struct SchoolArgs {
    /// School subcommand
    #[command(subcommand)]
    pub command: SchoolCommand,
}

/// School subcommands
#[derive(Debug, Subcommand)]
pub enum SchoolCommand {
    /// Register a school
    Add {
        /// Ten-digit school identifier
        school_id: String,
    },
    /// List registered schools
    List,
    /// Remove a school with no registered users
    Remove {
        /// Ten-digit school identifier
        school_id: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// School display row for table output
#[derive(Debug, Serialize, Tabled)]
struct SchoolRow {
    /// School ID
    school_id: String,
    /// Registered users
    users: i64,
    /// Created at
    created_at: String,
}

/// Execute school commands
pub async fn execute(
    args: &SchoolArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::connect(&config).await?;
    let repo = SchoolRepository::new(pool.clone());

    let result = run(&repo, &args.command, format).await;
    pool.close().await;
    result
}

async fn run(
    repo: &SchoolRepository,
    command: &SchoolCommand,
    format: OutputFormat,
) -> Result<(), AppError> {
    match command {
        SchoolCommand::Add { school_id } => {
            if !is_valid_school_id(school_id) {
                return Err(AppError::bad_school(format!(
                    "'{school_id}' is not a 10-digit school identifier"
                )));
            }

            if repo.create(school_id).await? {
                output::print_success(&format!("School '{school_id}' added"));
            } else {
                output::print_warning(&format!("School '{school_id}' already exists"));
            }
        }
        SchoolCommand::List => {
            let schools = repo.find_all().await?;
            let mut rows = Vec::with_capacity(schools.len());
            for School {
                school_id,
                created_at,
            } in schools
            {
                rows.push(SchoolRow {
                    users: repo.count_users(&school_id).await?,
                    school_id,
                    created_at: created_at.format("%Y-%m-%d %H:%M").to_string(),
                });
            }

            output::print_list(&rows, format);
        }
        SchoolCommand::Remove { school_id, force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Remove school '{school_id}'?"))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            if repo.delete(school_id).await? {
                output::print_success(&format!("School '{school_id}' removed"));
            } else {
                output::print_warning(&format!("School '{school_id}' not found"));
            }
        }
    }

    Ok(())
}
