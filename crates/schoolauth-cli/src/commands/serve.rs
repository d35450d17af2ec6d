//! Start the SchoolAuth server.

use clap::Args;

use schoolauth_core::error::AppError;
use schoolauth_database::migration::run_migrations;

use crate::output;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Skip database migrations on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting SchoolAuth server...");
    output::print_kv("Host", &config.server.host);
    output::print_kv("Port", &config.server.port.to_string());
    output::print_kv("Session backend", &config.session.backend.to_string());

    let pool = super::connect(&config).await?;

    if config.database.run_migrations && !args.no_migrate {
        run_migrations(&pool).await?;
        output::print_success("Migrations applied.");
    }

    schoolauth_api::run_server(config, pool).await
}
