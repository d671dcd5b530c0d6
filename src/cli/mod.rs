// CLI module for operations that need direct directory access

pub mod check_login;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::config::migrate_directory_database;

/// Tactical dashboard backend
#[derive(Parser, Debug)]
#[command(name = "tactical-backend")]
#[command(about = "Login backend for the monthly tactical dashboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run pending migrations and start the HTTP server (default)
    Serve,

    /// Run pending directory migrations and exit
    Migrate,

    /// Try a first name + phone login against the directory and print the outcome
    CheckLogin {
        /// First name as the user would type it
        #[arg(long)]
        first_name: String,

        /// Phone number as the user would type it
        #[arg(long)]
        phone: String,
    },
}

/// Execute a one-shot CLI command
/// 
/// `Serve` is handled by the caller since it owns the HTTP server.
/// 
/// # Returns
/// * `Ok(())` - Command executed successfully
/// * `Err(...)` - Command execution failed or the login check was rejected
pub async fn execute_command(
    command: Commands,
    db: DatabaseConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Serve => {
            tracing::warn!("serve is handled by main; nothing to do");
        }
        Commands::Migrate => {
            migrate_directory_database(&db).await?;
            println!("Migrations applied");
        }
        Commands::CheckLogin { first_name, phone } => {
            // Read-only: never touches the schema
            let app_data = Arc::new(AppData::init(db));
            match check_login::check_login(app_data, &first_name, &phone).await {
                Ok(report) => println!("{}", report),
                Err(code) => return Err(format!("Login rejected: {}", code).into()),
            }
        }
    }
    
    Ok(())
}
