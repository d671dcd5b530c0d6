use sea_orm::{Database, DatabaseConnection};
use migration::{DirectoryMigrator, MigratorTrait};

use crate::config::BootstrapSettings;
use crate::errors::InternalError;

/// Connect to the directory database
///
/// Does NOT run migrations - call `migrate_directory_database()` separately.
pub async fn init_database(bootstrap_settings: &BootstrapSettings) -> Result<DatabaseConnection, InternalError> {
    let db = Database::connect(bootstrap_settings.database_url())
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::debug!("Connected to directory database");

    Ok(db)
}

/// Run pending migrations on the directory database
pub async fn migrate_directory_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    DirectoryMigrator::up(db, None)
        .await
        .map_err(|e| InternalError::database("run_migrations", e))?;
    
    tracing::debug!("Directory database migrations completed");
    
    Ok(())
}
