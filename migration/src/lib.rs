pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_unified_users;

/// Migrator for the user directory database
pub struct DirectoryMigrator;

#[async_trait::async_trait]
impl MigratorTrait for DirectoryMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_unified_users::Migration),
        ]
    }
}
