// Common test utilities for integration tests

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::Mutex;

use migration::{DirectoryMigrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use tactical_backend::types::db::unified_user;
use tactical_backend::types::internal::{UserRecord, UserStatus};

/// Creates a test directory database with migrations applied
pub async fn setup_test_directory_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    DirectoryMigrator::up(&db, None)
        .await
        .expect("Failed to run directory migrations");

    db
}

/// Inserts one row into `unified_users`
pub async fn insert_user(
    db: &DatabaseConnection,
    id: &str,
    name: &str,
    phone: Option<&str>,
    role: &str,
    status: &str,
    dashboard_access: Option<&str>,
) {
    let now = chrono::Utc::now().timestamp();
    unified_user::ActiveModel {
        id: Set(id.to_string()),
        name: Set(name.to_string()),
        email: Set(None),
        phone: Set(phone.map(str::to_string)),
        role: Set(role.to_string()),
        department: Set(None),
        status: Set(status.to_string()),
        dashboard_access: Set(dashboard_access.map(str::to_string)),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("Failed to insert user");
}

/// Builds an in-memory directory record
pub fn user(id: &str, name: &str, phone: Option<&str>, role: &str, status: UserStatus) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: None,
        phone: phone.map(str::to_string),
        role: role.to_string(),
        department: None,
        status,
        dashboard_access: BTreeSet::new(),
    }
}

/// Helper to manage environment variables in tests
/// 
/// Cleans up specified environment variables on creation and drop,
/// ensuring test isolation when dealing with global environment state.
pub struct EnvGuard {
    vars: Vec<String>,
}

impl EnvGuard {
    pub fn new(vars: Vec<&str>) -> Self {
        for var in &vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
        Self {
            vars: vars.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for var in &self.vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }
}

/// Environment variables are process-global, so tests touching them run serially
pub static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());
