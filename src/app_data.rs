use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::audit::AuditLogger;
use crate::providers::{LoginResolver, PhoneLoginResolver};
use crate::stores::{UserDirectory, UserStore};

/// Centralized application data following the main-owned stores pattern
/// 
/// All dependencies are created once in main.rs and shared across coordinators.
/// The directory is injected, never reached through a global client.
/// 
/// # Architecture
/// 
/// ```text
/// main.rs
///   ↓
/// AppData::init(db)
///   ↓ creates once
///   ├─ login_resolver (Arc<dyn LoginResolver>) PhoneLoginResolver over UserStore
///   └─ audit_logger (Arc<AuditLogger>)
///   ↓ wrapped in Arc<AppData>
///   ↓ passed to coordinators
///   └─ LoginCoordinator::new(app_data)
/// ```
pub struct AppData {
    pub login_resolver: Arc<dyn LoginResolver>,
    pub audit_logger: Arc<AuditLogger>,
}

impl AppData {
    /// Build application data over a database-backed directory
    /// 
    /// The connection should already be migrated.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::info!("Initializing AppData...");
        let app_data = Self::with_directory(Arc::new(UserStore::new(db)));
        tracing::info!("AppData initialization complete");
        app_data
    }

    /// Build application data over any directory implementation
    pub fn with_directory(directory: Arc<dyn UserDirectory>) -> Self {
        let login_resolver: Arc<dyn LoginResolver> =
            Arc::new(PhoneLoginResolver::new(directory));

        Self {
            login_resolver,
            audit_logger: Arc::new(AuditLogger::new()),
        }
    }
}
