pub mod audit_logger;
pub mod login;

pub use audit_logger::{AuditLogger, EventType};
