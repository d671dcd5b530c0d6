// Database entities
pub mod unified_user;
