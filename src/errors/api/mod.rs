// API-facing error types
pub mod auth;

#[cfg(test)]
mod auth_test;

pub use auth::AuthError;
