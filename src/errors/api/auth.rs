use crate::types::internal::LoginFailure;
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Standardized error response for authentication endpoints
#[derive(Object, Debug)]
pub struct AuthErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Authentication error types
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// First name and phone do not identify exactly one active user
    #[oai(status = 401)]
    InvalidCredentials(Json<AuthErrorResponse>),

    /// The user directory could not be read; the attempt may be retried
    #[oai(status = 503)]
    DirectoryUnavailable(Json<AuthErrorResponse>),
}

impl AuthError {
    /// Create an InvalidCredentials error
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(AuthErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid first name or phone number".to_string(),
            status_code: 401,
        }))
    }

    /// Create a DirectoryUnavailable error
    pub fn directory_unavailable() -> Self {
        AuthError::DirectoryUnavailable(Json(AuthErrorResponse {
            error: "directory_unavailable".to_string(),
            message: "Login is temporarily unavailable, please try again".to_string(),
            status_code: 503,
        }))
    }

    /// Convert a login failure into the client-facing error
    ///
    /// Every credential failure collapses to the same response so the client
    /// cannot tell which half of the credential pair was wrong.
    pub fn from_login_failure(reason: LoginFailure) -> Self {
        if reason.is_credential_failure() {
            tracing::debug!("Login rejected: {}", reason);
            Self::invalid_credentials()
        } else {
            Self::directory_unavailable()
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AuthError::InvalidCredentials(json) => json.0.message.clone(),
            AuthError::DirectoryUnavailable(json) => json.0.message.clone(),
        }
    }

    /// HTTP status carried by the variant
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::InvalidCredentials(json) => json.0.status_code,
            AuthError::DirectoryUnavailable(json) => json.0.status_code,
        }
    }
}

impl From<LoginFailure> for AuthError {
    fn from(reason: LoginFailure) -> Self {
        Self::from_login_failure(reason)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
