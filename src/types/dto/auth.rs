use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::coordinators::AuthenticatedUser;

/// Request model for first-name + phone login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// First name as registered in the directory (case-insensitive)
    pub first_name: String,

    /// Phone number; country code, spaces, dashes and parentheses are ignored
    pub phone: String,
}

/// Public view of an authenticated user
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: String,
    /// Role category (employee, admin, ...) when the role is predefined
    pub user_category: Option<String>,
    pub department: Option<String>,
    pub status: String,
}

impl From<&AuthenticatedUser> for UserResponse {
    fn from(authenticated: &AuthenticatedUser) -> Self {
        let user = &authenticated.user;
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role.clone(),
            user_category: authenticated.category.map(|c| c.as_str().to_string()),
            department: authenticated.department(),
            status: user.status.to_string(),
        }
    }
}

/// Response model for a successful login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user
    pub user: UserResponse,

    /// Route the client should land on for this user's role
    pub dashboard_route: String,

    /// Dashboards the user may open
    pub dashboard_access: Vec<String>,
}

impl From<AuthenticatedUser> for LoginResponse {
    fn from(authenticated: AuthenticatedUser) -> Self {
        Self {
            user: UserResponse::from(&authenticated),
            dashboard_route: authenticated.dashboard_route.to_string(),
            dashboard_access: authenticated.dashboard_access.into_iter().collect(),
        }
    }
}
