use std::sync::Arc;

use poem::Request;
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::AppData;
use crate::api::helpers::request_context;
use crate::coordinators::LoginCoordinator;
use crate::errors::AuthError;
use crate::types::dto::auth::{LoginRequest, LoginResponse};

/// Authentication API endpoints
pub struct AuthApi {
    login_coordinator: LoginCoordinator,
}

impl AuthApi {
    /// Create a new AuthApi over the shared application data
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            login_coordinator: LoginCoordinator::new(app_data),
        }
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Login with first name and phone number
    ///
    /// Returns the user, their landing route, and the dashboards they may open.
    /// Any credential problem yields the same 401 response; 503 means the
    /// directory could not be read and the request may be retried.
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, req: &Request, body: Json<LoginRequest>) -> Result<Json<LoginResponse>, AuthError> {
        let ctx = request_context(req);

        let authenticated = self
            .login_coordinator
            .login(&ctx, &body.first_name, &body.phone)
            .await?;

        Ok(Json(LoginResponse::from(authenticated)))
    }
}
