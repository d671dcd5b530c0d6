use std::collections::BTreeSet;
use std::sync::Arc;

use crate::AppData;
use crate::audit::AuditLogger;
use crate::providers::LoginResolver;
use crate::providers::role_catalog::{self, UserCategory};
use crate::types::internal::{LoginFailure, LoginResult, RequestContext, UserRecord};

/// A resolved identity together with where it lands and what it may open
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: UserRecord,
    pub category: Option<UserCategory>,
    pub dashboard_route: &'static str,
    pub dashboard_access: BTreeSet<String>,
}

impl AuthenticatedUser {
    fn from_user(user: UserRecord) -> Self {
        let profile = role_catalog::role_profile(&user.role);
        Self {
            category: profile.map(|p| p.category),
            dashboard_route: role_catalog::dashboard_route(&user.role),
            dashboard_access: role_catalog::effective_dashboard_access(&user),
            user,
        }
    }

    /// Department from the record, else the role's default
    pub fn department(&self) -> Option<String> {
        self.user.department.clone().or_else(|| {
            role_catalog::role_profile(&self.user.role)
                .and_then(|p| p.department)
                .map(str::to_string)
        })
    }
}

pub struct LoginCoordinator {
    login_resolver: Arc<dyn LoginResolver>,
    audit_logger: Arc<AuditLogger>,
}

impl LoginCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            login_resolver: Arc::clone(&app_data.login_resolver),
            audit_logger: Arc::clone(&app_data.audit_logger),
        }
    }

    /// Resolve a login attempt and record the audit event
    pub async fn login(
        &self,
        ctx: &RequestContext,
        first_name: &str,
        phone: &str,
    ) -> Result<AuthenticatedUser, LoginFailure> {
        match self.login_resolver.resolve_login(first_name, phone).await {
            LoginResult::Authenticated { user } => {
                self.audit_logger.log_login_success(ctx, &user);
                Ok(AuthenticatedUser::from_user(user))
            }
            LoginResult::Failed { reason } => {
                self.audit_logger.log_login_failure(ctx, first_name, reason);
                Err(reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::InMemoryUserDirectory;
    use crate::types::internal::UserStatus;

    fn coordinator(users: Vec<UserRecord>) -> LoginCoordinator {
        let app_data = Arc::new(AppData::with_directory(Arc::new(InMemoryUserDirectory::new(users))));
        LoginCoordinator::new(app_data)
    }

    fn user(name: &str, phone: &str, role: &str) -> UserRecord {
        UserRecord {
            id: format!("usr-{}", name.to_lowercase().replace(' ', "-")),
            name: name.to_string(),
            email: None,
            phone: Some(phone.to_string()),
            role: role.to_string(),
            department: None,
            status: UserStatus::Active,
            dashboard_access: BTreeSet::new(),
        }
    }

    #[tokio::test]
    async fn test_login_success_carries_route_and_role_defaults() {
        let coordinator = coordinator(vec![user("Rachel HR", "+91-9876543224", "HR")]);
        let ctx = RequestContext::for_cli("test");

        let authenticated = coordinator.login(&ctx, "Rachel", "9876543224").await.unwrap();

        assert_eq!(authenticated.user.name, "Rachel HR");
        assert_eq!(authenticated.dashboard_route, "/admin");
        assert_eq!(authenticated.category, Some(UserCategory::Admin));
        assert!(authenticated.dashboard_access.contains("hr_dashboard"));
        assert_eq!(authenticated.department().as_deref(), Some("Human Resources"));
    }

    #[tokio::test]
    async fn test_login_failure_returns_reason() {
        let coordinator = coordinator(vec![user("Rachel HR", "9876543224", "HR")]);
        let ctx = RequestContext::for_cli("test");

        let err = coordinator.login(&ctx, "Rachel", "1111111111").await.unwrap_err();
        assert_eq!(err, LoginFailure::PhoneMismatch);
    }

    #[tokio::test]
    async fn test_unknown_role_lands_on_generic_dashboard() {
        let coordinator = coordinator(vec![user("Carl Client", "9876543299", "Client")]);
        let ctx = RequestContext::for_api(None);

        let authenticated = coordinator.login(&ctx, "carl", "9876543299").await.unwrap();
        assert_eq!(authenticated.dashboard_route, "/client");
        assert_eq!(authenticated.category, None);
        assert!(authenticated.dashboard_access.is_empty());
        assert_eq!(authenticated.department(), None);
    }
}
