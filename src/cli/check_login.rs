// check-login command implementation
// Runs one login attempt against the configured directory and reports the outcome

use std::sync::Arc;

use crate::app_data::AppData;
use crate::coordinators::LoginCoordinator;
use crate::types::internal::context::RequestContext;

/// Resolve a login the same way the HTTP endpoint does and describe the result
/// 
/// # Returns
/// * `Ok(String)` - `AUTHENTICATED ...` line on success
/// * `Err(String)` - failure code (e.g. `PHONE_MISMATCH`) otherwise
pub async fn check_login(
    app_data: Arc<AppData>,
    first_name: &str,
    phone: &str,
) -> Result<String, String> {
    let ctx = RequestContext::for_cli("check-login");
    let coordinator = LoginCoordinator::new(app_data);

    match coordinator.login(&ctx, first_name, phone).await {
        Ok(authenticated) => Ok(format!(
            "AUTHENTICATED {} ({}) id={} route={}",
            authenticated.user.name,
            authenticated.user.role,
            authenticated.user.id,
            authenticated.dashboard_route,
        )),
        Err(reason) => Err(reason.code().to_string()),
    }
}
