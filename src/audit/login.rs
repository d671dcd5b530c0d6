use crate::types::internal::context::RequestContext;
use crate::types::internal::{LoginFailure, UserRecord};

use super::audit_logger::EventType;
use super::AuditLogger;

impl AuditLogger {
    /// Log a successful login
    ///
    /// # Arguments
    /// * `ctx` - Request context containing actor information
    /// * `user` - The user who logged in (target of the action)
    pub fn log_login_success(&self, ctx: &RequestContext, user: &UserRecord) {
        tracing::info!(
            target: "audit",
            event_type = %EventType::LoginSuccess,
            request_id = %ctx.request_id,
            source = ?ctx.source,
            actor_id = %ctx.actor_id,
            ip_address = %Self::ip_of(ctx),
            target_user_id = %user.id,
            role = %user.role,
            "Login succeeded"
        );
    }

    /// Log a rejected login attempt
    ///
    /// # Arguments
    /// * `ctx` - Request context containing actor information
    /// * `first_name` - First name as typed by the caller
    /// * `reason` - Why the attempt was rejected
    pub fn log_login_failure(&self, ctx: &RequestContext, first_name: &str, reason: LoginFailure) {
        if reason.is_credential_failure() {
            tracing::warn!(
                target: "audit",
                event_type = %EventType::LoginFailure,
                request_id = %ctx.request_id,
                source = ?ctx.source,
                actor_id = %ctx.actor_id,
                ip_address = %Self::ip_of(ctx),
                first_name = %first_name.trim(),
                reason = %reason,
                "Login rejected"
            );
        } else {
            tracing::error!(
                target: "audit",
                event_type = %EventType::LoginFailure,
                request_id = %ctx.request_id,
                source = ?ctx.source,
                actor_id = %ctx.actor_id,
                ip_address = %Self::ip_of(ctx),
                first_name = %first_name.trim(),
                reason = %reason,
                "Login could not be evaluated"
            );
        }
    }
}
