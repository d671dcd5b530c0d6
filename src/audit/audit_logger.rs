use std::fmt;

use crate::types::internal::context::RequestContext;

/// Kinds of audit events emitted by the login path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    LoginSuccess,
    LoginFailure,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoginSuccess => write!(f, "login_success"),
            Self::LoginFailure => write!(f, "login_failure"),
        }
    }
}

/// Audit logger that records security-relevant events on the `audit` tracing target
///
/// Events carry the request id, source, actor and client IP from the
/// [`RequestContext`]. Phone numbers are never recorded.
#[derive(Debug, Default)]
pub struct AuditLogger;

impl AuditLogger {
    pub fn new() -> Self {
        Self
    }

    pub(super) fn ip_of(ctx: &RequestContext) -> String {
        ctx.ip_address
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}
