use std::net::IpAddr;

use uuid::Uuid;

/// Where a request originated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestSource {
    API,
    CLI,
}

/// Request context that flows through all layers
/// 
/// Contains contextual information about the current request that is needed
/// for logging and auditing across API, coordinator, and provider layers.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    /// IP address of the client making the request
    pub ip_address: Option<IpAddr>,
    
    /// Unique identifier for this request (for tracing across layers)
    pub request_id: Uuid,

    /// Source of the request (API or CLI)
    pub source: RequestSource,

    /// Actor who initiated the operation
    pub actor_id: String,
}

impl RequestContext {
    /// Create a RequestContext for an HTTP request
    pub fn for_api(ip_address: Option<IpAddr>) -> Self {
        Self {
            ip_address,
            request_id: Uuid::new_v4(),
            source: RequestSource::API,
            actor_id: "api:anonymous".to_string(),
        }
    }

    /// Create a RequestContext for CLI operations
    pub fn for_cli(command_name: &str) -> Self {
        Self {
            ip_address: None,
            request_id: Uuid::new_v4(),
            source: RequestSource::CLI,
            actor_id: format!("cli:{}", command_name),
        }
    }
}
