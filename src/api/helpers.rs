use std::net::IpAddr;

use poem::Request;

use crate::types::internal::RequestContext;

/// Best-effort client IP: `X-Forwarded-For`, then `X-Real-IP`, then the peer address
pub fn extract_ip_address(req: &Request) -> Option<IpAddr> {
    // Check X-Forwarded-For header (proxy/load balancer)
    if let Some(forwarded) = req.header("X-Forwarded-For") {
        if let Some(ip) = forwarded.split(',').next() {
            if let Ok(ip) = ip.trim().parse() {
                return Some(ip);
            }
        }
    }

    // Check X-Real-IP header (nginx)
    if let Some(real_ip) = req.header("X-Real-IP") {
        if let Ok(ip) = real_ip.trim().parse() {
            return Some(ip);
        }
    }

    // Fall back to remote address
    req.remote_addr()
        .as_socket_addr()
        .map(|addr| addr.ip())
}

/// Build the request context for an incoming HTTP request
pub fn request_context(req: &Request) -> RequestContext {
    RequestContext::for_api(extract_ip_address(req))
}
