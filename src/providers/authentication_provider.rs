use std::sync::Arc;

use async_trait::async_trait;

use crate::providers::candidate_matcher::CandidateMatcher;
use crate::stores::UserDirectory;
use crate::types::internal::{LoginFailure, LoginResult};

/// Turns a login attempt into an identity or a failure reason
///
/// Callers hold an `Arc<dyn LoginResolver>` so the credential scheme can be
/// replaced without touching them.
#[async_trait]
pub trait LoginResolver: Send + Sync {
    async fn resolve_login(&self, first_name: &str, phone: &str) -> LoginResult;
}

/// First name + phone number login against the user directory
///
/// Stateless and read-only: the same directory contents and input always
/// give the same result.
pub struct PhoneLoginResolver {
    matcher: CandidateMatcher,
}

impl PhoneLoginResolver {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            matcher: CandidateMatcher::new(directory),
        }
    }
}

#[async_trait]
impl LoginResolver for PhoneLoginResolver {
    async fn resolve_login(&self, first_name: &str, phone: &str) -> LoginResult {
        let first_name = first_name.trim();
        let phone = phone.trim();

        if first_name.is_empty() || phone.is_empty() {
            return LoginResult::failed(LoginFailure::InvalidInput);
        }

        self.matcher.find_match(first_name, phone).await.into()
    }
}
