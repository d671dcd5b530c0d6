use std::sync::Arc;

use crate::providers::phone_normalizer::normalize_phone;
use crate::stores::UserDirectory;
use crate::types::internal::{LoginFailure, UserRecord};

/// Resolves a first name + phone pair to at most one directory user
pub struct CandidateMatcher {
    directory: Arc<dyn UserDirectory>,
}

impl CandidateMatcher {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Query the directory once and select the single matching user
    ///
    /// Inputs are expected to be trimmed and non-empty. A failed directory
    /// read yields `DirectoryUnavailable`; nothing is retried.
    pub async fn find_match(&self, first_name: &str, phone: &str) -> Result<UserRecord, LoginFailure> {
        let prefiltered = self
            .directory
            .find_active_by_name_prefix(first_name)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "User directory read failed");
                LoginFailure::DirectoryUnavailable
            })?;

        select_candidate(prefiltered, first_name, phone)
    }
}

/// Pick the authenticated user out of the directory's prefix hits
///
/// Order of `prefiltered` never affects the outcome: every surviving
/// candidate is counted and more than one is reported as ambiguous.
pub fn select_candidate(
    prefiltered: Vec<UserRecord>,
    first_name: &str,
    phone: &str,
) -> Result<UserRecord, LoginFailure> {
    // Only active users may log in, whatever the directory returned
    let prefiltered: Vec<UserRecord> = prefiltered
        .into_iter()
        .filter(|u| u.status.is_active())
        .collect();

    if prefiltered.is_empty() {
        return Err(LoginFailure::NoNameMatch);
    }

    let wanted = first_name.to_lowercase();
    let (exact, others): (Vec<UserRecord>, Vec<UserRecord>) = prefiltered
        .into_iter()
        .partition(|u| u.first_name().to_lowercase() == wanted);

    let candidates = if exact.is_empty() {
        others
            .into_iter()
            .filter(|u| u.name.to_lowercase().starts_with(&wanted))
            .collect()
    } else {
        exact
    };

    if candidates.is_empty() {
        return Err(LoginFailure::NoExactNameMatch);
    }

    let input_phone = normalize_phone(phone);
    let mut matches = candidates.into_iter().filter(|u| {
        let stored = normalize_phone(u.phone.as_deref());
        !stored.is_empty() && stored == input_phone
    });

    match (matches.next(), matches.next()) {
        (None, _) => Err(LoginFailure::PhoneMismatch),
        (Some(user), None) => Ok(user),
        (Some(_), Some(_)) => Err(LoginFailure::AmbiguousMatch),
    }
}
