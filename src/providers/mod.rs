// Providers layer - Work performers and business logic
//
// Providers contain the login rules and role data that coordinators
// orchestrate. None of them write to the directory.

pub mod authentication_provider;
pub mod candidate_matcher;
pub mod phone_normalizer;
pub mod role_catalog;

pub use authentication_provider::{LoginResolver, PhoneLoginResolver};
pub use candidate_matcher::CandidateMatcher;
pub use phone_normalizer::normalize_phone;
