use std::fmt;

use serde::Serialize;

use super::user::UserRecord;

/// Why a login attempt did not produce an identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoginFailure {
    /// No active record's name starts with the input
    NoNameMatch,
    /// Prefix hits existed but neither the first-name nor the full-name rule kept any
    NoExactNameMatch,
    /// A name matched but no candidate's normalized phone equals the input
    PhoneMismatch,
    /// More than one candidate survived every filter
    AmbiguousMatch,
    /// The directory read itself failed
    DirectoryUnavailable,
    /// First name or phone was blank after trimming
    InvalidInput,
}

impl LoginFailure {
    /// Stable upper-case code used in logs and the CLI
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoNameMatch => "NO_NAME_MATCH",
            Self::NoExactNameMatch => "NO_EXACT_NAME_MATCH",
            Self::PhoneMismatch => "PHONE_MISMATCH",
            Self::AmbiguousMatch => "AMBIGUOUS_MATCH",
            Self::DirectoryUnavailable => "DIRECTORY_UNAVAILABLE",
            Self::InvalidInput => "INVALID_INPUT",
        }
    }

    /// True for every reason that should surface as a generic
    /// "invalid credentials" message to the end user
    pub fn is_credential_failure(&self) -> bool {
        !matches!(self, Self::DirectoryUnavailable)
    }
}

impl fmt::Display for LoginFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of a single login resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginResult {
    Authenticated { user: UserRecord },
    Failed { reason: LoginFailure },
}

impl LoginResult {
    pub fn failed(reason: LoginFailure) -> Self {
        Self::Failed { reason }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// The failure reason, if any
    pub fn failure(&self) -> Option<LoginFailure> {
        match self {
            Self::Authenticated { .. } => None,
            Self::Failed { reason } => Some(*reason),
        }
    }
}

impl From<Result<UserRecord, LoginFailure>> for LoginResult {
    fn from(result: Result<UserRecord, LoginFailure>) -> Self {
        match result {
            Ok(user) => Self::Authenticated { user },
            Err(reason) => Self::Failed { reason },
        }
    }
}
