use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Account status as stored in the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    /// Read a stored status column. Anything other than `active` is treated
    /// as inactive so unknown values can never grant a login.
    pub fn from_db(value: &str) -> Self {
        if value == "active" {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user as seen by the login core
///
/// Owned by the external directory; the login path only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    /// Display name; the first space-separated token is the first name
    pub name: String,
    pub email: Option<String>,
    /// Free-text phone, may carry a country code or punctuation
    pub phone: Option<String>,
    pub role: String,
    pub department: Option<String>,
    pub status: UserStatus,
    pub dashboard_access: BTreeSet<String>,
}

impl UserRecord {
    /// First token of `name`, split on a single space
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or_default()
    }
}
