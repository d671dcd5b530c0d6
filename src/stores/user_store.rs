use std::collections::BTreeSet;

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::errors::InternalError;
use crate::types::db::unified_user;
use crate::types::internal::{UserRecord, UserStatus};

/// Read capability over the user directory
///
/// The login path only needs one query: every active user whose name starts
/// with a given string, compared case-insensitively.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_active_by_name_prefix(&self, prefix: &str) -> Result<Vec<UserRecord>, InternalError>;
}

/// Directory backed by the `unified_users` table
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserDirectory for UserStore {
    async fn find_active_by_name_prefix(&self, prefix: &str) -> Result<Vec<UserRecord>, InternalError> {
        let wanted = prefix.to_lowercase();

        // SQL LOWER folds ASCII only on some backends, so the query is a
        // superset and the exact prefix check happens below
        let rows = unified_user::Entity::find()
            .filter(unified_user::Column::Status.eq(UserStatus::Active.as_str()))
            .filter(
                Expr::expr(Func::lower(Expr::col(unified_user::Column::Name)))
                    .like(LikeExpr::new(loose_like_pattern(&wanted)).escape('\\')),
            )
            .order_by_asc(unified_user::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_active_by_name_prefix", e))?;

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            if !name_has_prefix(&row.name, &wanted) {
                continue;
            }

            let id = row.id.clone();
            match UserRecord::try_from(row) {
                Ok(user) => users.push(user),
                Err(e) => {
                    // One unreadable row must not block other users sharing the prefix
                    tracing::warn!(user_id = %id, error = %e, "Skipping unreadable directory row");
                }
            }
        }

        tracing::debug!(prefix = %prefix, count = users.len(), "Directory prefix lookup");

        Ok(users)
    }
}

impl TryFrom<unified_user::Model> for UserRecord {
    type Error = InternalError;

    fn try_from(u: unified_user::Model) -> Result<Self, Self::Error> {
        let dashboard_access = parse_dashboard_access(u.dashboard_access.as_deref())?;

        Ok(Self {
            id: u.id,
            name: u.name,
            email: u.email,
            phone: u.phone,
            role: u.role,
            department: u.department,
            status: UserStatus::from_db(&u.status),
            dashboard_access,
        })
    }
}

/// Parse the stored JSON array of dashboard tags; NULL or blank is an empty set
pub fn parse_dashboard_access(raw: Option<&str>) -> Result<BTreeSet<String>, InternalError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(BTreeSet::new()),
        Some(json) => serde_json::from_str(json)
            .map_err(|e| InternalError::parse("dashboard_access", e.to_string())),
    }
}

/// Escape LIKE wildcards so user input only ever matches literally
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// LIKE pattern for an already lowercased prefix
///
/// ASCII characters are kept (escaped); any run of non-ASCII characters
/// becomes `%`, since their case folding is not portable across databases.
fn loose_like_pattern(lowercased_prefix: &str) -> String {
    let mut pattern = String::with_capacity(lowercased_prefix.len() + 1);
    let mut widened = false;
    for c in lowercased_prefix.chars() {
        if c.is_ascii() {
            pattern.push_str(&escape_like(c.encode_utf8(&mut [0; 4])));
            widened = false;
        } else if !widened {
            pattern.push('%');
            widened = true;
        }
    }
    if !widened {
        pattern.push('%');
    }
    pattern
}

/// Case-insensitive starts-with over the full Unicode range
fn name_has_prefix(name: &str, lowercased_prefix: &str) -> bool {
    name.to_lowercase().starts_with(lowercased_prefix)
}

/// Directory held entirely in memory
///
/// Applies the same active + case-insensitive prefix rule as [`UserStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: Vec<UserRecord>,
}

impl InMemoryUserDirectory {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_active_by_name_prefix(&self, prefix: &str) -> Result<Vec<UserRecord>, InternalError> {
        let prefix = prefix.to_lowercase();
        Ok(self
            .users
            .iter()
            .filter(|u| u.status.is_active() && name_has_prefix(&u.name, &prefix))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_escapes_wildcards() {
        assert_eq!(escape_like("a%b_c\\d"), "a\\%b\\_c\\\\d");
        assert_eq!(escape_like("sarah"), "sarah");
    }

    #[test]
    fn test_loose_like_pattern_widens_non_ascii() {
        assert_eq!(loose_like_pattern("sarah"), "sarah%");
        assert_eq!(loose_like_pattern("émile"), "%mile%");
        assert_eq!(loose_like_pattern("zoë ann"), "zo% ann%");
        assert_eq!(loose_like_pattern("ßé"), "%");
        assert_eq!(loose_like_pattern("a_%é"), "a\\_\\%%");
        assert_eq!(loose_like_pattern(""), "%");
    }

    #[test]
    fn test_name_has_prefix_folds_unicode() {
        assert!(name_has_prefix("Émile Dubois", "émile"));
        assert!(name_has_prefix("ÉMILE", &"Émi".to_lowercase()));
        assert!(!name_has_prefix("Emile", "émile"));
    }

    #[test]
    fn test_parse_dashboard_access_handles_null_and_blank() {
        assert!(parse_dashboard_access(None).unwrap().is_empty());
        assert!(parse_dashboard_access(Some("  ")).unwrap().is_empty());
    }

    #[test]
    fn test_parse_dashboard_access_reads_json_array() {
        let tags = parse_dashboard_access(Some(r#"["profile","seo_dashboard","profile"]"#)).unwrap();
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("seo_dashboard"));
    }

    #[test]
    fn test_parse_dashboard_access_rejects_non_array() {
        let err = parse_dashboard_access(Some("{\"a\":1}")).unwrap_err();
        assert!(matches!(err, InternalError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_in_memory_directory_filters_inactive_and_prefix() {
        let user = |id: &str, name: &str, status: UserStatus| UserRecord {
            id: id.to_string(),
            name: name.to_string(),
            email: None,
            phone: Some("9876543210".to_string()),
            role: "SEO".to_string(),
            department: None,
            status,
            dashboard_access: BTreeSet::new(),
        };
        let directory = InMemoryUserDirectory::new(vec![
            user("1", "John SEO", UserStatus::Active),
            user("2", "Johnny Web", UserStatus::Active),
            user("3", "John Old", UserStatus::Inactive),
            user("4", "Sarah Ads", UserStatus::Active),
        ]);

        let found = directory.find_active_by_name_prefix("JOHN").await.unwrap();
        let ids: Vec<&str> = found.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
