// UserStore against an in-memory SQLite directory

mod common;

use std::sync::Arc;

use common::{insert_user, setup_test_directory_db};
use tactical_backend::providers::{LoginResolver, PhoneLoginResolver};
use tactical_backend::stores::{UserDirectory, UserStore};
use tactical_backend::types::internal::{LoginFailure, LoginResult, UserStatus};

#[tokio::test]
async fn test_prefix_lookup_is_case_insensitive() {
    let db = setup_test_directory_db().await;
    insert_user(&db, "u1", "Sarah Ads", Some("9876543211"), "Ads", "active", None).await;
    insert_user(&db, "u2", "sarahlike Other", Some("9876543299"), "SEO", "active", None).await;
    insert_user(&db, "u3", "John SEO", Some("9876543210"), "SEO", "active", None).await;

    let store = UserStore::new(db);
    let found = store.find_active_by_name_prefix("SARAH").await.unwrap();

    let ids: Vec<&str> = found.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["u1", "u2"]);
    assert!(found.iter().all(|u| u.status == UserStatus::Active));
}

#[tokio::test]
async fn test_inactive_rows_are_excluded() {
    let db = setup_test_directory_db().await;
    insert_user(&db, "u1", "Ravi Kumar", Some("9876543230"), "SEO", "inactive", None).await;
    insert_user(&db, "u2", "Ravi Shah", Some("9876543231"), "SEO", "ACTIVE", None).await;
    insert_user(&db, "u3", "Ravi Patel", Some("9876543232"), "SEO", "active", None).await;

    let store = UserStore::new(db);
    let found = store.find_active_by_name_prefix("Ravi").await.unwrap();

    let ids: Vec<&str> = found.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["u3"]);
}

#[tokio::test]
async fn test_wildcards_in_input_match_literally() {
    let db = setup_test_directory_db().await;
    insert_user(&db, "u1", "Anna Lee", Some("9876543250"), "Sales", "active", None).await;
    insert_user(&db, "u2", "A_na Test", Some("9876543251"), "Sales", "active", None).await;

    let store = UserStore::new(db);

    assert!(store.find_active_by_name_prefix("%").await.unwrap().is_empty());

    let found = store.find_active_by_name_prefix("A_na").await.unwrap();
    let ids: Vec<&str> = found.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["u2"]);
}

#[tokio::test]
async fn test_dashboard_access_json_is_parsed() {
    let db = setup_test_directory_db().await;
    insert_user(
        &db,
        "u1",
        "Priya Sharma",
        Some("9876543240"),
        "HR",
        "active",
        Some(r#"["hr_dashboard","profile"]"#),
    )
    .await;
    insert_user(&db, "u2", "Priyanka Das", Some("9876543241"), "HR", "active", None).await;

    let store = UserStore::new(db);
    let found = store.find_active_by_name_prefix("Priya").await.unwrap();

    assert_eq!(found.len(), 2);
    assert!(found[0].dashboard_access.contains("hr_dashboard"));
    assert!(found[0].dashboard_access.contains("profile"));
    assert!(found[1].dashboard_access.is_empty());
}

#[tokio::test]
async fn test_malformed_dashboard_access_row_is_skipped() {
    let db = setup_test_directory_db().await;
    insert_user(&db, "u1", "Kiran Rao", Some("9876543260"), "Intern", "active", Some("not json")).await;
    insert_user(&db, "u2", "Kiran Shah", Some("9876543261"), "Intern", "active", None).await;

    let store = UserStore::new(db);
    let found = store.find_active_by_name_prefix("Kiran").await.unwrap();

    let ids: Vec<&str> = found.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["u2"]);
}

#[tokio::test]
async fn test_unreadable_sibling_row_does_not_block_login() {
    let db = setup_test_directory_db().await;
    insert_user(&db, "u1", "Sarah Ads", Some("9876543211"), "Ads", "active", None).await;
    insert_user(&db, "u2", "Sarahlike Other", Some("9876543299"), "SEO", "active", Some("not json")).await;

    let resolver = PhoneLoginResolver::new(Arc::new(UserStore::new(db)));

    match resolver.resolve_login("Sarah", "9876543211").await {
        LoginResult::Authenticated { user } => assert_eq!(user.id, "u1"),
        other => panic!("Expected authenticated result, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_ascii_names_match_case_insensitively() {
    let db = setup_test_directory_db().await;
    insert_user(&db, "u1", "Émile Dubois", Some("9876543211"), "SEO", "active", None).await;
    insert_user(&db, "u2", "Emile Martin", Some("9876543212"), "SEO", "active", None).await;
    insert_user(&db, "u3", "Zoë Ann", Some("9876543213"), "Ads", "active", None).await;

    let store = UserStore::new(db.clone());

    let found = store.find_active_by_name_prefix("émile").await.unwrap();
    let ids: Vec<&str> = found.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["u1"]);

    let found = store.find_active_by_name_prefix("ZOË").await.unwrap();
    let ids: Vec<&str> = found.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["u3"]);

    let resolver = PhoneLoginResolver::new(Arc::new(UserStore::new(db)));
    match resolver.resolve_login("émile", "9876543211").await {
        LoginResult::Authenticated { user } => assert_eq!(user.id, "u1"),
        other => panic!("Expected authenticated result, got {:?}", other),
    }
}

#[tokio::test]
async fn test_resolver_over_database_directory() {
    let db = setup_test_directory_db().await;
    insert_user(&db, "u1", "Admin Super", Some("+91-9876543225"), "Super Admin", "active", None).await;
    insert_user(&db, "u2", "Sarah Ads", Some("9876543211"), "Ads", "active", None).await;

    let resolver = PhoneLoginResolver::new(Arc::new(UserStore::new(db)));

    match resolver.resolve_login("admin", "09876543225").await {
        LoginResult::Authenticated { user } => {
            assert_eq!(user.id, "u1");
            assert_eq!(user.role, "Super Admin");
        }
        other => panic!("Expected authenticated result, got {:?}", other),
    }

    let result = resolver.resolve_login("Sarah", "9876543225").await;
    assert_eq!(result.failure(), Some(LoginFailure::PhoneMismatch));
}

#[tokio::test]
async fn test_missing_table_is_directory_unavailable() {
    // No migrations applied
    let db = sea_orm::Database::connect("sqlite::memory:").await.unwrap();
    let resolver = PhoneLoginResolver::new(Arc::new(UserStore::new(db)));

    let result = resolver.resolve_login("Admin", "9876543225").await;
    assert_eq!(result.failure(), Some(LoginFailure::DirectoryUnavailable));
}
