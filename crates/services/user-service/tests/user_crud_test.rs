//! CRUD contract tests against an in-memory SQLite database.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};

use common::{AppError, DatabaseConfig};
use domain::{CreateUser, Password, UpdateUser};
use user_service_lib::infra::Database;
use user_service_lib::repository::entities::user;
use user_service_lib::repository::{NewUser, UserRepository, UserStore};
use user_service_lib::service::{UserManager, UserService};

async fn test_db() -> Database {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        connect_timeout_secs: 5,
    };
    Database::connect(&config).await.expect("in-memory database")
}

async fn setup() -> (Database, UserManager) {
    let db = test_db().await;
    let repo = Arc::new(UserStore::new(db.get_connection()));
    (db, UserManager::new(repo))
}

/// Insert a row directly with fixed timestamps.
async fn seed_user(db: &Database, email: &str, stamp: DateTime<Utc>) -> i32 {
    let model = user::ActiveModel {
        id: NotSet,
        username: Set("seeded".to_string()),
        email: Set(email.to_string()),
        password_hash: Set(Password::new("SecurePass123").unwrap().into_string()),
        profile_picture: Set(Some("https://example.com/a.png".to_string())),
        created_at: Set(stamp),
        updated_at: Set(stamp),
    }
    .insert(&db.get_connection())
    .await
    .unwrap();
    model.id
}

fn new_user(username: &str, email: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: email.to_string(),
        password: "SecurePass123".to_string(),
        profile_picture: None,
    }
}

#[tokio::test]
async fn test_create_then_fetch_by_id_and_email() {
    let (_db, service) = setup().await;

    let created = service
        .create_user(new_user("alice", "alice@example.com"))
        .await
        .unwrap();

    let by_id = service.get_user(created.id).await.unwrap();
    let by_email = service.get_user_by_email("alice@example.com").await.unwrap();

    assert_eq!(by_id, created);
    assert_eq!(by_email, created);
    assert!(by_id.verify_password("SecurePass123"));
    assert_ne!(by_id.password_hash, "SecurePass123");
}

#[tokio::test]
async fn test_ids_are_assigned_incrementally() {
    let (_db, service) = setup().await;

    let first = service.create_user(new_user("a", "a@example.com")).await.unwrap();
    let second = service.create_user(new_user("b", "b@example.com")).await.unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let (_db, service) = setup().await;

    service
        .create_user(new_user("alice", "alice@example.com"))
        .await
        .unwrap();
    let result = service
        .create_user(new_user("other", "alice@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_unique_index_violation_maps_to_conflict() {
    let db = test_db().await;
    let store = UserStore::new(db.get_connection());

    let row = NewUser {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password_hash: "hash".to_string(),
        profile_picture: None,
    };
    store.create(row.clone()).await.unwrap();

    let result = store.create(row).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_update_changes_only_specified_fields() {
    let (_db, service) = setup().await;

    let created = service
        .create_user(CreateUser {
            profile_picture: Some("https://example.com/a.png".to_string()),
            ..new_user("alice", "alice@example.com")
        })
        .await
        .unwrap();

    let updated = service
        .update_user(
            created.id,
            UpdateUser {
                username: Some("alice2".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.username, "alice2");
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.password_hash, created.password_hash);
    assert_eq!(updated.profile_picture, created.profile_picture);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let fetched = service.get_user(created.id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_bumps_updated_at() {
    let (db, service) = setup().await;
    let stamp = Utc::now() - Duration::hours(1);
    let id = seed_user(&db, "seeded@example.com", stamp).await;

    let updated = service
        .update_user(
            id,
            UpdateUser {
                username: Some("renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.updated_at > stamp);
    assert_eq!(updated.created_at, stamp);
    assert_eq!(service.get_user(id).await.unwrap().updated_at, updated.updated_at);
}

#[tokio::test]
async fn test_update_clears_profile_picture() {
    let (db, service) = setup().await;
    let id = seed_user(&db, "seeded@example.com", Utc::now()).await;

    let updated = service
        .update_user(
            id,
            UpdateUser {
                profile_picture: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.profile_picture, None);
    assert_eq!(updated.username, "seeded");
    assert_eq!(service.get_user(id).await.unwrap().profile_picture, None);
}

#[tokio::test]
async fn test_email_matching_ignores_case() {
    let (_db, service) = setup().await;

    let created = service
        .create_user(new_user("alice", "Alice@Example.com"))
        .await
        .unwrap();
    assert_eq!(created.email, "alice@example.com");

    let fetched = service.get_user_by_email("ALICE@example.com").await.unwrap();
    assert_eq!(fetched.id, created.id);

    let duplicate = service
        .create_user(new_user("other", "alice@EXAMPLE.com"))
        .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_update_password_rehashes() {
    let (_db, service) = setup().await;

    let created = service
        .create_user(new_user("alice", "alice@example.com"))
        .await
        .unwrap();

    let updated = service
        .update_user(
            created.id,
            UpdateUser {
                password: Some("AnotherPass456".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.verify_password("AnotherPass456"));
    assert!(!updated.verify_password("SecurePass123"));
}

#[tokio::test]
async fn test_update_email_to_taken_address_is_conflict() {
    let (_db, service) = setup().await;

    service.create_user(new_user("a", "a@example.com")).await.unwrap();
    let b = service.create_user(new_user("b", "b@example.com")).await.unwrap();

    let result = service
        .update_user(
            b.id,
            UpdateUser {
                email: Some("a@example.com".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.get_user(b.id).await.unwrap().email, "b@example.com");
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let (_db, service) = setup().await;

    let result = service
        .update_user(
            404,
            UpdateUser {
                username: Some("ghost".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_delete_then_fetch_is_not_found() {
    let (_db, service) = setup().await;

    let created = service
        .create_user(new_user("alice", "alice@example.com"))
        .await
        .unwrap();

    service.delete_user(created.id).await.unwrap();

    assert!(matches!(
        service.get_user(created.id).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        service.get_user_by_email("alice@example.com").await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        service.delete_user(created.id).await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn test_email_is_reusable_after_delete() {
    let (_db, service) = setup().await;

    let created = service
        .create_user(new_user("alice", "alice@example.com"))
        .await
        .unwrap();
    service.delete_user(created.id).await.unwrap();

    assert!(service
        .create_user(new_user("alice", "alice@example.com"))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_list_users_paginates_in_id_order() {
    let (_db, service) = setup().await;

    for i in 0..5 {
        service
            .create_user(new_user(&format!("user{}", i), &format!("user{}@example.com", i)))
            .await
            .unwrap();
    }

    let (first_page, total) = service.list_users(0, 2).await.unwrap();
    let (last_page, _) = service.list_users(4, 2).await.unwrap();

    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 2);
    assert!(first_page[0].id < first_page[1].id);
    assert_eq!(last_page.len(), 1);
    assert_eq!(last_page[0].username, "user4");
}

#[tokio::test]
async fn test_ping_and_close() {
    let db = test_db().await;
    assert!(db.ping().await.is_ok());
    assert!(db.close().await.is_ok());
}
