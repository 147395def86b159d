//! Storage tests against a live PostgreSQL instance.
//!
//! Run with `DATABASE_URL` pointing at a disposable database:
//! `cargo test --test postgres_storage_test -- --ignored --test-threads=1`

use bank_api::{
    database::{connect_sqlx, PostgresStorage, Storage},
    models::{dto::CreateAccountRequest, Error, NewAccount},
};
use chrono::{Duration, Utc};

async fn storage() -> PostgresStorage {
    dotenv::dotenv().ok();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = connect_sqlx(&url).await.unwrap();
    let storage = PostgresStorage::new(pool);
    storage.init().await.unwrap();
    storage
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_get_delete() {
    let storage = storage().await;
    let before = Utc::now();

    let created = storage
        .create_account(&NewAccount::new("Ada", "Lovelace"))
        .await
        .unwrap();
    assert_eq!(created.balance, 0);
    assert!(created.created_at - before < Duration::seconds(5));

    let fetched = storage.get_account_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);

    assert!(storage.delete_account(created.id).await.unwrap());
    assert!(!storage.delete_account(created.id).await.unwrap());
    assert!(matches!(
        storage.get_account_by_id(created.id).await,
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_sequences_assign_distinct_identifiers() {
    let storage = storage().await;

    let a = storage
        .create_account(&NewAccount::new("a", "a"))
        .await
        .unwrap();
    let b = storage
        .create_account(&NewAccount::new("b", "b"))
        .await
        .unwrap();
    assert_ne!(a.id, b.id);
    assert_ne!(a.account_number, b.account_number);

    let ids: Vec<i32> = storage
        .get_accounts()
        .await
        .unwrap()
        .into_iter()
        .map(|acc| acc.id)
        .collect();
    assert!(ids.contains(&a.id) && ids.contains(&b.id));

    storage.delete_account(a.id).await.unwrap();
    storage.delete_account(b.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_reports_missing_rows() {
    let storage = storage().await;
    let details = CreateAccountRequest {
        first_name: "Augusta".into(),
        last_name: "King".into(),
    };

    let err = storage.update_account(-1, &details).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(-1)));

    let created = storage
        .create_account(&NewAccount::new("Ada", "Byron"))
        .await
        .unwrap();
    let updated = storage.update_account(created.id, &details).await.unwrap();
    assert_eq!(updated.first_name, "Augusta");
    assert_eq!(updated.created_at, created.created_at);

    storage.delete_account(created.id).await.unwrap();
}
