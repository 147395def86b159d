use std::time::Duration;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::models::{dto::CreateAccountRequest, Account, NewAccount, Result};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStorage;
pub use postgres::PostgresStorage;

/// Connects to a PostgreSQL database with the given `db_url`, returning a connection pool for accessing it
pub async fn connect_sqlx(db_url: &str) -> std::result::Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .idle_timeout(Duration::from_secs(30))
        .max_connections(32)
        .min_connections(4)
        .connect(db_url)
        .await
}

/// Persistence operations over the `account` table.
///
/// Identifiers are assigned by the backend. Lookups that match no row fail
/// with [`Error::NotFound`](crate::models::Error::NotFound), except
/// `delete_account` which is idempotent.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Creates the backing schema if it does not exist yet.
    async fn init(&self) -> Result<()>;

    async fn create_account(&self, account: &NewAccount) -> Result<Account>;

    async fn get_account_by_id(&self, id: i32) -> Result<Account>;

    async fn get_accounts(&self) -> Result<Vec<Account>>;

    /// Overwrites both name fields and returns the updated row.
    async fn update_account(&self, id: i32, details: &CreateAccountRequest) -> Result<Account>;

    /// Returns whether a row was removed.
    async fn delete_account(&self, id: i32) -> Result<bool>;
}
