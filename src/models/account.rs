use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A bank account as stored in the `account` table.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, FromRow, ToSchema)]
pub struct Account {
    pub id: i32,
    #[sqlx(rename = "firstname")]
    pub first_name: String,
    #[sqlx(rename = "lastname")]
    pub last_name: String,
    pub account_number: i32,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

/// Insertable account. Identifiers are left to the storage layer.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl NewAccount {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            balance: 0,
            created_at: Utc::now(),
        }
    }

    /// Materializes the stored row once storage has assigned the identifiers.
    pub fn into_account(self, id: i32, account_number: i32) -> Account {
        Account {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            account_number,
            balance: self.balance,
            created_at: self.created_at,
        }
    }
}
