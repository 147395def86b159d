use async_trait::async_trait;
use sqlx::PgPool;

use super::Storage;
use crate::models::{dto::CreateAccountRequest, Account, Error, NewAccount, Result};

const CREATE_ACCOUNT_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS account (
        id SERIAL PRIMARY KEY,
        firstname VARCHAR(25) NOT NULL,
        lastname VARCHAR(25) NOT NULL,
        account_number SERIAL,
        balance BIGINT NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

pub struct PostgresStorage {
    sqlx_db: PgPool,
}

impl PostgresStorage {
    pub fn new(sqlx_db: PgPool) -> Self {
        PostgresStorage { sqlx_db }
    }
}

#[async_trait]
impl Storage for PostgresStorage {
    async fn init(&self) -> Result<()> {
        sqlx::query(CREATE_ACCOUNT_TABLE)
            .execute(&self.sqlx_db)
            .await?;
        Ok(())
    }

    /// Create a new account, letting the table sequences assign `id` and `account_number`
    async fn create_account(&self, new_account: &NewAccount) -> Result<Account> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO account (firstname, lastname, balance, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, firstname, lastname, account_number, balance, created_at
            "#,
        )
        .bind(&new_account.first_name)
        .bind(&new_account.last_name)
        .bind(new_account.balance)
        .bind(new_account.created_at)
        .fetch_one(&self.sqlx_db)
        .await?;
        Ok(account)
    }

    /// Get an account by ID
    async fn get_account_by_id(&self, id: i32) -> Result<Account> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, firstname, lastname, account_number, balance, created_at
            FROM account
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.sqlx_db)
        .await?
        .ok_or(Error::NotFound(id))
    }

    async fn get_accounts(&self) -> Result<Vec<Account>> {
        let rows = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, firstname, lastname, account_number, balance, created_at
            FROM account
            ORDER BY id
            "#,
        )
        .fetch_all(&self.sqlx_db)
        .await?;
        Ok(rows)
    }

    async fn update_account(&self, id: i32, details: &CreateAccountRequest) -> Result<Account> {
        sqlx::query_as::<_, Account>(
            r#"
            UPDATE account
            SET firstname = $2,
                lastname = $3
            WHERE id = $1
            RETURNING id, firstname, lastname, account_number, balance, created_at
            "#,
        )
        .bind(id)
        .bind(&details.first_name)
        .bind(&details.last_name)
        .fetch_optional(&self.sqlx_db)
        .await?
        .ok_or(Error::NotFound(id))
    }

    async fn delete_account(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM account WHERE id = $1")
            .bind(id)
            .execute(&self.sqlx_db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
