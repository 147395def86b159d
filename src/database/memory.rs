use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Storage;
use crate::models::{dto::CreateAccountRequest, Account, Error, NewAccount, Result};

#[derive(Debug)]
struct Inner {
    accounts: BTreeMap<i32, Account>,
    next_id: i32,
    next_account_number: i32,
}

/// Process-local [`Storage`] backend mirroring the Postgres table semantics:
/// sequence-assigned identifiers, ordered listing and idempotent delete.
#[derive(Debug)]
pub struct MemoryStorage {
    inner: RwLock<Inner>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                accounts: BTreeMap::new(),
                next_id: 1,
                next_account_number: 1,
            }),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn init(&self) -> Result<()> {
        Ok(())
    }

    async fn create_account(&self, new_account: &NewAccount) -> Result<Account> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        let account_number = inner.next_account_number;
        // Like an exhausted Postgres sequence, running out fails the insert.
        let (Some(next_id), Some(next_account_number)) =
            (id.checked_add(1), account_number.checked_add(1))
        else {
            return Err(Error::Persistence(sqlx::Error::Protocol(
                "account sequence reached its maximum value".to_string(),
            )));
        };
        inner.next_id = next_id;
        inner.next_account_number = next_account_number;

        let account = new_account.clone().into_account(id, account_number);
        inner.accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn get_account_by_id(&self, id: i32) -> Result<Account> {
        self.inner
            .read()
            .await
            .accounts
            .get(&id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    async fn get_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.inner.read().await.accounts.values().cloned().collect())
    }

    async fn update_account(&self, id: i32, details: &CreateAccountRequest) -> Result<Account> {
        let mut inner = self.inner.write().await;
        let account = inner.accounts.get_mut(&id).ok_or(Error::NotFound(id))?;
        account.first_name = details.first_name.clone();
        account.last_name = details.last_name.clone();
        Ok(account.clone())
    }

    async fn delete_account(&self, id: i32) -> Result<bool> {
        Ok(self.inner.write().await.accounts.remove(&id).is_some())
    }
}
