//! In-memory account provisioning.

use std::collections::HashMap;
use std::sync::Mutex;

use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, Params, PasswordHasher, PasswordVerifier, Version};
use async_trait::async_trait;
use rand::RngCore;
use rand::rngs::OsRng;

use crate::config;
use crate::model::account::{Account, NewAccount};
use crate::ports::{AddAccount, PortError};

const ID_LENGTH: usize = 16;

struct StoredAccount {
    account: Account,
    password_hash: String,
}

/// [`AddAccount`] implementation holding accounts in process memory.
///
/// Passwords are stored as argon2id PHC strings. Email uniqueness is
/// enforced under the store lock.
pub struct MemoryAccounts {
    params: Params,
    accounts: Mutex<HashMap<String, StoredAccount>>,
}

impl MemoryAccounts {
    /// Create an empty store using the given argon2 parameters.
    pub fn new(config: &config::Argon2) -> Result<Self, PortError> {
        let params = Params::new(
            config.memory_cost,
            config.iterations,
            config.parallelism,
            Some(config.hash_length),
        )?;

        Ok(Self {
            params,
            accounts: Mutex::new(HashMap::new()),
        })
    }

    fn hasher(&self) -> Argon2<'_> {
        Argon2::new(
            argon2::Algorithm::Argon2id,
            Version::V0x13,
            self.params.clone(),
        )
    }

    /// Find an account by email address.
    pub fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Account>, PortError> {
        let accounts = self
            .accounts
            .lock()
            .map_err(|_| "account store poisoned")?;

        Ok(accounts.get(email).map(|stored| stored.account.clone()))
    }

    /// Check `password` against the hash stored for `email`.
    ///
    /// Unknown addresses count as a mismatch.
    pub fn verify_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<bool, PortError> {
        let accounts = self
            .accounts
            .lock()
            .map_err(|_| "account store poisoned")?;

        let Some(stored) = accounts.get(email) else {
            return Ok(false);
        };

        let parsed = PasswordHash::new(&stored.password_hash)?;
        Ok(self
            .hasher()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[async_trait]
impl AddAccount for MemoryAccounts {
    async fn add(&self, account: NewAccount) -> Result<Account, PortError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = self
            .hasher()
            .hash_password(account.password.as_bytes(), &salt)?
            .to_string();

        let mut bytes = [0u8; ID_LENGTH];
        OsRng.fill_bytes(&mut bytes);

        let account = Account {
            id: hex::encode(bytes),
            name: account.name,
            email: account.email,
        };

        let mut accounts = self
            .accounts
            .lock()
            .map_err(|_| "account store poisoned")?;
        if accounts.contains_key(&account.email) {
            return Err("email already taken".into());
        }

        accounts.insert(
            account.email.clone(),
            StoredAccount {
                account: account.clone(),
                password_hash,
            },
        );

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryAccounts {
        MemoryAccounts::new(&config::Argon2 {
            memory_cost: 1024,
            iterations: 1,
            parallelism: 1,
            hash_length: 32,
        })
        .unwrap()
    }

    fn new_account(email: &str) -> NewAccount {
        NewAccount {
            name: "jane".into(),
            email: email.into(),
            password: "P$soW%920$n&".into(),
        }
    }

    #[tokio::test]
    async fn test_add_assigns_unique_ids() {
        let store = store();

        let first = store.add(new_account("a@gravitalia.com")).await.unwrap();
        let second = store.add(new_account("b@gravitalia.com")).await.unwrap();

        assert_eq!(first.id.len(), ID_LENGTH * 2);
        assert_ne!(first.id, second.id);
        assert_eq!(first.name, "jane");
        assert_eq!(first.email, "a@gravitalia.com");
    }

    #[tokio::test]
    async fn test_add_rejects_taken_email() {
        let store = store();

        store.add(new_account("a@gravitalia.com")).await.unwrap();
        assert!(store.add(new_account("a@gravitalia.com")).await.is_err());
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let store = store();

        let created =
            store.add(new_account("a@gravitalia.com")).await.unwrap();

        assert_eq!(
            store.find_by_email("a@gravitalia.com").unwrap(),
            Some(created)
        );
        assert_eq!(store.find_by_email("b@gravitalia.com").unwrap(), None);
    }

    #[tokio::test]
    async fn test_password_is_stored_hashed() {
        let store = store();

        store.add(new_account("a@gravitalia.com")).await.unwrap();

        assert!(store
            .verify_password("a@gravitalia.com", "P$soW%920$n&")
            .unwrap());
        assert!(!store
            .verify_password("a@gravitalia.com", "wrong password")
            .unwrap());
        assert!(!store
            .verify_password("unknown@gravitalia.com", "P$soW%920$n&")
            .unwrap());
    }
}
