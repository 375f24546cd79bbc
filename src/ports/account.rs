//! Account provisioning port.

use async_trait::async_trait;

use super::PortError;
use crate::model::account::{Account, NewAccount};

/// Port for account provisioning.
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Create a new account from already-validated fields.
    async fn add(&self, account: NewAccount) -> Result<Account, PortError>;
}
