use std::fmt;

use serde::{Deserialize, Serialize};

/// Account returned to the caller after provisioning.
///
/// The password never appears here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Validated fields handed to the provisioning port.
pub struct NewAccount {
    pub name: String,
    pub email: String,
    /// Clear-text password. Implementations must hash it and never return it.
    pub password: String,
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
