//! Email format validation port.

use super::PortError;

/// Port for email format validation.
pub trait EmailValidator: Send + Sync {
    /// Whether `email` is a well-formed address.
    ///
    /// `Err` means the validator itself failed, not that the address is
    /// malformed.
    fn is_valid(&self, email: &str) -> Result<bool, PortError>;
}
