//! Concrete implementations of the outbound ports.

pub mod account;
pub mod email;

pub use account::MemoryAccounts;
pub use email::RegexEmailValidator;
