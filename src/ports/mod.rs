//! These traits define what the sign-up flow needs from the outside world.

pub mod account;
pub mod email;

pub use account::*;
pub use email::*;

/// Opaque failure raised by a port implementation.
///
/// Callers must not rely on the concrete type behind it.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
