//! Error handler for registra.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SignupError>;

/// Enum representing caller-visible sign-up failures.
///
/// Values are compared structurally in tests, hence the [`PartialEq`]
/// derive. `Server` deliberately carries no detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    /// A required field was absent, `null` or empty.
    #[error("missing param: {0}")]
    MissingParam(&'static str),

    /// A present field failed a semantic check.
    #[error("invalid param: {0}")]
    InvalidParam(&'static str),

    /// An unexpected failure occurred somewhere in the pipeline.
    #[error("internal server error")]
    Server,
}
