//! HTTP routes.

pub mod signup;
pub mod status;

/// Build a fully wired state for tests.
#[cfg(test)]
pub(crate) fn state() -> crate::AppState {
    use std::sync::Arc;

    use crate::adapters::{MemoryAccounts, RegexEmailValidator};
    use crate::signup::SignupController;

    let accounts = MemoryAccounts::new(&crate::config::Argon2 {
        memory_cost: 1024,
        iterations: 1,
        parallelism: 1,
        hash_length: 32,
    })
    .expect("valid argon2 parameters");

    crate::AppState {
        config: Arc::new(crate::config::Configuration::default()),
        signup: Arc::new(SignupController::new(
            Arc::new(RegexEmailValidator),
            Arc::new(accounts),
        )),
    }
}
