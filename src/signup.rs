//! Sign-up orchestration.

use std::sync::Arc;

use crate::error::{Result, SignupError};
use crate::model::account::NewAccount;
use crate::model::body::SignupBody;
use crate::model::response::{SignupResponse, bad_request, ok, server_error};
use crate::ports::{AddAccount, EmailValidator};

/// Orchestrates field validation and account provisioning.
///
/// Holds its two collaborators behind [`Arc`] and nothing else, so one
/// instance is shared across concurrent requests without synchronization.
#[derive(Clone)]
pub struct SignupController {
    email_validator: Arc<dyn EmailValidator>,
    accounts: Arc<dyn AddAccount>,
}

impl SignupController {
    /// Create a new [`SignupController`] from its collaborators.
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        accounts: Arc<dyn AddAccount>,
    ) -> Self {
        Self {
            email_validator,
            accounts,
        }
    }

    /// Validate `body` and provision the account.
    ///
    /// Always produces a well-formed response: 400 for the first validation
    /// failure, 500 when a collaborator fails, 200 with the created account
    /// otherwise. Collaborator failures never propagate past this method.
    pub async fn handle(&self, body: &SignupBody) -> SignupResponse {
        let (name, email, password) = match validate(body) {
            Ok(fields) => fields,
            Err(error) => return bad_request(error),
        };

        match self.email_validator.is_valid(email) {
            Ok(true) => {},
            Ok(false) => {
                return bad_request(SignupError::InvalidParam("email"));
            },
            Err(error) => {
                tracing::error!(
                    error = error.to_string(),
                    "email validator failed"
                );
                return server_error();
            },
        }

        let new_account = NewAccount {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };

        match self.accounts.add(new_account).await {
            Ok(account) => ok(account),
            Err(error) => {
                tracing::error!(
                    error = error.to_string(),
                    "account provisioning failed"
                );
                server_error()
            },
        }
    }
}

/// Check required fields in their fixed order.
///
/// The first missing field wins. `passwordConfirmation` only has to be
/// present; it is not compared against `password`.
fn validate(body: &SignupBody) -> Result<(&str, &str, &str)> {
    let name = require("name", &body.name)?;
    let email = require("email", &body.email)?;
    let password = require("password", &body.password)?;
    require("passwordConfirmation", &body.password_confirmation)?;

    Ok((name, email, password))
}

fn require<'a>(
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str> {
    match value.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(SignupError::MissingParam(field)),
    }
}
