//! Uniform response contract produced by controllers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::SignupError;
use crate::model::account::Account;

/// A status code together with the value rendered to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

/// Body half of a [`SignupResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    /// The created account.
    Account(Account),
    /// A caller-visible error.
    Error(SignupError),
}

/// Represents basic message response.
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub error: bool,
    pub message: String,
}

/// 200 response carrying the created account.
pub fn ok(account: Account) -> SignupResponse {
    SignupResponse {
        status: StatusCode::OK,
        body: ResponseBody::Account(account),
    }
}

/// 400 response carrying a validation error.
pub fn bad_request(error: SignupError) -> SignupResponse {
    SignupResponse {
        status: StatusCode::BAD_REQUEST,
        body: ResponseBody::Error(error),
    }
}

/// Opaque 500 response.
pub fn server_error() -> SignupResponse {
    SignupResponse {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: ResponseBody::Error(SignupError::Server),
    }
}

impl IntoResponse for SignupResponse {
    fn into_response(self) -> Response {
        match self.body {
            ResponseBody::Account(account) => {
                (self.status, Json(account)).into_response()
            },
            ResponseBody::Error(error) => (
                self.status,
                Json(ErrorMessage {
                    error: true,
                    message: error.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
