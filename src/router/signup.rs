//! Account sign-up route.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};

use crate::AppState;
use crate::model::body::SignupBody;

/// Handler to sign up a new account.
///
/// A body that fails JSON extraction is handled as an empty field bag, so
/// the controller reports the first missing field instead of axum's own
/// rejection.
pub async fn handler(
    State(state): State<AppState>,
    body: Result<Json<SignupBody>, JsonRejection>,
) -> Response {
    let body = body.map(|Json(body)| body).unwrap_or_default();

    state.signup.handle(&body).await.into_response()
}
