use serde::{Deserialize, Serialize};

/// Fields submitted on `POST /signup`.
///
/// Every field is optional at the wire level; presence is enforced by the
/// sign-up controller, not by the deserializer, so an absent key and an
/// explicit `null` decode the same way.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignupBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}
