use serde::{Deserialize, Serialize};
use std::fmt;

/// Public view of a user, safe to return to clients
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

/// Stored user including the password hash.
///
/// Deliberately not `Serialize`: this type must never reach a response body.
#[derive(Clone, Deserialize)]
pub struct UserWithCredentials {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    pub hashed_password: String,
}

impl UserWithCredentials {
    pub fn new(
        username: impl Into<String>,
        email: Option<String>,
        full_name: Option<String>,
        hashed_password: impl Into<String>,
        disabled: bool,
    ) -> Self {
        Self {
            username: username.into(),
            email,
            full_name,
            disabled,
            hashed_password: hashed_password.into(),
        }
    }

    /// Strip the hash and return the client-facing record
    pub fn to_record(&self) -> UserRecord {
        UserRecord {
            username: self.username.clone(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            disabled: self.disabled,
        }
    }
}

impl fmt::Debug for UserWithCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserWithCredentials")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("disabled", &self.disabled)
            .field("hashed_password", &"<redacted>")
            .finish()
    }
}
