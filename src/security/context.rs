use crate::models::user::UserRecord;

/// Authenticated, active user for the current request.
///
/// Inserted into request extensions by the gate middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    user: UserRecord,
}

impl CurrentUser {
    pub fn new(user: UserRecord) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &UserRecord {
        &self.user
    }

    pub fn into_inner(self) -> UserRecord {
        self.user
    }
}

/// Raw bearer token presented on the current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
