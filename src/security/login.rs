use crate::core::error::AuthError;
use crate::models::token::TokenResponse;
use crate::security::hasher::PasswordHasher;
use crate::security::token_codec::TokenCodec;
use crate::stores::user_store::UserStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Exchanges a username/password pair for a bearer credential
pub struct Authenticator {
    store: Arc<UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    codec: Arc<dyn TokenCodec>,
}

impl Authenticator {
    pub fn new(
        store: Arc<UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        codec: Arc<dyn TokenCodec>,
    ) -> Self {
        Self {
            store,
            hasher,
            codec,
        }
    }

    /// Unknown user and wrong password fail identically
    pub fn login(&self, username: &str, password: &str) -> Result<TokenResponse, AuthError> {
        let Some(user) = self.store.get_user(username) else {
            warn!(username = %username, "Login rejected: unknown user");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify(password, &user.hashed_password) {
            warn!(username = %username, "Login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.codec.issue(&user.to_record());
        debug!(username = %username, "Issued access token");

        Ok(TokenResponse::bearer(token))
    }
}
