// Application state (AppState)

use crate::core::config::Config;
use crate::security::hasher::{PasswordHasher, PrefixHasher};
use crate::security::login::Authenticator;
use crate::security::resolver::UserResolver;
use crate::security::token_codec::{TokenCodec, UsernameTokenCodec};
use crate::stores::user_store::UserStore;
use std::sync::Arc;

/// Shared application state
///
/// Everything here is read-only after startup, so handlers never lock.
#[derive(Clone)]
pub struct AppState {
    /// Seed users loaded from the fixture file
    pub user_store: Arc<UserStore>,

    /// Login flow
    pub authenticator: Arc<Authenticator>,

    /// Credential to user lookup used by the gate
    pub resolver: Arc<UserResolver>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// State with the toy hasher and username tokens
    pub fn new(config: Config, user_store: UserStore) -> Self {
        let hasher = Arc::new(PrefixHasher::new(config.auth.hash_prefix.clone()));
        Self::with_components(config, user_store, hasher, Arc::new(UsernameTokenCodec))
    }

    /// State with caller-supplied hashing and token schemes
    pub fn with_components(
        config: Config,
        user_store: UserStore,
        hasher: Arc<dyn PasswordHasher>,
        codec: Arc<dyn TokenCodec>,
    ) -> Self {
        let user_store = Arc::new(user_store);

        Self {
            authenticator: Arc::new(Authenticator::new(
                Arc::clone(&user_store),
                hasher,
                Arc::clone(&codec),
            )),
            resolver: Arc::new(UserResolver::new(Arc::clone(&user_store), codec)),
            user_store,
            config: Arc::new(config),
        }
    }
}
