use crate::models::user::UserWithCredentials;
use crate::security::token_codec::TokenCodec;
use crate::stores::user_store::UserStore;
use std::sync::Arc;

/// Maps a presented credential to the stored user, if any
pub struct UserResolver {
    store: Arc<UserStore>,
    codec: Arc<dyn TokenCodec>,
}

impl UserResolver {
    pub fn new(store: Arc<UserStore>, codec: Arc<dyn TokenCodec>) -> Self {
        Self { store, codec }
    }

    pub fn resolve(&self, credential: &str) -> Option<Arc<UserWithCredentials>> {
        let username = self.codec.decode(credential)?;
        self.store.get_user(&username)
    }
}
