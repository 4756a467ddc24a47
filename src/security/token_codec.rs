use crate::models::user::UserRecord;

/// Issues credentials for a user and maps presented credentials back to a
/// username
pub trait TokenCodec: Send + Sync {
    fn issue(&self, user: &UserRecord) -> String;

    /// `None` when the credential cannot name a user
    fn decode(&self, token: &str) -> Option<String>;
}

/// Toy codec: the token is the username itself. No expiry, no signature.
#[derive(Clone, Copy, Debug, Default)]
pub struct UsernameTokenCodec;

impl TokenCodec for UsernameTokenCodec {
    fn issue(&self, user: &UserRecord) -> String {
        user.username.clone()
    }

    fn decode(&self, token: &str) -> Option<String> {
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }
}
