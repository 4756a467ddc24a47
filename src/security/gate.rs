use crate::core::error::AuthError;
use crate::models::user::{UserRecord, UserWithCredentials};

/// Admit only resolved, enabled users; the returned record has no hash
pub fn authorize(user: Option<&UserWithCredentials>) -> Result<UserRecord, AuthError> {
    let user = user.ok_or(AuthError::InvalidToken)?;

    if user.disabled {
        return Err(AuthError::InactiveUser);
    }

    Ok(user.to_record())
}
