use crate::utils::auth::constant_time_eq;

/// Password hashing capability used by the login flow
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> String;

    /// Check a plaintext password against a stored hash
    fn verify(&self, password: &str, hashed_password: &str) -> bool {
        constant_time_eq(self.hash(password).as_bytes(), hashed_password.as_bytes())
    }
}

/// Toy hasher: prepends a fixed prefix. Provides no security.
#[derive(Clone, Debug)]
pub struct PrefixHasher {
    prefix: String,
}

impl PrefixHasher {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for PrefixHasher {
    fn default() -> Self {
        Self::new("fakehashed")
    }
}

impl PasswordHasher for PrefixHasher {
    fn hash(&self, password: &str) -> String {
        format!("{}{}", self.prefix, password)
    }
}
