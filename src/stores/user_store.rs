use crate::models::user::UserWithCredentials;
use anyhow::{bail, Context, Result};
use dashmap::DashMap;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// In-memory store of users keyed by username.
///
/// Filled once at startup and only read afterwards.
pub struct UserStore {
    users: DashMap<String, Arc<UserWithCredentials>>,
}

#[derive(Deserialize)]
struct UserFixture {
    #[serde(default)]
    users: Vec<UserWithCredentials>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    /// Build a store from seed users, rejecting empty or duplicate usernames
    pub fn from_users(users: impl IntoIterator<Item = UserWithCredentials>) -> Result<Self> {
        let store = Self::new();

        for user in users {
            if user.username.is_empty() {
                bail!("User fixture contains an entry with an empty username");
            }

            let username = user.username.clone();
            if store.users.insert(username.clone(), Arc::new(user)).is_some() {
                bail!("Duplicate username in user fixture: {}", username);
            }
        }

        Ok(store)
    }

    /// Parse a TOML fixture made of `[[users]]` tables
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let fixture: UserFixture = toml::from_str(content)
            .context("Failed to parse user fixture")?;

        Self::from_users(fixture.users)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read user fixture: {}", path.display()))?;

        Self::from_toml_str(&content)
    }

    /// Get a user by username
    pub fn get_user(&self, username: &str) -> Option<Arc<UserWithCredentials>> {
        self.users.get(username).map(|entry| Arc::clone(entry.value()))
    }

    pub fn usernames(&self) -> Vec<String> {
        let mut names: Vec<String> = self.users.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
