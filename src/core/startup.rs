use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::core::config::Config;
use crate::stores::user_store::UserStore;

// this runs at boot time
pub fn load_user_store(config: &Config) -> Result<UserStore> {
    let path = &config.auth.users_file;

    let store = UserStore::from_file(path)
        .context(format!("Failed to load users from '{}'", path.display()))?;

    if store.is_empty() {
        bail!("User fixture '{}' contains no users", path.display());
    }

    let usernames = store.usernames();
    let disabled = usernames
        .iter()
        .filter_map(|name| store.get_user(name))
        .filter(|user| user.disabled)
        .count();

    if disabled == store.len() {
        warn!(users = store.len(), "Every seeded user is disabled; no login can reach a protected route");
    }

    info!(
        users_file = %path.display(),
        users = store.len(),
        disabled_users = disabled,
        "User store loaded"
    );

    Ok(store)
}
