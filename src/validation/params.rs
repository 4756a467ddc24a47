use serde::{de::Error as _, Deserialize, Deserializer};

/// `?skip=&limit=` for the paginated item list
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub skip: usize,

    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

impl PageParams {
    /// Slice with clamping: out-of-range windows yield fewer or no items
    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.skip.min(items.len());
        let end = start.saturating_add(self.limit).min(items.len());
        &items[start..end]
    }
}

/// `?q=` optional search string
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    /// Empty `q` counts as absent
    pub fn q(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }
}

/// `?q=&short=` for the item detail endpoint
#[derive(Debug, Deserialize)]
pub struct ItemDetailParams {
    pub q: Option<String>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub short: bool,
}

/// `?needy=` required parameter
#[derive(Debug, Deserialize)]
pub struct NeedyParams {
    pub needy: String,
}

/// Parse a boolean the way form and query strings spell it
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_bool(&raw).ok_or_else(|| D::Error::custom(format!("invalid boolean value: {raw}")))
}
