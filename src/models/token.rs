use serde::{Deserialize, Serialize};

/// OAuth2 password-flow login form (`application/x-www-form-urlencoded`)
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    /// Space-separated scopes
    #[serde(default)]
    pub scope: String,
    pub grant_type: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl LoginForm {
    pub fn scopes(&self) -> Vec<&str> {
        self.scope.split_whitespace().collect()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Body of `GET /items/`: echoes the presented token
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenEcho {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_optional_fields_default() {
        let form: LoginForm =
            serde_urlencoded::from_str("username=johndoe&password=secret").unwrap();

        assert_eq!(form.username, "johndoe");
        assert_eq!(form.password, "secret");
        assert!(form.scopes().is_empty());
        assert!(form.grant_type.is_none());
        assert!(form.client_id.is_none());
        assert!(form.client_secret.is_none());
    }

    #[test]
    fn test_form_scopes_split_on_whitespace() {
        let form: LoginForm = serde_urlencoded::from_str(
            "username=a&password=b&scope=users%3Aread+users%3Awrite&grant_type=password",
        )
        .unwrap();

        assert_eq!(form.scopes(), vec!["users:read", "users:write"]);
        assert_eq!(form.grant_type.as_deref(), Some("password"));
    }

    #[test]
    fn test_form_requires_password() {
        let result: Result<LoginForm, _> = serde_urlencoded::from_str("username=johndoe");
        assert!(result.is_err());
    }

    #[test]
    fn test_bearer_token_type() {
        let token = TokenResponse::bearer("johndoe".to_string());
        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.access_token, "johndoe");
    }
}
