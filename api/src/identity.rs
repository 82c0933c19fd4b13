//! Email/password client for the third-party identity provider.
//!
//! Taskdeck never stores passwords itself: the browser signs in against the
//! provider's REST endpoints (`accounts:signInWithPassword` / `accounts:signUp`)
//! and receives an ID token, which is then presented to the backend as the
//! `Authorization: Bearer` credential and verified server-side on every
//! request.

use serde::Deserialize;
use serde_json::json;

use crate::client::ClientError;

/// Default REST endpoint of the hosted identity provider. A local emulator
/// can be substituted through [`IdentityClient::with_base_url`].
pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

/// Credential issued by the identity provider after sign-in or sign-up.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityToken {
    /// The bearer credential to present to the backend.
    pub id_token: String,
    /// Stable subject identifier assigned by the provider.
    pub local_id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

/// Client for the identity provider's email/password endpoints.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl IdentityClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_IDENTITY_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different provider host, e.g. a local emulator.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sign in an existing account, returning the bearer credential.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<IdentityToken, ClientError> {
        self.call("accounts:signInWithPassword", email, password)
            .await
    }

    /// Create a new account, returning the bearer credential.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<IdentityToken, ClientError> {
        self.call("accounts:signUp", email, password).await
    }

    async fn call(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<IdentityToken, ClientError> {
        let url = format!("{}/v1/{}?key={}", self.base_url, endpoint, self.api_key);
        let response = self
            .http
            .post(url)
            .json(&json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = match response.json::<ProviderError>().await {
                Ok(body) => friendly_message(&body.error.message),
                Err(_) => format!("sign-in failed with status {}", status.as_u16()),
            };
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Translate the provider's SCREAMING_SNAKE error codes into something a
/// login form can show.
fn friendly_message(code: &str) -> String {
    match code {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Invalid email or password".to_string()
        }
        "EMAIL_EXISTS" => "An account with this email already exists".to_string(),
        "WEAK_PASSWORD : Password should be at least 6 characters" | "WEAK_PASSWORD" => {
            "Password is too weak".to_string()
        }
        other => other.replace('_', " ").to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendly_messages() {
        assert_eq!(friendly_message("EMAIL_NOT_FOUND"), "Invalid email or password");
        assert_eq!(
            friendly_message("EMAIL_EXISTS"),
            "An account with this email already exists"
        );
        assert_eq!(friendly_message("TOO_MANY_ATTEMPTS"), "too many attempts");
    }

    #[test]
    fn test_token_deserializes_provider_response() {
        let token: IdentityToken = serde_json::from_str(
            r#"{
                "idToken": "abc",
                "localId": "uid-1",
                "email": "a@example.com",
                "refreshToken": "r",
                "expiresIn": "3600"
            }"#,
        )
        .unwrap();
        assert_eq!(token.id_token, "abc");
        assert_eq!(token.local_id, "uid-1");
        assert!(token.display_name.is_none());
    }
}
