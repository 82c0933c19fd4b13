//! Bearer credential verification against the external identity provider.
//!
//! The provider is the single source of truth for authentication: the server
//! never mints or refreshes tokens itself. Verdicts are deliberately not
//! cached — tokens can expire mid-session, so every request pays for a fresh
//! lookup.

use anyhow::Context as _;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::ApiError;
use crate::settings;

/// Identity established for one request after a successful verification.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedIdentity {
    /// Stable subject identifier assigned by the provider.
    pub subject_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl VerifiedIdentity {
    /// Synthetic per-request identity used by the development bypass.
    pub fn synthetic() -> Self {
        Self {
            subject_id: format!("dev-user-{}", Uuid::new_v4()),
            email: Some("dev@example.com".to_string()),
            name: Some("Development User".to_string()),
        }
    }
}

/// Verifies a bearer credential string for one request.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, ApiError>;
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
}

/// [`TokenVerifier`] backed by the provider's `accounts:lookup` endpoint.
pub struct HttpTokenVerifier {
    http: reqwest::Client,
    endpoint: String,
    key: String,
}

impl HttpTokenVerifier {
    pub fn new(settings: &settings::Auth) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: settings.endpoint.clone(),
            key: settings.key.clone(),
        }
    }
}

#[async_trait]
impl TokenVerifier for HttpTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, ApiError> {
        let url = format!("{}?key={}", self.endpoint, self.key);
        let response = self
            .http
            .post(url)
            .json(&json!({ "idToken": token }))
            .send()
            .await
            .context("identity provider is unreachable")?;

        // The provider answers 400 for expired, revoked or malformed tokens.
        if !response.status().is_success() {
            return Err(ApiError::InvalidCredential);
        }

        let body: LookupResponse = response
            .json()
            .await
            .context("identity provider returned an unreadable body")?;

        let user = body.users.into_iter().next().ok_or(ApiError::InvalidCredential)?;
        Ok(VerifiedIdentity {
            subject_id: user.local_id,
            email: user.email,
            name: user.display_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_identities_are_unique_per_call() {
        let a = VerifiedIdentity::synthetic();
        let b = VerifiedIdentity::synthetic();
        assert_ne!(a.subject_id, b.subject_id);
        assert!(a.subject_id.starts_with("dev-user-"));
    }

    #[test]
    fn test_lookup_response_shape() {
        let body: LookupResponse = serde_json::from_str(
            r#"{"users": [{"localId": "uid-7", "email": "u@example.com"}]}"#,
        )
        .unwrap();
        assert_eq!(body.users.len(), 1);
        assert_eq!(body.users[0].local_id, "uid-7");
        assert!(body.users[0].display_name.is_none());

        // An empty object means no verified user.
        let empty: LookupResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.users.is_empty());
    }
}
