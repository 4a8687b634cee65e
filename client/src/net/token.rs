//! Access-token storage and refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authorized requests read a bearer token from `localStorage`. Before such a
//! request runs, `save_access_token` asks the token endpoint for a fresh token
//! (the session cookie authenticates that call) and persists it.
//!
//! Client-side (hydrate): real HTTP + storage via `gloo-net` / `web-sys`.
//! Server-side (SSR): every call reports `TokenError::Unavailable`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use async_trait::async_trait;
use serde::Deserialize;

use super::api_url;

pub const DEFAULT_STORAGE_KEY: &str = "keystone_access_token";
const TOKEN_PATH: &str = "/api/auth/token";

/// Errors produced while refreshing or persisting an access token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The HTTP request to the token endpoint failed.
    #[error("token request failed: {0}")]
    Request(String),

    /// The token endpoint returned a non-success status.
    #[error("token refresh failed: {0}")]
    Status(u16),

    /// The token endpoint response could not be decoded.
    #[error("token response parse failed: {0}")]
    Parse(String),

    /// The browser refused to store the token.
    #[error("token storage failed: {0}")]
    Storage(String),

    /// Called outside a browser.
    #[error("access token not available on server")]
    Unavailable,
}

/// A freshly issued access token.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
    #[serde(rename = "access_token")]
    value: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

impl AccessToken {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn expires_in(&self) -> Option<u64> {
        self.expires_in
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Capability to refresh and persist the current user's access token.
/// Enables test doubles for hooks that gate on it.
#[async_trait(?Send)]
pub trait AccessTokenStore {
    type Error;

    async fn save_access_token(&self) -> Result<(), Self::Error>;
}

/// Token store backed by the token endpoint and `localStorage`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserTokenStore {
    endpoint: String,
    storage_key: String,
}

impl Default for BrowserTokenStore {
    fn default() -> Self {
        Self::new(api_url(TOKEN_PATH), DEFAULT_STORAGE_KEY)
    }
}

impl BrowserTokenStore {
    pub fn new(endpoint: impl Into<String>, storage_key: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), storage_key: storage_key.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Read the last persisted token, if any.
    pub fn read_access_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(&self.storage_key).ok().flatten().filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    #[cfg(feature = "hydrate")]
    fn persist(&self, token: &AccessToken) -> Result<(), TokenError> {
        let storage = web_sys::window()
            .ok_or_else(|| TokenError::Storage("no window".to_owned()))?
            .local_storage()
            .map_err(|e| TokenError::Storage(format!("{e:?}")))?
            .ok_or_else(|| TokenError::Storage("localStorage disabled".to_owned()))?;
        storage
            .set_item(&self.storage_key, token.value())
            .map_err(|e| TokenError::Storage(format!("{e:?}")))
    }
}

#[async_trait(?Send)]
impl AccessTokenStore for BrowserTokenStore {
    type Error = TokenError;

    async fn save_access_token(&self) -> Result<(), TokenError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .send()
                .await
                .map_err(|e| TokenError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(TokenError::Status(resp.status()));
            }
            let body = resp.text().await.map_err(|e| TokenError::Request(e.to_string()))?;
            let token = parse_token_response(&body)?;
            self.persist(&token)?;
            log::debug!("access token refreshed (expires_in={:?})", token.expires_in());
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(TokenError::Unavailable)
        }
    }
}

/// Decode the token endpoint body, rejecting blank tokens.
///
/// # Errors
///
/// Returns [`TokenError::Parse`] if the body is not a token object or the
/// `access_token` field is blank.
pub fn parse_token_response(body: &str) -> Result<AccessToken, TokenError> {
    let token: AccessToken = serde_json::from_str(body).map_err(|e| TokenError::Parse(e.to_string()))?;
    if token.value.trim().is_empty() {
        return Err(TokenError::Parse("empty access_token".to_owned()));
    }
    Ok(token)
}

/// `Authorization` header value for a stored token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
