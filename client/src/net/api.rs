//! GraphQL API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, authorized with the
//! token persisted by `BrowserTokenStore`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure, including a failed token refresh, is an `ApiError` so a
//! page can render one error slot.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::token::{BrowserTokenStore, TokenError};

pub const VIEWER_QUERY: &str = "query Viewer { viewer { id name } }";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("request failed: {0}")]
    Request(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("{0}")]
    GraphQl(String),

    #[error("response parse failed: {0}")]
    Parse(String),

    #[error("not available on server")]
    Unavailable,
}

/// The signed-in user as returned by the `viewer` query.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Viewer {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
struct ViewerData {
    viewer: Viewer,
}

#[derive(Deserialize)]
struct GraphQlEnvelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn graphql_endpoint() -> String {
    super::api_url("/api/graphql")
}

/// JSON body for a GraphQL POST.
pub fn graphql_body(query: &str, variables: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "query": query, "variables": variables })
}

/// Decode a GraphQL envelope. A non-empty `errors` array wins over `data`.
///
/// # Errors
///
/// Returns [`ApiError::GraphQl`] with the first error message when `errors`
/// is non-empty, or [`ApiError::Parse`] if the body is malformed or `data`
/// is missing.
pub fn parse_graphql_response<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: GraphQlEnvelope<T> = serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    if let Some(first) = envelope.errors.into_iter().next() {
        return Err(ApiError::GraphQl(first.message));
    }
    envelope.data.ok_or_else(|| ApiError::Parse("missing data".to_owned()))
}

/// Run a GraphQL query with the stored bearer token.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the response carries GraphQL errors.
pub async fn graphql<T: DeserializeOwned>(
    store: &BrowserTokenStore,
    query: &str,
    variables: serde_json::Value,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::post(&graphql_endpoint());
        if let Some(token) = store.read_access_token() {
            request = request.header("Authorization", &super::token::bearer(&token));
        }
        let resp = request
            .json(&graphql_body(query, variables))
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| ApiError::Request(e.to_string()))?;
        parse_graphql_response(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, query, variables);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the currently signed-in user.
///
/// # Errors
///
/// See [`graphql`].
pub async fn fetch_viewer(store: &BrowserTokenStore) -> Result<Viewer, ApiError> {
    let data: ViewerData = graphql(store, VIEWER_QUERY, serde_json::Value::Null).await?;
    Ok(data.viewer)
}
