//! Networking modules for token refresh and GraphQL requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! `token` refreshes and stores the bearer token, `api` issues authorized
//! GraphQL calls that read it back.

pub mod api;
pub mod token;

/// Base URL prepended to API paths. Empty means same origin.
pub const API_BASE: &str = match option_env!("KEYSTONE_API_BASE") {
    Some(base) => base,
    None => "",
};

/// Join `API_BASE` and an absolute path.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", API_BASE.trim_end_matches('/'))
}
