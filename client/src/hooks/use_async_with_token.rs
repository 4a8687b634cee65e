//! Async-state hook gated behind an access-token refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authorized queries must not leave the browser with a stale bearer token.
//! Every run first awaits `save_access_token`, then the caller's operation.
//! A refresh failure short-circuits the run and becomes the reported error;
//! the operation is never started.

#[cfg(test)]
#[path = "use_async_with_token_test.rs"]
mod use_async_with_token_test;

use std::future::Future;
use std::rc::Rc;

use super::use_access_token::use_access_token;
use super::use_async::{AsyncOptions, AsyncResource, use_async};
use crate::net::token::{AccessTokenStore, TokenError};

/// Refresh the access token, then run `operation`.
///
/// # Errors
///
/// Returns the refresh error (converted into `E`) without calling
/// `operation`, or whatever `operation` fails with.
pub async fn refresh_then<S, F, Fut, T, E>(store: &S, operation: F) -> Result<T, E>
where
    S: AccessTokenStore + ?Sized,
    E: From<S::Error>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    if let Err(err) = store.save_access_token().await {
        log::warn!("access token refresh failed, skipping operation");
        return Err(E::from(err));
    }
    operation().await
}

/// [`use_async`] with a token refresh in front of every run, using the
/// token store from context.
pub fn use_async_with_token<T, E, D, F, Fut>(operation: F, deps: impl Fn() -> D + 'static) -> AsyncResource<T, E>
where
    T: Send + Sync + 'static,
    E: From<TokenError> + Send + Sync + 'static,
    D: PartialEq + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    use_async_with_store(use_access_token(), operation, deps)
}

/// [`use_async_with_token`] against an explicit store.
pub fn use_async_with_store<S, T, E, D, F, Fut>(
    store: S,
    operation: F,
    deps: impl Fn() -> D + 'static,
) -> AsyncResource<T, E>
where
    S: AccessTokenStore + 'static,
    T: Send + Sync + 'static,
    E: From<S::Error> + Send + Sync + 'static,
    D: PartialEq + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let store = Rc::new(store);
    let operation = Rc::new(operation);
    use_async(
        move || {
            let store = Rc::clone(&store);
            let operation = Rc::clone(&operation);
            async move { refresh_then(&*store, || (*operation)()).await }
        },
        AsyncOptions::default(),
        deps,
    )
}
