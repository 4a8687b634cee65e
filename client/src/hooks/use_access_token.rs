//! Context lookup for the access-token store.

use leptos::prelude::*;

use crate::net::token::BrowserTokenStore;

/// Make `store` the token store for every descendant component.
pub fn provide_access_token(store: BrowserTokenStore) {
    provide_context(store);
}

/// Token store from context, or the default browser store when none was provided.
pub fn use_access_token() -> BrowserTokenStore {
    use_context::<BrowserTokenStore>().unwrap_or_default()
}
