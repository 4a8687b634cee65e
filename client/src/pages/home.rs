//! Index page greeting the signed-in viewer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The viewer query needs a fresh bearer token, so it goes through
//! `use_async_with_store` with the context store; the page only renders the
//! resulting state.

use leptos::prelude::*;

use crate::hooks::use_access_token::use_access_token;
use crate::hooks::use_async_with_token::use_async_with_store;
use crate::net::api::{self, ApiError, Viewer};
use crate::state::async_state::AsyncState;

/// Text shown for a given viewer state.
pub(crate) fn viewer_status_text(state: &AsyncState<Viewer, ApiError>) -> String {
    if state.loading {
        return "Loading...".to_owned();
    }
    match (&state.data, &state.error) {
        (_, Some(err)) => format!("Could not load your profile: {err}"),
        (Some(viewer), None) => format!("Signed in as {}", viewer.name),
        (None, None) => String::new(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_access_token();
    let viewer = use_async_with_store(
        store.clone(),
        move || {
            let store = store.clone();
            async move { api::fetch_viewer(&store).await }
        },
        || (),
    );

    view! {
        <section class="home">
            <h1>"Welcome"</h1>
            <p class="home__status" class:home__status--error=move || viewer.error().is_some()>
                {move || viewer_status_text(&viewer.state())}
            </p>
            <button class="home__reload" disabled=move || viewer.loading() on:click=move |_| viewer.refetch()>
                "Reload"
            </button>
        </section>
    }
}

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;
