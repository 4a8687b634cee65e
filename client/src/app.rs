//! Root application component, document shell and root layout.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::wide_layout::WideLayout;
use crate::font::{self, FontHandle};
use crate::hooks::use_access_token::provide_access_token;
use crate::net::token::BrowserTokenStore;
use crate::pages::home::HomePage;

pub const APP_TITLE: &str = "Keystone";
pub const APP_DESCRIPTION: &str = "Keystone web client";

/// Body typeface; `None` when the selection fails validation.
fn body_font() -> Option<FontHandle> {
    match font::ubuntu() {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::warn!("body font unavailable: {e}");
            None
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let scripts = view! {
        <AutoReload options=options.clone()/>
        <HydrationScripts options/>
        <MetaTags/>
    };
    document(body_font(), scripts, view! { <App/> })
}

/// `<html lang="en">` document with the typeface wired into head and body.
fn document(
    font: Option<FontHandle>,
    head: impl IntoView + 'static,
    body: impl IntoView + 'static,
) -> impl IntoView {
    let font_href = font.as_ref().map(|f| f.stylesheet_href.clone());
    let font_rule = font.as_ref().map(FontHandle::css_rule);
    let body_class = font.map(|f| f.class_name).unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {font_href.map(|href| view! { <link rel="stylesheet" href=href/> })}
                {font_rule.map(|rule| view! { <style>{rule}</style> })}
                {head}
            </head>
            <body class=body_class>
                {body}
            </body>
        </html>
    }
}

/// Wraps every route in the shared wide frame.
#[component]
pub fn RootLayout(children: Children) -> impl IntoView {
    view! { <WideLayout>{children()}</WideLayout> }
}

/// Root application component.
///
/// Provides the token store context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_access_token(BrowserTokenStore::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/keystone.css"/>
        <Title text=APP_TITLE/>
        <Meta name="description" content=APP_DESCRIPTION/>

        <Router>
            <RootLayout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </RootLayout>
        </Router>
    }
}
