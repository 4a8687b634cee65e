//! Full-width page frame shared by every route.
//!
//! DESIGN
//! ======
//! Routes only supply content. Width, gutters and chrome live here so pages
//! never size themselves.

use leptos::prelude::*;

/// Wide content frame. Children render once, unchanged, inside the column.
#[component]
pub fn WideLayout(children: Children) -> impl IntoView {
    view! {
        <main class="wide-layout">
            <div class="wide-layout__column">{children()}</div>
        </main>
    }
}
