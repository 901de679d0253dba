//! Footer Component

use leptos::prelude::*;

use crate::context::use_page_context;

#[component]
pub fn Footer() -> impl IntoView {
    let footer = use_page_context().memorial().footer;

    view! {
        <footer class="footer">
            <span>{footer}</span>
        </footer>
    }
}
