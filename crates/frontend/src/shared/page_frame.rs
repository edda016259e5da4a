//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! Root element carries `id="{entity}--{category}"` (e.g. `"a004_ticket--list"`)
//! and `data-page-category`, so a DOM id copied from the inspector leads
//! straight to the `domain/a004_ticket/` directory.

use leptos::prelude::*;

/// Table of records with filters and pagination
pub const PAGE_CAT_LIST: &str = "list";

/// System administration page (users).
pub const PAGE_CAT_SYSTEM: &str = "system";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class="page" data-page-category=category>
            {children()}
        </div>
    }
}
