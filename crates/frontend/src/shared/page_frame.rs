//! PageFrame - standard root wrapper for every page rendered inside a tab.

use super::page_standard::*;
use leptos::prelude::*;

/// Root element carrying `id="{entity}--{category}"` and
/// `data-page-category`, plus the BEM modifier for the category.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a005_teacher--list"`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_FORM => "page page--form",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
