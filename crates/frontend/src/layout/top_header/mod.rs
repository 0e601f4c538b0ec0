//! Application top bar: sidebar toggle, title and open-tab counter.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"School Admin"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__hint">
                    {move || format!("{} open tab(s)", ctx.opened.with(|tabs| tabs.len()))}
                </span>
                <div class="top-header__user">
                    {icon("user")}
                    <span>"Administrator"</span>
                </div>
            </div>
        </div>
    }
}
