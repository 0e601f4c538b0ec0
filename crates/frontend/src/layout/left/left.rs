use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Collapsible left zone hosting the sidebar
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
            {children()}
        </nav>
    }
}
