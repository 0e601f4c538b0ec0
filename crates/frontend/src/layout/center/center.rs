use super::tab_strip::TabStrip;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <TabStrip />
            {move || ctx.notice.get().map(|text| view! {
                <div class="alert alert--success app-notice" role="status">
                    <span>{text}</span>
                    <button class="alert__close" on:click=move |_| ctx.dismiss_notice()>"×"</button>
                </div>
            })}
            <div class="tab-content">
                {children()}
            </div>
        </div>
    }
}
