use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::load_dashboard_config;
use crate::shared::data::SchoolData;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Table/form settings, optionally overridden from localStorage
    provide_context(load_dashboard_config());

    // Record stores shared by list pages and the overview dashboard
    provide_context(SchoolData::seeded());

    view! {
        <AppShell />
    }
}
