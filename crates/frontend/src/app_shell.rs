//! Application shell: sidebar + tab strip + active tab content.

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::{tab_label_for_key, TabPage};
use crate::layout::Shell;
use leptos::logging::log;
use leptos::prelude::*;

/// Tab opened when the URL carries no `?active=` key
const HOME_TAB: &str = "d400_school_overview";

/// Main application layout.
///
/// Initializes router integration (`?active=...`) and falls back to the
/// overview dashboard when nothing was restored from the URL.
#[component]
pub fn AppShell() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();
    if tabs_store.opened.with_untracked(|tabs| tabs.is_empty()) {
        tabs_store.open_tab(HOME_TAB, tab_label_for_key(HOME_TAB));
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            log!("<For> children for tab '{}'", tab.key);
                            view! {
                                <TabPage tab=tab tabs_store=tabs_store />
                            }
                        }
                    />
                }.into_any()
            }
        />
    }
}
