use crate::shared::icons::icon;
use leptos::prelude::*;

/// First / previous / "Page X of Y" / next / last, plus a rows-per-page select
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed, already clamped)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Last valid page index
    #[prop(into)]
    last_page: Signal<usize>,

    #[prop(into)]
    can_previous: Signal<bool>,

    #[prop(into)]
    can_next: Signal<bool>,

    /// "Page X of Y"
    #[prop(into)]
    label: Signal<String>,

    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    /// Rows-per-page options from the table config
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let at_start = move || !can_previous.get();
    let at_end = move || !can_next.get();

    view! {
        <div class="pagination-controls">
            <span class="pagination-controls__label">"Rows per page"</span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <span class="pagination-info">
                {move || label.get()}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=at_start
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                disabled=at_start
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run((current_page.get() + 1).min(last_page.get()))
                disabled=at_end
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(last_page.get())
                disabled=at_end
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
