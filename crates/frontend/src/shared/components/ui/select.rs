use leptos::prelude::*;

/// Labeled select over a fixed list of values; empty value means "not chosen"
#[component]
pub fn Select(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Allowed values, shown as their own labels
    options: &'static [&'static str],
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label" for=select_id>
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <select
                id=select_id
                class="form__select"
                class:form__input--invalid=move || error.with(Option::is_some)
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.with(String::is_empty)>"Select..."</option>
                {options.iter().map(|&option| {
                    view! {
                        <option value=option selected=move || value.get() == option>
                            {option}
                        </option>
                    }
                }).collect_view()}
            </select>
            {move || error.get().map(|msg| view! { <p class="form__error">{msg}</p> })}
        </div>
    }
}
