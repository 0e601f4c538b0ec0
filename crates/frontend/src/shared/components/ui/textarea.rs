use leptos::prelude::*;

/// Labeled textarea with its inline validation message
#[component]
pub fn Textarea(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label" for=textarea_id>
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <textarea
                id=textarea_id
                class="form__textarea"
                class:form__input--invalid=move || error.with(Option::is_some)
                placeholder=textarea_placeholder
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <p class="form__error">{msg}</p> })}
        </div>
    }
}
