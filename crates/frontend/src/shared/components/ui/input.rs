use leptos::prelude::*;

/// Labeled input with its inline validation message
#[component]
pub fn Input(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// First failing rule of this field, shown under it
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    /// Input type: "text" (default), "password", "email", "date", "number", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Marks the label with `*`; rules are enforced on submit
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    readonly: Signal<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id>
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                id=input_id
                class="form__input"
                class:form__input--invalid=move || error.with(Option::is_some)
                type=input_t
                placeholder=input_placeholder
                readonly=move || readonly.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <p class="form__error">{msg}</p> })}
        </div>
    }
}
