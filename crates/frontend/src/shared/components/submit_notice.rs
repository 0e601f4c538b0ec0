//! Outcome banner of a form submission

use contracts::shared::submission::SubmitState;
use leptos::prelude::*;
use uuid::Uuid;

#[component]
pub fn SubmitNotice(
    #[prop(into)]
    state: Signal<SubmitState>,
    /// Reference of the last successful submission
    #[prop(into)]
    reference: Signal<Option<Uuid>>,
    /// What was submitted, e.g. "Leave request"
    #[prop(into)]
    subject: String,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || match state.get() {
        SubmitState::Idle => ().into_any(),
        SubmitState::Submitting => view! {
            <div class="alert alert--info">"Submitting..."</div>
        }
        .into_any(),
        SubmitState::Succeeded => {
            let text = match reference.get() {
                Some(r) => format!("{} submitted successfully. Reference: {}", subject, r),
                None => format!("{} submitted successfully.", subject),
            };
            view! {
                <div class="alert alert--success">
                    <span>{text}</span>
                    <button class="alert__close" on:click=move |_| on_dismiss.run(())>"×"</button>
                </div>
            }
            .into_any()
        }
        SubmitState::Failed(msg) => view! {
            <div class="alert alert--error">
                <span>{msg}</span>
                <button class="alert__close" on:click=move |_| on_dismiss.run(())>"×"</button>
            </div>
        }
        .into_any(),
    }
}
