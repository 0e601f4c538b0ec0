//! View-model core shared by the new-record forms.
//!
//! Holds the form DTO, its inline errors and the submission tracker as
//! signals. Submitting validates synchronously, then waits the configured
//! delay on a timer; the completion is dropped when the form was closed in
//! the meantime (cancelled ticket or disposed signals).

use crate::layout::global_context::AppGlobalContext;
use contracts::shared::config::FormsConfig;
use contracts::shared::forms::{FormErrors, FormModel};
use contracts::shared::submission::{SubmissionTracker, SubmitError, SubmitState};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

pub struct FormState<D: Send + Sync + 'static> {
    pub form: RwSignal<D>,
    pub errors: RwSignal<FormErrors>,
    pub tracker: RwSignal<SubmissionTracker>,
    /// Tab key of the form; drafts are stored under it
    pub draft_key: &'static str,
    ctx: Option<AppGlobalContext>,
}

impl<D: Send + Sync + 'static> Clone for FormState<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Send + Sync + 'static> Copy for FormState<D> {}

impl<D> FormState<D>
where
    D: FormModel + Default + Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Start from the saved draft of `draft_key`, if any
    pub fn new(draft_key: &'static str) -> Self {
        let ctx = use_context::<AppGlobalContext>();
        let draft = ctx
            .and_then(|ctx| ctx.get_form_state(draft_key))
            .and_then(|value| serde_json::from_value::<D>(value).ok());
        if draft.is_some() {
            leptos::logging::log!("restored draft '{}'", draft_key);
        }

        Self {
            form: RwSignal::new(draft.unwrap_or_default()),
            errors: RwSignal::new(FormErrors::new()),
            tracker: RwSignal::new(SubmissionTracker::new()),
            draft_key,
            ctx,
        }
    }

    /// Mirror every edit into the app-wide draft store; `scrub` removes
    /// what must not be kept (passwords)
    pub fn keep_draft(&self, scrub: fn(&mut D)) {
        let Some(ctx) = self.ctx else {
            return;
        };
        let form = self.form;
        let key = self.draft_key;
        Effect::new(move |_| {
            let mut draft = form.get();
            scrub(&mut draft);
            match serde_json::to_value(&draft) {
                Ok(value) => ctx.set_form_state(key.to_string(), value),
                Err(e) => log::warn!("draft '{}' not saved: {}", key, e),
            }
        });
    }

    /// Cancel a pending submission when the owning view goes away
    pub fn cancel_on_cleanup(&self) {
        let tracker = self.tracker;
        on_cleanup(move || {
            tracker.try_update(|t| t.cancel());
        });
    }

    pub fn text(&self, get: fn(&D) -> String) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(get))
    }

    pub fn setter(&self, set: fn(&mut D, String)) -> Callback<String> {
        let form = self.form;
        Callback::new(move |value: String| form.update(|d| set(d, value)))
    }

    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let tracker = self.tracker;
        Signal::derive(move || tracker.with(|t| t.is_submitting()))
    }

    pub fn state(&self) -> Signal<SubmitState> {
        let tracker = self.tracker;
        Signal::derive(move || tracker.with(|t| t.state().clone()))
    }

    pub fn reference(&self) -> Signal<Option<Uuid>> {
        let tracker = self.tracker;
        Signal::derive(move || tracker.with(|t| t.last_reference()))
    }

    pub fn dismiss(&self) {
        self.tracker.update(|t| t.dismiss());
    }

    /// Empty form, no errors, no draft
    pub fn reset(&self) {
        self.form.set(D::default());
        self.errors.set(FormErrors::new());
        self.tracker.update(|t| t.dismiss());
        if let Some(ctx) = self.ctx {
            ctx.clear_form_state(self.draft_key);
        }
    }

    /// Validate and run the simulated submission.
    ///
    /// Invalid input only fills `errors`; no timer is started. `on_success`
    /// runs with the submission reference once the delay elapsed and the
    /// form is still open. With `simulate_failure` set the tracker ends in
    /// `Failed` and the form keeps its input.
    pub fn submit(&self, forms: FormsConfig, on_success: impl FnOnce(Uuid) + 'static) {
        let form = self.form.get_untracked();
        let tracker = self.tracker;
        let mut started = None;
        tracker.update(|t| started = Some(t.begin(&form)));

        match started {
            Some(Ok(ticket)) => {
                self.errors.set(FormErrors::new());
                spawn_local(async move {
                    TimeoutFuture::new(forms.submit_delay_ms).await;
                    if ticket.is_cancelled() {
                        log::debug!("submission {} cancelled", ticket.reference());
                        return;
                    }
                    let outcome = forms.submission_outcome();
                    let succeeded = outcome.is_ok();
                    let applied = tracker
                        .try_update(|t| t.complete(&ticket, outcome))
                        .unwrap_or(false);
                    if !applied {
                        return;
                    }
                    if succeeded {
                        log::info!("submission {} succeeded", ticket.reference());
                        on_success(ticket.reference());
                    } else {
                        log::warn!("submission {} failed", ticket.reference());
                    }
                });
            }
            Some(Err(SubmitError::Invalid(errors))) => self.errors.set(errors),
            Some(Err(SubmitError::InProgress)) | None => {}
        }
    }
}
