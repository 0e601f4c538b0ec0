//! Form submission lifecycle: idle → submitting → succeeded | failed.
//!
//! Every submission gets a ticket carrying a cancellation token. A completion
//! that arrives for a cancelled or superseded ticket is ignored, so a form
//! that was closed while its delayed submission was pending is never updated.

use super::forms::{FormErrors, FormModel};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Invalid(FormErrors),
    #[error("a submission is already in progress")]
    InProgress,
}

/// Shared flag flipped when the owner of a pending submission goes away
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionTicket {
    generation: u64,
    token: CancellationToken,
    reference: Uuid,
}

impl SubmissionTicket {
    /// Reference shown to the user once the submission succeeds
    pub fn reference(&self) -> Uuid {
        self.reference
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    state: SubmitState,
    generation: u64,
    pending: Option<CancellationToken>,
    last_reference: Option<Uuid>,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Reference of the last successful submission
    pub fn last_reference(&self) -> Option<Uuid> {
        self.last_reference
    }

    /// Validate `form` and enter `Submitting`.
    ///
    /// Invalid forms never leave the current state, so no delay is started.
    pub fn begin<F: FormModel>(&mut self, form: &F) -> Result<SubmissionTicket, SubmitError> {
        if self.is_submitting() {
            log::warn!("submit ignored: previous submission still pending");
            return Err(SubmitError::InProgress);
        }
        if let Err(errors) = form.validate() {
            log::warn!("submit rejected: {}", errors);
            return Err(SubmitError::Invalid(errors));
        }

        self.generation += 1;
        let token = CancellationToken::new();
        self.pending = Some(token.clone());
        self.state = SubmitState::Submitting;
        let reference = Uuid::new_v4();
        log::debug!("submission {} started", reference);
        Ok(SubmissionTicket {
            generation: self.generation,
            token,
            reference,
        })
    }

    /// Apply the outcome of `ticket`. Returns `false` when the ticket was
    /// cancelled or superseded and nothing changed.
    pub fn complete(&mut self, ticket: &SubmissionTicket, result: Result<(), String>) -> bool {
        if ticket.is_cancelled() || ticket.generation != self.generation || !self.is_submitting() {
            log::debug!("stale submission completion dropped");
            return false;
        }
        self.pending = None;
        self.state = match result {
            Ok(()) => {
                self.last_reference = Some(ticket.reference);
                SubmitState::Succeeded
            }
            Err(msg) => SubmitState::Failed(msg),
        };
        true
    }

    /// Cancel the pending submission (form closed / unmounted)
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
        if self.is_submitting() {
            self.state = SubmitState::Idle;
        }
    }

    /// Close the failure notice
    pub fn dismiss(&mut self) {
        if matches!(self.state, SubmitState::Failed(_) | SubmitState::Succeeded) {
            self.state = SubmitState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Form {
        ok: bool,
    }

    impl FormModel for Form {
        fn validate(&self) -> Result<(), FormErrors> {
            let mut errors = FormErrors::new();
            if !self.ok {
                errors.insert("email", "Invalid email address");
            }
            errors.into_result()
        }
    }

    #[test]
    fn test_happy_path() {
        let mut tracker = SubmissionTracker::new();
        let ticket = tracker.begin(&Form { ok: true }).unwrap();
        assert!(tracker.is_submitting());
        assert!(tracker.complete(&ticket, Ok(())));
        assert_eq!(tracker.state(), &SubmitState::Succeeded);
        assert_eq!(tracker.last_reference(), Some(ticket.reference()));
    }

    #[test]
    fn test_invalid_form_never_submits() {
        let mut tracker = SubmissionTracker::new();
        let err = tracker.begin(&Form { ok: false }).unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(ref e) if e.contains("email")));
        assert_eq!(tracker.state(), &SubmitState::Idle);
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut tracker = SubmissionTracker::new();
        let _ticket = tracker.begin(&Form { ok: true }).unwrap();
        assert_eq!(
            tracker.begin(&Form { ok: true }).unwrap_err(),
            SubmitError::InProgress
        );
    }

    #[test]
    fn test_cancelled_completion_is_dropped() {
        let mut tracker = SubmissionTracker::new();
        let ticket = tracker.begin(&Form { ok: true }).unwrap();
        tracker.cancel();
        assert!(ticket.is_cancelled());
        assert!(!tracker.complete(&ticket, Ok(())));
        assert_eq!(tracker.state(), &SubmitState::Idle);
    }

    #[test]
    fn test_superseded_ticket_is_dropped() {
        let mut tracker = SubmissionTracker::new();
        let first = tracker.begin(&Form { ok: true }).unwrap();
        assert!(tracker.complete(&first, Err("network".into())));
        tracker.dismiss();
        let second = tracker.begin(&Form { ok: true }).unwrap();
        assert!(!tracker.complete(&first, Ok(())));
        assert!(tracker.complete(&second, Ok(())));
    }

    #[test]
    fn test_failure_then_dismiss() {
        let mut tracker = SubmissionTracker::new();
        let ticket = tracker.begin(&Form { ok: true }).unwrap();
        tracker.complete(&ticket, Err("Something went wrong".into()));
        assert_eq!(
            tracker.state(),
            &SubmitState::Failed("Something went wrong".into())
        );
        tracker.dismiss();
        assert_eq!(tracker.state(), &SubmitState::Idle);
    }

    #[test]
    fn test_configured_failure_keeps_reference_unset() {
        let forms = crate::shared::config::FormsConfig {
            submit_delay_ms: 0,
            simulate_failure: true,
        };
        let mut tracker = SubmissionTracker::new();
        let ticket = tracker.begin(&Form { ok: true }).unwrap();
        assert!(tracker.complete(&ticket, forms.submission_outcome()));
        assert!(matches!(tracker.state(), SubmitState::Failed(_)));
        assert_eq!(tracker.last_reference(), None);
        assert!(tracker.begin(&Form { ok: true }).is_ok());
    }
}
