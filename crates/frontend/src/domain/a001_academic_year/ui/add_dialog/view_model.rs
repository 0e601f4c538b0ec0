use crate::layout::global_context::AppGlobalContext;
use crate::shared::form_state::FormState;
use contracts::shared::config::FormsConfig;
use contracts::domain::a001_academic_year::aggregate::{AcademicYearDto, ELEMENT_NAME};
use leptos::prelude::*;

const DRAFT_KEY: &str = "a001_academic_year_add";

#[derive(Clone, Copy)]
pub struct AddAcademicYearViewModel {
    pub fields: FormState<AcademicYearDto>,
    pub open: RwSignal<bool>,
}

impl AddAcademicYearViewModel {
    pub fn new(open: RwSignal<bool>) -> Self {
        Self {
            fields: FormState::new(DRAFT_KEY),
            open,
        }
    }

    /// Closing the dialog drops a pending submission
    pub fn close(&self) {
        self.fields.tracker.update(|t| t.cancel());
        self.open.set(false);
    }

    pub fn save_command(&self, ctx: AppGlobalContext, forms: FormsConfig) {
        let this = *self;
        self.fields.submit(forms, move |reference| {
            ctx.notify(format!("{} saved. Reference {}", ELEMENT_NAME, reference));
            this.fields.reset();
            this.open.set(false);
        });
    }
}
