use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::today;
use crate::shared::form_state::FormState;
use contracts::shared::config::FormsConfig;
use contracts::domain::a002_admission_inquiry::aggregate::{
    AdmissionInquiryDto, COLLECTION_KEY, ELEMENT_NAME,
};
use leptos::prelude::*;

pub const FORM_KEY: &str = "a002_admission_inquiry_new";

#[derive(Clone, Copy)]
pub struct AdmissionInquiryNewViewModel {
    pub fields: FormState<AdmissionInquiryDto>,
}

impl AdmissionInquiryNewViewModel {
    pub fn new() -> Self {
        let fields = FormState::new(FORM_KEY);
        // New inquiries are usually logged the day they come in
        if let Some(date) = today() {
            fields.form.update(|d: &mut AdmissionInquiryDto| {
                if d.date_of_inquiry.is_empty() {
                    d.date_of_inquiry = date.format("%Y-%m-%d").to_string();
                }
            });
        }
        Self { fields }
    }

    pub fn submit_command(&self, ctx: AppGlobalContext, forms: FormsConfig) {
        self.fields.submit(forms, move |reference| {
            ctx.notify(format!("{} recorded. Reference {}", ELEMENT_NAME, reference));
            ctx.clear_form_state(FORM_KEY);
            ctx.navigate_back(FORM_KEY, COLLECTION_KEY);
        });
    }

    pub fn cancel_command(&self, ctx: AppGlobalContext) {
        self.fields.tracker.update(|t| t.cancel());
        ctx.clear_form_state(FORM_KEY);
        ctx.navigate_back(FORM_KEY, COLLECTION_KEY);
    }
}
