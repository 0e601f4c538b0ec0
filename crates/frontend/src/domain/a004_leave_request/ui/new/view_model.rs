use crate::layout::global_context::AppGlobalContext;
use crate::shared::form_state::FormState;
use contracts::shared::config::FormsConfig;
use contracts::domain::a004_leave_request::aggregate::{
    LeaveRequestDto, COLLECTION_KEY, ELEMENT_NAME,
};
use leptos::prelude::*;

pub const FORM_KEY: &str = "a004_leave_request_new";

fn days_text(number_of_days: &str) -> String {
    match number_of_days {
        "" => String::new(),
        "1" => "1 day".to_string(),
        n => format!("{} days", n),
    }
}

#[derive(Clone, Copy)]
pub struct LeaveRequestNewViewModel {
    pub fields: FormState<LeaveRequestDto>,
}

impl LeaveRequestNewViewModel {
    pub fn new() -> Self {
        Self {
            fields: FormState::new(FORM_KEY),
        }
    }

    /// Day count shown next to the dates; empty until the range is valid
    pub fn days_label(&self) -> Signal<String> {
        let form = self.fields.form;
        Signal::derive(move || form.with(|d| days_text(&d.number_of_days)))
    }

    pub fn submit_command(&self, ctx: AppGlobalContext, forms: FormsConfig) {
        self.fields.submit(forms, move |reference| {
            ctx.notify(format!("{} submitted. Reference {}", ELEMENT_NAME, reference));
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_text() {
        assert_eq!(days_text(""), "");
        assert_eq!(days_text("1"), "1 day");
        assert_eq!(days_text("5"), "5 days");
    }
}
