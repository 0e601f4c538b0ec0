use crate::layout::global_context::AppGlobalContext;
use crate::shared::form_state::FormState;
use contracts::shared::config::FormsConfig;
use contracts::domain::a005_teacher::aggregate::{TeacherDto, COLLECTION_KEY, ELEMENT_NAME};
use leptos::prelude::*;

pub const FORM_KEY: &str = "a005_teacher_new";

/// Drafts never hold credentials
pub fn scrub_credentials(dto: &mut TeacherDto) {
    dto.password.clear();
    dto.confirm_password.clear();
}

#[derive(Clone, Copy)]
pub struct TeacherNewViewModel {
    pub fields: FormState<TeacherDto>,
    pub show_password: RwSignal<bool>,
}

impl TeacherNewViewModel {
    pub fn new() -> Self {
        Self {
            fields: FormState::new(FORM_KEY),
            show_password: RwSignal::new(false),
        }
    }

    pub fn password_input_type(&self) -> Signal<String> {
        let show = self.show_password;
        Signal::derive(move || if show.get() { "text" } else { "password" }.to_string())
    }

    pub fn submit_command(&self, ctx: AppGlobalContext, forms: FormsConfig) {
        self.fields.submit(forms, move |reference| {
            ctx.notify(format!("{} added. Reference {}", ELEMENT_NAME, reference));
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
    fn test_scrub_keeps_profile() {
        let mut dto = TeacherDto {
            full_name: "Meera Iyer".into(),
            password: "s3cretpass".into(),
            confirm_password: "s3cretpass".into(),
            ..Default::default()
        };
        scrub_credentials(&mut dto);
        assert_eq!(dto.full_name, "Meera Iyer");
        assert!(dto.password.is_empty());
        assert!(dto.confirm_password.is_empty());
    }
}
