use crate::layout::global_context::AppGlobalContext;
use crate::shared::form_state::FormState;
use contracts::shared::config::FormsConfig;
use contracts::domain::a003_room_type::aggregate::{RoomTypeDto, ELEMENT_NAME};
use leptos::prelude::*;

const DRAFT_KEY: &str = "a003_room_type_add";

#[derive(Clone, Copy)]
pub struct AddRoomTypeViewModel {
    pub fields: FormState<RoomTypeDto>,
    pub open: RwSignal<bool>,
}

impl AddRoomTypeViewModel {
    pub fn new(open: RwSignal<bool>) -> Self {
        Self {
            fields: FormState::new(DRAFT_KEY),
            open,
        }
    }

    pub fn close(&self) {
        self.fields.tracker.update(|t| t.cancel());
        self.open.set(false);
    }

    /// Uppercase the code as typed; codes are matched case-sensitively
    pub fn set_code(d: &mut RoomTypeDto, value: String) {
        d.code = value.trim().to_uppercase();
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_normalized() {
        let mut dto = RoomTypeDto::default();
        AddRoomTypeViewModel::set_code(&mut dto, " lab-02 ".to_string());
        assert_eq!(dto.code, "LAB-02");
    }
}
