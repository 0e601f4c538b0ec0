use super::view_model::AddRoomTypeViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::submit_notice::SubmitNotice;
use crate::shared::components::ui::{Input, Select};
use crate::shared::config::use_dashboard_config;
use contracts::domain::a003_room_type::aggregate::{
    RoomCategory, RoomTypeStatus, CONDITIONS, ELEMENT_NAME,
};
use contracts::domain::common::RecordStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AddRoomTypeDialog(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let forms = use_dashboard_config().forms;
    let vm = AddRoomTypeViewModel::new(open);
    let fields = vm.fields;
    fields.keep_draft(|_| {});
    fields.cancel_on_cleanup();

    Effect::new(move |_| {
        if !open.get() {
            fields.tracker.update(|t| t.cancel());
        }
    });

    let submitting = fields.is_submitting();

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{format!("Add {}", ELEMENT_NAME)}</DialogTitle>
                    <DialogContent>
                        <SubmitNotice
                            state=fields.state()
                            reference=fields.reference()
                            subject=ELEMENT_NAME
                            on_dismiss=Callback::new(move |_| fields.dismiss())
                        />
                        <div class="form form--dialog">
                            <div class="form__row">
                                <Input
                                    label="Room Type"
                                    required=true
                                    value=fields.text(|d| d.name.clone())
                                    on_input=fields.setter(|d, v| d.name = v)
                                    error=fields.error("name")
                                />
                                <Input
                                    label="Code"
                                    placeholder="LAB-01"
                                    required=true
                                    value=fields.text(|d| d.code.clone())
                                    on_input=fields.setter(AddRoomTypeViewModel::set_code)
                                    error=fields.error("code")
                                />
                            </div>
                            <Select
                                label="Category"
                                required=true
                                options=RoomCategory::LABELS
                                value=fields.text(|d| d.category.clone())
                                on_change=fields.setter(|d, v| d.category = v)
                                error=fields.error("category")
                            />
                            <div class="form__row">
                                <Input
                                    label="Capacity"
                                    input_type="number"
                                    required=true
                                    value=fields.text(|d| d.capacity.clone())
                                    on_input=fields.setter(|d, v| d.capacity = v)
                                    error=fields.error("capacity")
                                />
                                <Input
                                    label="Price"
                                    input_type="number"
                                    required=true
                                    value=fields.text(|d| d.price.clone())
                                    on_input=fields.setter(|d, v| d.price = v)
                                    error=fields.error("price")
                                />
                                <Input
                                    label="Area (m²)"
                                    input_type="number"
                                    value=fields.text(|d| d.area.clone())
                                    on_input=fields.setter(|d, v| d.area = v)
                                    error=fields.error("area")
                                />
                            </div>
                            <div class="form__row">
                                <Select
                                    label="Condition"
                                    required=true
                                    options=CONDITIONS
                                    value=fields.text(|d| d.condition.clone())
                                    on_change=fields.setter(|d, v| d.condition = v)
                                    error=fields.error("condition")
                                />
                                <Select
                                    label="Status"
                                    required=true
                                    options=RoomTypeStatus::LABELS
                                    value=fields.text(|d| d.status.clone())
                                    on_change=fields.setter(|d, v| d.status = v)
                                    error=fields.error("status")
                                />
                            </div>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.close()>
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=submitting
                            on_click=move |_| vm.save_command(ctx, forms)
                        >
                            {move || if submitting.get() { "Saving..." } else { "Save" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
