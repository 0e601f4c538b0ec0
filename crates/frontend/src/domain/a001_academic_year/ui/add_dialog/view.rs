use super::view_model::AddAcademicYearViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::submit_notice::SubmitNotice;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::config::use_dashboard_config;
use contracts::domain::a001_academic_year::aggregate::{AcademicYearStatus, ELEMENT_NAME};
use contracts::domain::common::RecordStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AddAcademicYearDialog(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let forms = use_dashboard_config().forms;
    let vm = AddAcademicYearViewModel::new(open);
    let fields = vm.fields;
    fields.keep_draft(|_| {});
    fields.cancel_on_cleanup();

    // Mask clicks and Esc close the dialog without going through `close`
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
                            <Input
                                label="Academic Year"
                                placeholder="2025-2026"
                                required=true
                                value=fields.text(|d| d.label.clone())
                                on_input=fields.setter(|d, v| d.label = v)
                                error=fields.error("label")
                            />
                            <div class="form__row">
                                <Input
                                    label="Start Date"
                                    input_type="date"
                                    required=true
                                    value=fields.text(|d| d.start_date.clone())
                                    on_input=fields.setter(|d, v| d.start_date = v)
                                    error=fields.error("start_date")
                                />
                                <Input
                                    label="End Date"
                                    input_type="date"
                                    required=true
                                    value=fields.text(|d| d.end_date.clone())
                                    on_input=fields.setter(|d, v| d.end_date = v)
                                    error=fields.error("end_date")
                                />
                            </div>
                            <Input
                                label="Department"
                                required=true
                                value=fields.text(|d| d.department.clone())
                                on_input=fields.setter(|d, v| d.department = v)
                                error=fields.error("department")
                            />
                            <Select
                                label="Status"
                                required=true
                                options=AcademicYearStatus::LABELS
                                value=fields.text(|d| d.status.clone())
                                on_change=fields.setter(|d, v| d.status = v)
                                error=fields.error("status")
                            />
                            <Textarea
                                label="Description"
                                rows=3
                                value=fields.text(|d| d.description.clone())
                                on_input=fields.setter(|d, v| d.description = v)
                                error=fields.error("description")
                            />
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
