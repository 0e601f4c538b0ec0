use super::view_model::LeaveRequestNewViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::submit_notice::SubmitNotice;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::config::use_dashboard_config;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use contracts::domain::a004_leave_request::aggregate::{
    LeaveRequestDto, DEPARTMENTS, DURATION_TYPES, ELEMENT_NAME, LEAVE_TYPES,
};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LeaveRequestNew() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let forms = use_dashboard_config().forms;
    let vm = LeaveRequestNewViewModel::new();
    let fields = vm.fields;
    fields.keep_draft(|_| {});
    fields.cancel_on_cleanup();

    let submitting = fields.is_submitting();
    let days_label = vm.days_label();

    view! {
        <PageFrame page_id="a004_leave_request--form" category=PAGE_CAT_FORM>
            <PageHeader title=format!("New {}", ELEMENT_NAME) subtitle="Apply for leave on behalf of a staff member">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel_command(ctx)>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=submitting
                    on_click=move |_| vm.submit_command(ctx, forms)
                >
                    {move || if submitting.get() { "Submitting..." } else { "Submit Request" }}
                </Button>
            </PageHeader>

            <div class="page__content">
                <SubmitNotice
                    state=fields.state()
                    reference=fields.reference()
                    subject=ELEMENT_NAME
                    on_dismiss=Callback::new(move |_| fields.dismiss())
                />

                <form class="form" on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit_command(ctx, forms);
                }>
                    <fieldset class="form__section" disabled=move || submitting.get()>
                        <legend class="form__section-title">"Employee"</legend>
                        <div class="form__row">
                            <Input
                                label="Employee Name"
                                required=true
                                value=fields.text(|d| d.employee_name.clone())
                                on_input=fields.setter(|d, v| d.employee_name = v)
                                error=fields.error("employee_name")
                            />
                            <Input
                                label="Employee ID"
                                placeholder="EMP-001"
                                required=true
                                value=fields.text(|d| d.employee_id.clone())
                                on_input=fields.setter(|d, v| d.employee_id = v)
                                error=fields.error("employee_id")
                            />
                        </div>
                        <Select
                            label="Department"
                            required=true
                            options=DEPARTMENTS
                            value=fields.text(|d| d.department.clone())
                            on_change=fields.setter(|d, v| d.department = v)
                            error=fields.error("department")
                        />
                    </fieldset>

                    <fieldset class="form__section" disabled=move || submitting.get()>
                        <legend class="form__section-title">"Leave"</legend>
                        <div class="form__row">
                            <Select
                                label="Leave Type"
                                required=true
                                options=LEAVE_TYPES
                                value=fields.text(|d| d.leave_type.clone())
                                on_change=fields.setter(|d, v| d.leave_type = v)
                                error=fields.error("leave_type")
                            />
                            <Select
                                label="Duration"
                                required=true
                                options=DURATION_TYPES
                                value=fields.text(|d| d.duration_type.clone())
                                on_change=fields.setter(|d, v| d.duration_type = v)
                                error=fields.error("duration_type")
                            />
                        </div>
                        <div class="form__row">
                            <Input
                                label="From"
                                input_type="date"
                                required=true
                                value=fields.text(|d| d.from.clone())
                                on_input=fields.setter(LeaveRequestDto::set_from)
                                error=fields.error("from")
                            />
                            <Input
                                label="To"
                                input_type="date"
                                required=true
                                value=fields.text(|d| d.to.clone())
                                on_input=fields.setter(LeaveRequestDto::set_to)
                                error=fields.error("to")
                            />
                            <Input
                                label="Number of Days"
                                readonly=true
                                value=days_label
                                on_input=Callback::new(|_: String| {})
                            />
                        </div>
                        <Textarea
                            label="Reason"
                            required=true
                            rows=4
                            placeholder="At least 10 characters"
                            value=fields.text(|d| d.reason.clone())
                            on_input=fields.setter(|d, v| d.reason = v)
                            error=fields.error("reason")
                        />
                    </fieldset>
                </form>
            </div>
        </PageFrame>
    }
}

