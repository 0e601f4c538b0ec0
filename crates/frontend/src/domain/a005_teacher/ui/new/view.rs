use super::view_model::{scrub_credentials, TeacherNewViewModel};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::submit_notice::SubmitNotice;
use crate::shared::components::ui::{Input, Select};
use crate::shared::config::use_dashboard_config;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use contracts::domain::a005_teacher::aggregate::{TeacherStatus, ELEMENT_NAME, SUBJECTS};
use contracts::domain::common::RecordStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TeacherNew() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let forms = use_dashboard_config().forms;
    let vm = TeacherNewViewModel::new();
    let fields = vm.fields;
    fields.keep_draft(scrub_credentials);
    fields.cancel_on_cleanup();

    let submitting = fields.is_submitting();
    let password_type = vm.password_input_type();

    view! {
        <PageFrame page_id="a005_teacher--form" category=PAGE_CAT_FORM>
            <PageHeader title=format!("Add {}", ELEMENT_NAME) subtitle="Staff profile and portal login">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel_command(ctx)>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=submitting
                    on_click=move |_| vm.submit_command(ctx, forms)
                >
                    {move || if submitting.get() { "Saving..." } else { "Add Teacher" }}
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
                        <legend class="form__section-title">"Profile"</legend>
                        <Input
                            label="Full Name"
                            required=true
                            value=fields.text(|d| d.full_name.clone())
                            on_input=fields.setter(|d, v| d.full_name = v)
                            error=fields.error("full_name")
                        />
                        <div class="form__row">
                            <Input
                                label="Email"
                                input_type="email"
                                required=true
                                value=fields.text(|d| d.email.clone())
                                on_input=fields.setter(|d, v| d.email = v)
                                error=fields.error("email")
                            />
                            <Input
                                label="Phone"
                                input_type="tel"
                                required=true
                                value=fields.text(|d| d.phone.clone())
                                on_input=fields.setter(|d, v| d.phone = v)
                                error=fields.error("phone")
                            />
                        </div>
                        <div class="form__row">
                            <Select
                                label="Subject"
                                required=true
                                options=SUBJECTS
                                value=fields.text(|d| d.subject.clone())
                                on_change=fields.setter(|d, v| d.subject = v)
                                error=fields.error("subject")
                            />
                            <Input
                                label="Department"
                                required=true
                                value=fields.text(|d| d.department.clone())
                                on_input=fields.setter(|d, v| d.department = v)
                                error=fields.error("department")
                            />
                        </div>
                        <div class="form__row">
                            <Input
                                label="Joining Date"
                                input_type="date"
                                required=true
                                value=fields.text(|d| d.joining_date.clone())
                                on_input=fields.setter(|d, v| d.joining_date = v)
                                error=fields.error("joining_date")
                            />
                            <Select
                                label="Status"
                                required=true
                                options=TeacherStatus::LABELS
                                value=fields.text(|d| d.status.clone())
                                on_change=fields.setter(|d, v| d.status = v)
                                error=fields.error("status")
                            />
                        </div>
                    </fieldset>

                    <fieldset class="form__section" disabled=move || submitting.get()>
                        <legend class="form__section-title">"Portal Login"</legend>
                        <div class="form__row">
                            <Input
                                label="Password"
                                input_type=password_type
                                placeholder="At least 8 characters"
                                required=true
                                value=fields.text(|d| d.password.clone())
                                on_input=fields.setter(|d, v| d.password = v)
                                error=fields.error("password")
                            />
                            <Input
                                label="Confirm Password"
                                input_type=password_type
                                required=true
                                value=fields.text(|d| d.confirm_password.clone())
                                on_input=fields.setter(|d, v| d.confirm_password = v)
                                error=fields.error("confirm_password")
                            />
                        </div>
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || vm.show_password.get()
                                on:change=move |ev| vm.show_password.set(event_target_checked(&ev))
                            />
                            " Show password"
                        </label>
                    </fieldset>
                </form>
            </div>
        </PageFrame>
    }
}
