use super::view_model::AdmissionInquiryNewViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::submit_notice::SubmitNotice;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::config::use_dashboard_config;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use contracts::domain::a002_admission_inquiry::aggregate::{
    InquiryStatus, CAMPUSES, ELEMENT_NAME, SOURCES,
};
use contracts::domain::common::RecordStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AdmissionInquiryNew() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let forms = use_dashboard_config().forms;
    let vm = AdmissionInquiryNewViewModel::new();
    let fields = vm.fields;
    fields.keep_draft(|_| {});
    fields.cancel_on_cleanup();

    let submitting = fields.is_submitting();

    view! {
        <PageFrame page_id="a002_admission_inquiry--form" category=PAGE_CAT_FORM>
            <PageHeader title=format!("New {}", ELEMENT_NAME) subtitle="Log an inquiry from a prospective family">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.cancel_command(ctx)>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=submitting
                    on_click=move |_| vm.submit_command(ctx, forms)
                >
                    {move || if submitting.get() { "Saving..." } else { "Save Inquiry" }}
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
                        <legend class="form__section-title">"Student & Guardian"</legend>
                        <div class="form__row">
                            <Input
                                label="Student Name"
                                required=true
                                value=fields.text(|d| d.student_name.clone())
                                on_input=fields.setter(|d, v| d.student_name = v)
                                error=fields.error("student_name")
                            />
                            <Input
                                label="Guardian Name"
                                required=true
                                value=fields.text(|d| d.guardian_name.clone())
                                on_input=fields.setter(|d, v| d.guardian_name = v)
                                error=fields.error("guardian_name")
                            />
                        </div>
                        <div class="form__row">
                            <Input
                                label="Contact"
                                input_type="tel"
                                placeholder="+1 555 010 2030"
                                required=true
                                value=fields.text(|d| d.contact.clone())
                                on_input=fields.setter(|d, v| d.contact = v)
                                error=fields.error("contact")
                            />
                            <Input
                                label="Email"
                                input_type="email"
                                required=true
                                value=fields.text(|d| d.email.clone())
                                on_input=fields.setter(|d, v| d.email = v)
                                error=fields.error("email")
                            />
                        </div>
                        <Input
                            label="Previous Education"
                            placeholder="Last school attended"
                            value=fields.text(|d| d.previous_education.clone())
                            on_input=fields.setter(|d, v| d.previous_education = v)
                            error=fields.error("previous_education")
                        />
                    </fieldset>

                    <fieldset class="form__section" disabled=move || submitting.get()>
                        <legend class="form__section-title">"Inquiry"</legend>
                        <div class="form__row">
                            <Input
                                label="Date of Inquiry"
                                input_type="date"
                                required=true
                                value=fields.text(|d| d.date_of_inquiry.clone())
                                on_input=fields.setter(|d, v| d.date_of_inquiry = v)
                                error=fields.error("date_of_inquiry")
                            />
                            <Input
                                label="Follow-up Date"
                                input_type="date"
                                value=fields.text(|d| d.follow_up_date.clone())
                                on_input=fields.setter(|d, v| d.follow_up_date = v)
                                error=fields.error("follow_up_date")
                            />
                        </div>
                        <div class="form__row">
                            <Select
                                label="Source"
                                required=true
                                options=SOURCES
                                value=fields.text(|d| d.source.clone())
                                on_change=fields.setter(|d, v| d.source = v)
                                error=fields.error("source")
                            />
                            <Select
                                label="Status"
                                required=true
                                options=InquiryStatus::LABELS
                                value=fields.text(|d| d.status.clone())
                                on_change=fields.setter(|d, v| d.status = v)
                                error=fields.error("status")
                            />
                        </div>
                        <div class="form__row">
                            <Input
                                label="Assigned To"
                                required=true
                                value=fields.text(|d| d.assigned_to.clone())
                                on_input=fields.setter(|d, v| d.assigned_to = v)
                                error=fields.error("assigned_to")
                            />
                            <Select
                                label="Campus"
                                required=true
                                options=CAMPUSES
                                value=fields.text(|d| d.campus.clone())
                                on_change=fields.setter(|d, v| d.campus = v)
                                error=fields.error("campus")
                            />
                        </div>
                    </fieldset>
                </form>
            </div>
        </PageFrame>
    }
}
