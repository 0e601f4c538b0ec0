//! Tab content registry - the single place mapping tab.key → View.

use super::tab_labels::split_detail_key;
use crate::dashboards::d400_school_overview::ui::SchoolOverviewDashboard;
use crate::domain::a001_academic_year::ui::list::AcademicYearList;
use crate::domain::a002_admission_inquiry::ui::list::AdmissionInquiryList;
use crate::domain::a002_admission_inquiry::ui::new::AdmissionInquiryNew;
use crate::domain::a003_room_type::ui::list::RoomTypeList;
use crate::domain::a004_leave_request::ui::list::LeaveRequestList;
use crate::domain::a004_leave_request::ui::new::LeaveRequestNew;
use crate::domain::a005_teacher::ui::list::TeacherList;
use crate::domain::a005_teacher::ui::new::TeacherNew;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::record_details::RecordDetails;
use crate::shared::data::SchoolData;
use contracts::domain::{
    a001_academic_year::aggregate as a001, a002_admission_inquiry::aggregate as a002,
    a003_room_type::aggregate as a003, a004_leave_request::aggregate as a004,
    a005_teacher::aggregate as a005,
};
use leptos::logging::log;
use leptos::prelude::*;

/// Render the content of a tab by its key.
///
/// Unknown keys get a placeholder instead of failing.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Record lists
        // ═══════════════════════════════════════════════════════════════════
        a001::COLLECTION_KEY => view! { <AcademicYearList /> }.into_any(),
        a002::COLLECTION_KEY => view! { <AdmissionInquiryList /> }.into_any(),
        a003::COLLECTION_KEY => view! { <RoomTypeList /> }.into_any(),
        a004::COLLECTION_KEY => view! { <LeaveRequestList /> }.into_any(),
        a005::COLLECTION_KEY => view! { <TeacherList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Forms (full page)
        // ═══════════════════════════════════════════════════════════════════
        "a002_admission_inquiry_new" => view! { <AdmissionInquiryNew /> }.into_any(),
        "a004_leave_request_new" => view! { <LeaveRequestNew /> }.into_any(),
        "a005_teacher_new" => view! { <TeacherNew /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Dashboards
        // ═══════════════════════════════════════════════════════════════════
        "d400_school_overview" => view! { <SchoolOverviewDashboard /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Record details: {collection}_details_{id}
        // ═══════════════════════════════════════════════════════════════════
        k if split_detail_key(k).is_some() => render_details(k, tabs_store),

        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}

fn render_details(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let Some((collection, id)) = split_detail_key(key) else {
        return view! { <div class="placeholder">{"Bad details tab key"}</div> }.into_any();
    };
    let data = use_context::<SchoolData>().expect("SchoolData not found");
    let id = id.to_string();
    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_: ()| tabs_store.close_tab(&key_for_close));

    match collection {
        a001::COLLECTION_KEY => view! {
            <RecordDetails repository=data.academic_years id=id on_close=on_close />
        }
        .into_any(),
        a002::COLLECTION_KEY => view! {
            <RecordDetails repository=data.admission_inquiries id=id on_close=on_close />
        }
        .into_any(),
        a003::COLLECTION_KEY => view! {
            <RecordDetails repository=data.room_types id=id on_close=on_close />
        }
        .into_any(),
        a004::COLLECTION_KEY => view! {
            <RecordDetails repository=data.leave_requests id=id on_close=on_close />
        }
        .into_any(),
        a005::COLLECTION_KEY => view! {
            <RecordDetails repository=data.teachers id=id on_close=on_close />
        }
        .into_any(),
        _ => {
            log!("Unknown details collection: {}", collection);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
