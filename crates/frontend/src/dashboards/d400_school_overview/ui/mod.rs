use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::SchoolData;
use crate::shared::date_utils::{format_long, today};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_school_overview::{overview_cards, school_snapshot, OverviewInput};
use contracts::domain::{
    a002_admission_inquiry::aggregate as a002, a004_leave_request::aggregate as a004,
    a005_teacher::aggregate as a005,
};
use contracts::shared::repository::RecordRepository;
use leptos::prelude::*;
use thaw::*;

/// Headline figures of the school: enrollment, staff, attendance,
/// transport, hostel and the pending work queues.
#[component]
pub fn SchoolOverviewDashboard() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let data = use_context::<SchoolData>().expect("SchoolData not found");
    let revision = data.revision;

    // Recomputed whenever a record list changes
    let cards = Memo::new(move |_| {
        revision.track();
        let input = OverviewInput::from_records(
            school_snapshot(),
            &data.teachers.list(),
            &data.admission_inquiries.list(),
            &data.leave_requests.list(),
        );
        overview_cards(&input)
    });

    let subtitle = today()
        .map(|d| format!("As of {}", format_long(d)))
        .unwrap_or_default();

    let quick_link = move |key: &'static str, title: &'static str, icon_name: &'static str| {
        view! {
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| tabs_store.open_tab(key, title)
            >
                {icon(icon_name)}
                {format!(" {}", title)}
            </Button>
        }
    };

    view! {
        <PageFrame page_id="d400_school_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="School Overview" subtitle=subtitle>
                {quick_link(a002::COLLECTION_KEY, a002::LIST_NAME, "user-plus")}
                {quick_link(a004::COLLECTION_KEY, a004::LIST_NAME, "calendar")}
                {quick_link(a005::COLLECTION_KEY, a005::LIST_NAME, "users")}
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    {move || {
                        cards
                            .get()
                            .into_iter()
                            .map(|card| view! { <StatCard card=card /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </PageFrame>
    }
}
