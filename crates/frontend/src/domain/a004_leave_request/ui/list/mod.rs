use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::data::SchoolData;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_leave_request::aggregate::{LeaveStatus, COLLECTION_KEY, LIST_NAME};
use contracts::shared::repository::RecordRepository;
use contracts::shared::table::SortState;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LeaveRequestList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let data = use_context::<SchoolData>().expect("SchoolData not found");
    let repo = data.leave_requests.clone();
    let revision = data.revision;
    let counts = Signal::derive(move || {
        revision.track();
        let records = repo.list();
        let pending = records
            .iter()
            .filter(|r| r.status == LeaveStatus::Pending)
            .count();
        (records.len(), pending)
    });

    let open_new = move |_: leptos::ev::MouseEvent| tabs_store.open_tab("a004_leave_request_new", "New Leave Request");

    view! {
        <PageFrame page_id="a004_leave_request--list" category=PAGE_CAT_LIST>
            <PageHeader title=LIST_NAME subtitle="Staff leave applications">
                <Badge variant="primary".to_string()>{move || counts.get().0}</Badge>
                <Badge variant="warning".to_string()>
                    {move || format!("{} pending", counts.get().1)}
                </Badge>
                <Button appearance=ButtonAppearance::Primary on_click=open_new>
                    {icon("plus")}
                    " Request Leave"
                </Button>
            </PageHeader>

            <div class="page__content">
                <DataTable
                    repository=data.leave_requests
                    collection_key=COLLECTION_KEY
                    initial_sort=SortState::by("requested_on", false)
                    search_placeholder="Search by employee, department, reason..."
                />
            </div>
        </PageFrame>
    }
}
