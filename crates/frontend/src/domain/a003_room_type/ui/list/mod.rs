use super::add_dialog::AddRoomTypeDialog;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::data::SchoolData;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_room_type::aggregate::{COLLECTION_KEY, ELEMENT_NAME, LIST_NAME};
use contracts::shared::repository::RecordRepository;
use contracts::shared::table::SortState;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RoomTypeList() -> impl IntoView {
    let data = use_context::<SchoolData>().expect("SchoolData not found");
    let repo = data.room_types.clone();
    let revision = data.revision;
    let count = Signal::derive(move || {
        revision.track();
        repo.len()
    });
    let dialog_open = RwSignal::new(false);

    view! {
        <PageFrame page_id="a003_room_type--list" category=PAGE_CAT_LIST>
            <PageHeader title=LIST_NAME subtitle="Classrooms, labs and halls">
                <Badge variant="primary".to_string()>{move || count.get()}</Badge>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog_open.set(true)>
                    {icon("plus")}
                    {format!(" Add {}", ELEMENT_NAME)}
                </Button>
            </PageHeader>

            <div class="page__content">
                <DataTable
                    repository=data.room_types
                    collection_key=COLLECTION_KEY
                    initial_sort=SortState::by("code", true)
                    search_placeholder="Search room types..."
                />
            </div>

            <AddRoomTypeDialog open=dialog_open />
        </PageFrame>
    }
}
