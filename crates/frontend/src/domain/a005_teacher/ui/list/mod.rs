use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::data::SchoolData;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a005_teacher::aggregate::{COLLECTION_KEY, LIST_NAME};
use contracts::shared::repository::RecordRepository;
use contracts::shared::table::SortState;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TeacherList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let data = use_context::<SchoolData>().expect("SchoolData not found");
    let repo = data.teachers.clone();
    let revision = data.revision;
    let count = Signal::derive(move || {
        revision.track();
        repo.len()
    });

    let open_new = move |_: leptos::ev::MouseEvent| tabs_store.open_tab("a005_teacher_new", "Add Teacher");

    view! {
        <PageFrame page_id="a005_teacher--list" category=PAGE_CAT_LIST>
            <PageHeader title=LIST_NAME subtitle="Teaching staff directory">
                <Badge variant="primary".to_string()>{move || count.get()}</Badge>
                <Button appearance=ButtonAppearance::Primary on_click=open_new>
                    {icon("user-plus")}
                    " Add Teacher"
                </Button>
            </PageHeader>

            <div class="page__content">
                <DataTable
                    repository=data.teachers
                    collection_key=COLLECTION_KEY
                    initial_sort=SortState::by("full_name", true)
                    search_placeholder="Search by name, email, subject..."
                />
            </div>
        </PageFrame>
    }
}
