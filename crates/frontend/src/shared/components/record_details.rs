//! Read-only detail view opened by a row's View/Edit action

use crate::shared::components::ui::Badge;
use crate::shared::data::{Repo, SchoolData};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::shared::table::{ColumnKind, TableRecord};
use leptos::prelude::*;
use thaw::*;

/// Every column of one record as label / value pairs.
///
/// Shows a notice instead when the record was deleted after the tab opened.
#[component]
pub fn RecordDetails<T>(
    repository: Repo<T>,
    id: String,
    on_close: Callback<()>,
) -> impl IntoView
where
    T: TableRecord + Send + Sync + 'static,
{
    let revision = use_context::<SchoolData>()
        .expect("SchoolData not found")
        .revision;
    let repo = StoredValue::new(repository);
    let id = StoredValue::new(id);

    let record = Signal::derive(move || {
        revision.track();
        id.with_value(|id| repo.with_value(|r| r.get(id)))
    });

    view! {
        <PageFrame page_id="record--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || id.get_value()}</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || match record.get() {
                    None => view! {
                        <div class="alert alert--warning">
                            {format!("Record {} no longer exists.", id.get_value())}
                        </div>
                    }
                    .into_any(),
                    Some(record) => view! {
                        <dl class="details-grid">
                            {T::COLUMNS.iter().map(|column| {
                                let value = record.get_field_value(column.key).unwrap_or_default();
                                let value_view = if column.kind == ColumnKind::Status {
                                    let variant = record.badge_variant(column.key).unwrap_or("neutral");
                                    view! { <Badge variant=variant.to_string()>{value}</Badge> }.into_any()
                                } else {
                                    view! { <span>{value}</span> }.into_any()
                                };
                                view! {
                                    <dt class="details-grid__label">{column.label}</dt>
                                    <dd class="details-grid__value">{value_view}</dd>
                                }
                            }).collect_view()}
                        </dl>
                    }
                    .into_any(),
                }}
            </div>
        </PageFrame>
    }
}
