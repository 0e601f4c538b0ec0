//! DataTable - the record explorer shared by every listing page.
//!
//! Owns one `TableState` and reads rows from the repository it is given.
//! Everything shown (page slice, counters, header checkbox) is derived from
//! the state and the repository on each change; `SchoolData::revision` is
//! tracked so deletions made here re-render every view of the same store.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_title_for_key;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{
    SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
};
use crate::shared::components::ui::Badge;
use crate::shared::config::use_dashboard_config;
use crate::shared::data::{Repo, SchoolData};
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::shared::actions::{
    delete_selected, dispatch_row_action, export_matching, ActionOutcome, RowAction,
};
use contracts::shared::table::{
    facet_counts, selection_label, ColumnDef, ColumnKind, SortState, TableRecord, TableState,
};
use leptos::prelude::*;
use thaw::*;

/// Which toolbar dropdown is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Menu {
    Closed,
    Facet(&'static str),
    Columns,
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn render_cell<T: TableRecord>(row: &T, column: ColumnDef, query: Option<&str>) -> AnyView {
    let value = row.get_field_value(column.key).unwrap_or_default();
    let content = match column.kind {
        ColumnKind::Status => {
            let variant = row.badge_variant(column.key).unwrap_or("neutral");
            view! { <Badge variant=variant.to_string()>{value}</Badge> }.into_any()
        }
        _ if column.searchable => highlight_matches(&value, query),
        _ => view! { <span>{value}</span> }.into_any(),
    };
    let class = if column.align_right {
        "table__cell table__cell--right"
    } else {
        "table__cell"
    };

    view! {
        <TableCell class=class>
            <TableCellLayout truncate=true>{content}</TableCellLayout>
        </TableCell>
    }
    .into_any()
}

#[component]
pub fn DataTable<T>(
    repository: Repo<T>,
    /// Collection key, e.g. `"a005_teacher"` (detail tabs, export filename)
    collection_key: &'static str,
    /// Sort applied on load and after Refresh
    #[prop(optional)]
    initial_sort: Option<SortState>,
    #[prop(optional, into)]
    search_placeholder: String,
) -> impl IntoView
where
    T: TableRecord + PartialEq + Send + Sync + 'static,
{
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let revision = use_context::<SchoolData>()
        .expect("SchoolData not found")
        .revision;
    let config = use_dashboard_config();
    let page_size_options = config.table.page_size_options.clone();

    let initial_sort = StoredValue::new(initial_sort.unwrap_or_default());
    let state = RwSignal::new(
        TableState::from_config(&config.table).with_sort(initial_sort.get_value()),
    );
    let repo = StoredValue::new(repository);
    let error = RwSignal::new(None::<String>);
    let open_menu = RwSignal::new(Menu::Closed);

    let records = Memo::new(move |_| {
        revision.track();
        repo.with_value(|r| r.list())
    });
    let table_view = Memo::new(move |_| records.with(|r| state.with(|s| s.derive_view(r))));
    let columns = Signal::derive(move || state.with(|s| s.visible_columns::<T>()));
    let query = Signal::derive(move || state.with(|s| s.effective_query()));
    // only rows of the filtered view count; hidden ids are never deleted
    let selected_visible =
        Memo::new(move |_| records.with(|r| state.with(|s| s.selection_summary(r).0)));
    let has_selection = Signal::derive(move || selected_visible.get() > 0);

    let facet_columns: Vec<ColumnDef> = T::COLUMNS
        .iter()
        .filter(|c| c.kind == ColumnKind::Status)
        .copied()
        .collect();
    let text_columns: Vec<ColumnDef> = T::COLUMNS
        .iter()
        .filter(|c| c.kind == ColumnKind::Text)
        .copied()
        .collect();
    let contains_field = RwSignal::new(text_columns.first().map(|c| c.key));

    let toggle_menu = move |menu: Menu| {
        open_menu.update(|m| *m = if *m == menu { Menu::Closed } else { menu });
    };

    // ── Row actions ─────────────────────────────────────────────────────
    let run_action = Callback::new(move |(action, record): (RowAction, T)| {
        if action == RowAction::Delete
            && !confirm(&format!("Delete {}?", record.row_id()))
        {
            return;
        }
        let repository = repo.get_value();
        let mut outcome = None;
        state.update(|s| {
            outcome = Some(dispatch_row_action(
                action,
                &record,
                collection_key,
                s,
                repository.as_ref(),
            ))
        });
        match outcome {
            Some(Ok(ActionOutcome::OpenTab { key, .. })) => {
                tabs_store.open_tab(&key, &tab_title_for_key(&key));
            }
            Some(Ok(ActionOutcome::Removed(_))) => revision.update(|r| *r += 1),
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => {}
        }
    });

    // ── Table actions ───────────────────────────────────────────────────
    let on_delete_selected = move |_: leptos::ev::MouseEvent| {
        let count = selected_visible.get_untracked();
        if count == 0 || !confirm(&format!("Delete {} selected record(s)?", count)) {
            return;
        }
        let repository = repo.get_value();
        state.update(|s| {
            delete_selected(s, repository.as_ref());
        });
        revision.update(|r| *r += 1);
    };

    let on_export = move |_: leptos::ev::MouseEvent| {
        let result = records
            .with_untracked(|r| state.with_untracked(|s| export_matching(s, r)))
            .map_err(|e| e.to_string())
            .and_then(|csv| download_csv(collection_key, &csv));
        match result {
            Ok(filename) => {
                log::info!("{}: exported {}", collection_key, filename);
                error.set(None);
            }
            Err(e) => {
                log::warn!("{}: export failed: {}", collection_key, e);
                error.set(Some(e));
            }
        }
    };

    let on_refresh = move |_: leptos::ev::MouseEvent| {
        log::info!("{}: refresh", collection_key);
        state.update(|s| {
            s.reset();
            s.sort = initial_sort.get_value();
        });
        open_menu.set(Menu::Closed);
        error.set(None);
        revision.update(|r| *r += 1);
    };

    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));

    view! {
        <div class="data-table">
            // ── Toolbar ─────────────────────────────────────────────────
            <div class="data-table__toolbar">
                <div class="data-table__toolbar-left">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.query.clone()))
                        on_change=Callback::new(move |q: String| state.update(|s| s.set_query(&q)))
                        placeholder=search_placeholder
                    />

                    {facet_columns.into_iter().map(|column| {
                        let field = column.key;
                        let selected_count = move || state.with(|s| s.filters.selected_values(field).len());
                        view! {
                            <div class="dropdown">
                                <button
                                    class="button button--outline"
                                    on:click=move |_| toggle_menu(Menu::Facet(field))
                                >
                                    {icon("filter")}
                                    {column.label}
                                    {move || (selected_count() > 0).then(|| view! {
                                        <span class="filter-panel__badge">{selected_count()}</span>
                                    })}
                                </button>
                                <Show when=move || open_menu.get() == Menu::Facet(field)>
                                    <div class="dropdown__menu">
                                        {move || records.with(|r| facet_counts(r, field)).into_iter().map(|(value, count)| {
                                            let value_for_checked = value.clone();
                                            let value_for_toggle = value.clone();
                                            view! {
                                                <label class="dropdown__item">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || state.with(|s| {
                                                            s.filters.selected_values(field).contains(&value_for_checked)
                                                        })
                                                        on:change=move |_| state.update(|s| {
                                                            s.toggle_filter_value(field, &value_for_toggle)
                                                        })
                                                    />
                                                    <span class="dropdown__item-label">{value}</span>
                                                    <span class="dropdown__item-count">{count}</span>
                                                </label>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }
                    }).collect_view()}

                    {(!text_columns.is_empty()).then(|| view! {
                        <div class="column-filter">
                            <select
                                class="column-filter__field"
                                title="Filter column"
                                on:change=move |ev| {
                                    let key = event_target_value(&ev);
                                    let Some(to) = T::COLUMNS.iter().find(|c| c.key == key).map(|c| c.key) else {
                                        return;
                                    };
                                    if let Some(from) = contains_field.get_untracked() {
                                        state.update(|s| s.move_contains_filter(from, to));
                                    }
                                    contains_field.set(Some(to));
                                }
                            >
                                {text_columns.iter().map(|column| view! {
                                    <option value=column.key>{column.label}</option>
                                }).collect_view()}
                            </select>
                            <input
                                type="text"
                                class="column-filter__input"
                                placeholder="Contains..."
                                prop:value=move || {
                                    contains_field.get()
                                        .and_then(|field| state.with(|s| {
                                            s.filters.contains_text(field).map(str::to_string)
                                        }))
                                        .unwrap_or_default()
                                }
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    if let Some(field) = contains_field.get_untracked() {
                                        state.update(|s| s.set_contains_filter(field, &text));
                                    }
                                }
                            />
                        </div>
                    })}

                    <Show when=move || state.with(|s| s.is_filtered())>
                        <button
                            class="button button--ghost"
                            on:click=move |_| state.update(|s| s.clear_filters())
                        >
                            "Reset"
                            {icon("x")}
                        </button>
                    </Show>
                </div>

                <div class="data-table__toolbar-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=on_delete_selected
                        disabled=Signal::derive(move || !has_selection.get())
                    >
                        {icon("delete")}
                        {move || format!(" Delete ({})", selected_visible.get())}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_export>
                        {icon("download")}
                        " Export"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_refresh>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <div class="dropdown">
                        <button class="button button--outline" on:click=move |_| toggle_menu(Menu::Columns)>
                            {icon("columns")}
                            "View"
                        </button>
                        <Show when=move || open_menu.get() == Menu::Columns>
                            <div class="dropdown__menu dropdown__menu--right">
                                <div class="dropdown__title">"Toggle columns"</div>
                                {T::COLUMNS.iter().filter(|c| c.hideable).map(|&column| {
                                    view! {
                                        <label class="dropdown__item">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || state.with(|s| s.is_column_visible(column.key))
                                                on:change=move |_| state.update(|s| s.toggle_column(&column))
                                            />
                                            <span class="dropdown__item-label">{column.label}</span>
                                        </label>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            // ── Table ───────────────────────────────────────────────────
            <div class="table-wrapper">
                <Table attr:id=format!("{}-table", collection_key) attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                state=Signal::derive(move || {
                                    table_view.with(|v| state.with(|s| s.header_state(&v.rows)))
                                })
                                on_change=Callback::new(move |check_all: bool| {
                                    let rows = table_view.with_untracked(|v| v.rows.clone());
                                    state.update(|s| {
                                        if check_all {
                                            s.select_page(&rows)
                                        } else {
                                            s.deselect_page(&rows)
                                        }
                                    });
                                })
                            />
                            {move || columns.get().into_iter().map(|column| view! {
                                <SortableHeaderCell
                                    column=column
                                    sort=Signal::derive(move || state.with(|s| s.sort.clone()))
                                    on_sort=on_sort
                                />
                            }).collect_view()}
                            <TableHeaderCell resizable=false class="table__actions-header">
                                <span class="sr-only">"Actions"</span>
                            </TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <Show when=move || table_view.with(|v| v.is_empty())>
                            <TableRow>
                                <TableCell
                                    class="table__empty"
                                    attr:colspan=move || (columns.with(Vec::len) + 2).to_string()
                                >
                                    "No results."
                                </TableCell>
                            </TableRow>
                        </Show>
                        <For
                            each=move || table_view.get().rows
                            key=|row: &T| row.row_id().to_string()
                            children=move |row: T| {
                                let id = row.row_id().to_string();
                                let id_for_checked = id.clone();
                                let row_for_cells = row.clone();
                                let actions = [
                                    (RowAction::View, "eye"),
                                    (RowAction::Edit, "edit"),
                                    (RowAction::Delete, "delete"),
                                ];
                                view! {
                                    <TableRow attr:data-selected=move || {
                                        state.with(|s| s.selection.contains(&id)).to_string()
                                    }>
                                        <TableCellCheckbox
                                            item_id=row.row_id().to_string()
                                            checked=Signal::derive(move || {
                                                state.with(|s| s.selection.contains(&id_for_checked))
                                            })
                                            on_change=Callback::new(move |(id, checked): (String, bool)| {
                                                state.update(|s| s.selection.toggle(&id, checked))
                                            })
                                        />
                                        {move || {
                                            let q = query.get();
                                            columns.get().into_iter()
                                                .map(|column| render_cell(&row_for_cells, column, q.as_deref()))
                                                .collect_view()
                                        }}
                                        <TableCell class="table__actions">
                                            {actions.into_iter().map(|(action, icon_name)| {
                                                let record = row.clone();
                                                view! {
                                                    <button
                                                        class="table__action"
                                                        title=action.label()
                                                        on:click=move |_| run_action.run((action, record.clone()))
                                                    >
                                                        {icon(icon_name)}
                                                    </button>
                                                }
                                            }).collect_view()}
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>

            // ── Footer ──────────────────────────────────────────────────
            <div class="data-table__footer">
                <span class="data-table__selection">
                    {move || records.with(|r| state.with(|s| {
                        let (selected, total) = s.selection_summary(r);
                        selection_label(selected, total)
                    }))}
                    {move || table_view.with(|v| v.is_narrowed().then(|| {
                        format!(" Filtered from {} record(s).", v.total_records)
                    }))}
                </span>
                <PaginationControls
                    current_page=Signal::derive(move || table_view.with(|v| v.page_index))
                    last_page=Signal::derive(move || table_view.with(|v| v.last_page()))
                    can_previous=Signal::derive(move || table_view.with(|v| v.can_previous()))
                    can_next=Signal::derive(move || table_view.with(|v| v.can_next()))
                    label=Signal::derive(move || table_view.with(|v| v.page_label()))
                    page_size=Signal::derive(move || table_view.with(|v| v.page_size))
                    on_page_change=Callback::new(move |page: usize| {
                        let total = table_view.with_untracked(|v| v.total_matches);
                        state.update(|s| s.pagination.go_to(page, total));
                    })
                    on_page_size_change=Callback::new(move |size: usize| {
                        state.update(|s| s.set_page_size(size))
                    })
                    page_size_options=page_size_options
                />
            </div>
        </div>
    }
}
