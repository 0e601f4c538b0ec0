//! Sortable table header cell
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     column=column
//!     sort=Signal::derive(move || state.with(|s| s.sort.clone()))
//!     on_sort=Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)))
//! />
//! ```

use contracts::shared::table::{ColumnDef, SortState};
use leptos::prelude::*;
use thaw::*;

/// Header cell of one column.
///
/// Clicking cycles ascending → descending → unsorted; unsortable columns
/// render a plain label.
#[component]
pub fn SortableHeaderCell(
    column: ColumnDef,
    #[prop(into)]
    sort: Signal<SortState>,
    on_sort: Callback<String>,
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let field = column.key;
    let align_class = if column.align_right {
        "table__sortable-header table__sortable-header--right"
    } else {
        "table__sortable-header"
    };

    if !column.sortable {
        return view! {
            <TableHeaderCell resizable=false min_width=min_width>
                <div class=align_class>{column.label}</div>
            </TableHeaderCell>
        }
        .into_any();
    }

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class=align_class
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(field.to_string())
            >
                {column.label}
                <span
                    class="table__sort-indicator"
                    class:table__sort-indicator--active=move || sort.with(|s| s.is_sorted_by(field))
                >
                    {move || sort.with(|s| s.indicator(field))}
                </span>
            </div>
        </TableHeaderCell>
    }
    .into_any()
}
