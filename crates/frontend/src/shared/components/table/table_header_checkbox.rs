//! "Select page" checkbox in the table header

use contracts::shared::table::HeaderCheckState;
use leptos::prelude::*;
use thaw::*;

/// Tri-state header checkbox.
///
/// `on_change(true)` selects the visible page, `on_change(false)` clears it.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    state: Signal<HeaderCheckState>,
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // `indeterminate` exists only as a DOM property
    Effect::new(move |_| {
        let current = state.get();
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(current == HeaderCheckState::Indeterminate);
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                aria-label="Select page"
                prop:checked=move || state.get() == HeaderCheckState::Checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
