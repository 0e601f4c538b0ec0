//! Row-level and table-level actions of a record explorer.
//!
//! View/Edit only open a tab, Export renders CSV; the only mutation is
//! deletion from the session's repository.

use crate::shared::export::{rows_to_csv, ExportError};
use crate::shared::repository::{RecordRepository, RepositoryError};
use crate::shared::table::{TableRecord, TableState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Navigate to a tab by key
    OpenTab { key: String, title: String },
    Removed(usize),
}

/// Tab key of a record's detail view, e.g. `a003_room_type_details_RT-001`
pub fn detail_tab_key(collection_key: &str, id: &str) -> String {
    format!("{}_details_{}", collection_key, id)
}

pub fn dispatch_row_action<T: TableRecord>(
    action: RowAction,
    record: &T,
    collection_key: &str,
    state: &mut TableState,
    repository: &dyn RecordRepository<T>,
) -> Result<ActionOutcome, RepositoryError> {
    let id = record.row_id();
    log::info!("{} {} {}", collection_key, action.label(), id);

    match action {
        RowAction::View | RowAction::Edit => Ok(ActionOutcome::OpenTab {
            key: detail_tab_key(collection_key, id),
            title: id.to_string(),
        }),
        RowAction::Delete => {
            repository.remove(id)?;
            state.selection.toggle(id, false);
            state.clamp_to(&repository.list());
            Ok(ActionOutcome::Removed(1))
        }
    }
}

/// Remove the selected rows of the filtered view from the repository, clear
/// the selection and re-clamp the page. Selected rows hidden by the active
/// filters are deselected, not removed. Returns the number of removed rows.
pub fn delete_selected<T: TableRecord>(
    state: &mut TableState,
    repository: &dyn RecordRepository<T>,
) -> usize {
    state.retain_visible_selection(&repository.list());
    let ids = state.selection.take();
    if ids.is_empty() {
        return 0;
    }
    let removed = repository.remove_many(&ids);
    state.clamp_to(&repository.list());
    log::info!("deleted {} selected record(s)", removed);
    removed
}

/// CSV of every filtered + sorted row (all pages), visible columns only
pub fn export_matching<T: TableRecord>(state: &TableState, records: &[T]) -> Result<String, ExportError> {
    let rows = state.matching(records);
    let columns = state.visible_columns::<T>();
    log::info!("exporting {} row(s)", rows.len());
    rows_to_csv(&rows, &columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::RecordStatus;
    use crate::domain::a004_leave_request::aggregate::LeaveRequest;
    use crate::domain::a004_leave_request::fixtures::leave_requests;
    use crate::shared::repository::InMemoryRepository;
    use crate::shared::table::{selection_label, SortState};

    fn setup() -> (TableState, InMemoryRepository<LeaveRequest>) {
        (
            TableState::default(),
            InMemoryRepository::new(leave_requests()).unwrap(),
        )
    }

    #[test]
    fn test_delete_only_selected_row_updates_counter() {
        let (mut state, repo) = setup();
        let records = repo.list();
        let (_, total_before) = state.selection_summary(&records);
        let id = records[0].id.clone();
        state.selection.toggle(&id, true);

        assert_eq!(delete_selected(&mut state, &repo), 1);
        assert!(repo.get(&id).is_none());

        let (selected, total) = state.selection_summary(&repo.list());
        assert_eq!(total, total_before - 1);
        assert_eq!(selection_label(selected, total), format!("0 of {} row(s) selected.", total_before - 1));
    }

    #[test]
    fn test_delete_skips_rows_hidden_by_filter() {
        let (mut state, repo) = setup();
        let records = repo.list();
        let hidden = records[0].clone();
        let other_status = records
            .iter()
            .map(|r| r.status.label())
            .find(|label| *label != hidden.status.label())
            .expect("fixtures use more than one status");
        state.selection.toggle(&hidden.id, true);
        state.toggle_filter_value("status", other_status);

        let (selected, _) = state.selection_summary(&records);
        assert_eq!(selected, 0);
        assert_eq!(delete_selected(&mut state, &repo), 0);
        assert!(repo.get(&hidden.id).is_some());
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_delete_removes_only_visible_part_of_selection() {
        let (mut state, repo) = setup();
        let records = repo.list();
        let hidden = records[0].clone();
        let visible = records
            .iter()
            .find(|r| r.status != hidden.status)
            .expect("fixtures use more than one status")
            .clone();
        state.selection.toggle(&hidden.id, true);
        state.selection.toggle(&visible.id, true);
        state.toggle_filter_value("status", visible.status.label());

        assert_eq!(state.selection_summary(&records).0, 1);
        assert_eq!(delete_selected(&mut state, &repo), 1);
        assert!(repo.get(&visible.id).is_none());
        assert!(repo.get(&hidden.id).is_some());
    }

    #[test]
    fn test_delete_selected_clamps_page() {
        let (mut state, repo) = setup();
        state.set_page_size(10);
        let records = repo.list();
        state.pagination.go_to(1, records.len());
        let page = state.derive_view(&records).rows;
        state.select_page(&page);

        delete_selected(&mut state, &repo);
        let view = state.derive_view(&repo.list());
        assert_eq!(view.page_index, 0);
        assert_eq!(view.page_count, 1);
    }

    #[test]
    fn test_view_opens_detail_tab() {
        let (mut state, repo) = setup();
        let record = repo.list()[0].clone();
        let outcome = dispatch_row_action(RowAction::View, &record, "a004_leave_request", &mut state, &repo)
            .unwrap();
        assert_eq!(
            outcome,
            ActionOutcome::OpenTab {
                key: format!("a004_leave_request_details_{}", record.id),
                title: record.id.clone(),
            }
        );
        assert_eq!(repo.len(), leave_requests().len());
    }

    #[test]
    fn test_row_delete_twice_is_not_found() {
        let (mut state, repo) = setup();
        let record = repo.list()[0].clone();
        state.selection.toggle(&record.id, true);
        dispatch_row_action(RowAction::Delete, &record, "a004_leave_request", &mut state, &repo).unwrap();
        assert!(!state.selection.contains(&record.id));
        let err = dispatch_row_action(RowAction::Delete, &record, "a004_leave_request", &mut state, &repo)
            .unwrap_err();
        assert_eq!(err, RepositoryError::NotFound(record.id));
    }

    #[test]
    fn test_export_uses_filtered_sorted_rows_and_visible_columns() {
        let (mut state, repo) = setup();
        state = state.with_sort(SortState::by("employee_name", true));
        state.toggle_filter_value("status", "Pending");
        if let Some(reason) = LeaveRequest::COLUMNS.iter().find(|c| c.key == "reason") {
            state.toggle_column(reason);
        }

        let records = repo.list();
        let csv = export_matching(&state, &records).unwrap();
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        let pending = records.iter().filter(|r| r.status.label() == "Pending").count();
        assert_eq!(lines.len(), pending + 1);
        assert!(!lines[0].contains("Reason"));
        assert!(lines[0].starts_with("Employee;"));
    }
}
