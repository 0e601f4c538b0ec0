use super::*;
use proptest::prelude::*;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: String,
    name: String,
    status: &'static str,
    score: u8,
}

const STATUSES: [&str; 3] = ["Active", "Inactive", "Pending"];

impl Searchable for Item {
    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "status" => Some(self.status.to_string()),
            "score" => Some(self.score.to_string()),
            _ => None,
        }
    }
}

impl Sortable for Item {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => compare_text(&self.name, &other.name),
            "status" => self.status.cmp(other.status),
            "score" => self.score.cmp(&other.score),
            _ => Ordering::Equal,
        }
    }
}

impl TableRecord for Item {
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::text("id", "Id").pinned(),
        ColumnDef::text("name", "Name"),
        ColumnDef::status("status", "Status"),
        ColumnDef::number("score", "Score"),
    ];

    fn row_id(&self) -> &str {
        &self.id
    }
}

fn items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item {
            id: format!("ID{:03}", i),
            name: format!("Item {}", i),
            status: STATUSES[i % 3],
            score: (i % 7) as u8,
        })
        .collect()
}

#[test]
fn test_default_view_is_first_ten_in_store_order() {
    let records = items(23);
    let state = TableState::default();
    let view = state.derive_view(&records);
    assert_eq!(view.rows.len(), 10);
    assert_eq!(view.rows[0].id, "ID000");
    assert_eq!(view.total_matches, 23);
    assert_eq!(view.page_count, 3);
    assert_eq!(view.page_label(), "Page 1 of 3");
}

#[test]
fn test_query_matches_searchable_columns_only() {
    let records = items(12);
    let mut state = TableState::default();
    state.set_query("item 1");
    let view = state.derive_view(&records);
    let ids: Vec<_> = view.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["ID001", "ID010", "ID011"]);

    // "Pending" lives only in the status column, which is not searchable
    state.set_query("pending");
    assert!(state.derive_view(&records).is_empty());
}

#[test]
fn test_hidden_column_leaves_search() {
    let records = items(3);
    let mut state = TableState::default();
    let name_col = *find_column(Item::COLUMNS, "name").unwrap();
    state.toggle_column(&name_col);
    state.set_query("item");
    assert_eq!(state.derive_view(&records).total_matches, 0);
    assert_eq!(state.visible_columns::<Item>().len(), 3);
}

#[test]
fn test_pinned_column_cannot_be_hidden() {
    let mut state = TableState::default();
    let id_col = Item::COLUMNS[0];
    state.toggle_column(&id_col);
    assert!(state.is_column_visible("id"));
}

#[test]
fn test_empty_result_has_no_rows_and_valid_page() {
    let records = items(5);
    let mut state = TableState::default();
    state.pagination.page_index = 3;
    state.set_query("zzz");
    let view = state.derive_view(&records);
    assert!(view.is_empty());
    assert_eq!(view.page_index, 0);
    assert_eq!(view.page_label(), "Page 1 of 1");
}

#[test]
fn test_page_index_clamped_when_filter_shrinks_set() {
    let records = items(45);
    let mut state = TableState::default();
    state.pagination.go_to(4, records.len());
    assert_eq!(state.pagination.page_index, 4);

    state.filters.set_one_of("status", ["Active"]);
    state.clamp_to(&records);
    // 15 active rows → 2 pages
    assert_eq!(state.pagination.page_index, 1);
    assert_eq!(state.derive_view(&records).rows.len(), 5);
}

#[test]
fn test_select_all_then_deselect_one() {
    let records = items(25);
    let mut state = TableState::default();
    let view = state.derive_view(&records);
    state.select_page(&view.rows);
    assert_eq!(state.header_state(&view.rows), HeaderCheckState::Checked);

    state.selection.toggle(&view.rows[3].id, false);
    assert_eq!(state.selection.len(), view.page_size - 1);
    assert_eq!(state.selection_summary(&records), (9, 25));
}

#[test]
fn test_select_all_only_touches_visible_page() {
    let records = items(25);
    let mut state = TableState::default();
    state.pagination.go_to(2, records.len());
    let view = state.derive_view(&records);
    state.select_page(&view.rows);
    assert_eq!(state.selection.len(), 5);
    assert!(state.selection.contains("ID020"));
    assert!(!state.selection.contains("ID000"));
}

#[test]
fn test_selection_summary_ignores_filtered_out_rows() {
    let records = items(6);
    let mut state = TableState::default();
    state.selection.toggle("ID000", true);
    state.selection.toggle("ID001", true);
    state.filters.set_one_of("status", ["Active"]);
    // ID000 Active, ID001 Inactive
    assert_eq!(state.selection_summary(&records), (1, 2));
    assert_eq!(selection_label(1, 2), "1 of 2 row(s) selected.");
}

#[test]
fn test_reset_keeps_sort_but_clears_filters() {
    let records = items(30);
    let mut state = TableState::default().with_sort(SortState::by("name", true));
    state.set_query("item 2");
    state.set_page_size(20);
    state.reset();
    assert_eq!(state.pagination.page_size, 10);
    assert_eq!(state.derive_view(&records).total_matches, 30);
    assert_eq!(state.sort, SortState::by("name", true));
}

#[test]
fn test_column_contains_filter() {
    let records = items(25);
    let mut state = TableState::default();
    state.pagination.go_to(2, records.len());
    state.set_contains_filter("name", "item 2");
    assert_eq!(state.pagination.page_index, 0);
    assert!(state.is_filtered());

    let view = state.derive_view(&records);
    let ids: Vec<_> = view.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["ID002", "ID020", "ID021", "ID022", "ID023", "ID024"]);
    assert_eq!(view.total_records, 25);
    assert!(view.is_narrowed());

    state.move_contains_filter("name", "id");
    assert_eq!(state.filters.contains_text("name"), None);
    assert_eq!(state.filters.contains_text("id"), Some("item 2"));
    assert!(state.derive_view(&records).is_empty());

    state.set_contains_filter("id", "  ");
    assert!(!state.is_filtered());
    assert!(!state.derive_view(&records).is_narrowed());
}

#[test]
fn test_contains_filter_cleared_with_reset_button() {
    let records = items(10);
    let mut state = TableState::default();
    state.set_contains_filter("name", "9");
    state.toggle_filter_value("status", "Active");
    assert_eq!(state.derive_view(&records).total_matches, 1);
    state.clear_filters();
    assert_eq!(state.derive_view(&records).total_matches, 10);
}

#[test]
fn test_view_navigation_flags() {
    let records = items(23);
    let mut state = TableState::default();
    let first = state.derive_view(&records);
    assert!(!first.can_previous());
    assert!(first.can_next());
    assert_eq!(first.last_page(), 2);

    state.pagination.go_to(2, records.len());
    let last = state.derive_view(&records);
    assert!(last.can_previous());
    assert!(!last.can_next());
    assert_eq!(last.page_label(), "Page 3 of 3");

    state.set_query("zzz");
    let empty = state.derive_view(&records);
    assert!(!empty.can_previous());
    assert!(!empty.can_next());
    assert_eq!(empty.last_page(), 0);
}

#[test]
fn test_retain_visible_selection_drops_hidden_ids() {
    let records = items(6);
    let mut state = TableState::default();
    state.selection.toggle("ID000", true);
    state.selection.toggle("ID001", true);
    state.filters.set_one_of("status", ["Active"]);
    state.retain_visible_selection(&records);
    assert!(state.selection.contains("ID000"));
    assert!(!state.selection.contains("ID001"));
}

fn arb_items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((0usize..3, 0u8..5, "[a-c]{1,3}"), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (s, score, name))| Item {
                id: format!("R{}", i),
                name,
                status: STATUSES[s],
                score,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_matching_is_filtered_subset_sorted_stably(
        records in arb_items(),
        status in 0usize..3,
        ascending in any::<bool>(),
    ) {
        let mut state = TableState::default().with_sort(SortState::by("score", ascending));
        state.filters.set_one_of("status", [STATUSES[status]]);

        let got = state.matching(&records);

        let mut expected: Vec<(usize, Item)> = records
            .iter()
            .cloned()
            .enumerate()
            .filter(|(_, r)| r.status == STATUSES[status])
            .collect();
        // stable: score, then original position
        expected.sort_by(|(ia, a), (ib, b)| {
            let by_score = if ascending { a.score.cmp(&b.score) } else { b.score.cmp(&a.score) };
            by_score.then(ia.cmp(ib))
        });
        let expected: Vec<Item> = expected.into_iter().map(|(_, r)| r).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_page_size_renders_min_of_size_and_remaining(
        records in arb_items(),
        size_idx in 0usize..5,
        page in 0usize..10,
    ) {
        let mut state = TableState::default();
        state.set_page_size(PAGE_SIZE_OPTIONS[size_idx]);
        state.pagination.go_to(page, records.len());
        let view = state.derive_view(&records);

        let n = PAGE_SIZE_OPTIONS[size_idx];
        let remaining = records.len().saturating_sub(view.page_index * n);
        prop_assert_eq!(view.rows.len(), n.min(remaining));
        prop_assert!(view.page_index <= view.page_count.saturating_sub(1));
    }
}
