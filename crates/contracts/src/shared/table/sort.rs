use super::record::Sortable;
use serde::{Deserialize, Serialize};

/// Active sort key and direction. `field == None` keeps store order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub field: Option<String>,
    pub ascending: bool,
}

impl SortState {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn by(field: &str, ascending: bool) -> Self {
        Self {
            field: Some(field.to_string()),
            ascending,
        }
    }

    pub fn is_sorted_by(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }

    /// Header click: ascending → descending → unsorted.
    /// Another column always starts ascending.
    pub fn toggle(&mut self, field: &str) {
        if !self.is_sorted_by(field) {
            self.field = Some(field.to_string());
            self.ascending = true;
        } else if self.ascending {
            self.ascending = false;
        } else {
            self.field = None;
            self.ascending = false;
        }
    }

    /// Stable sort of `items` in place
    pub fn apply<T: Sortable>(&self, items: &mut [T]) {
        let Some(field) = self.field.as_deref() else {
            return;
        };
        let ascending = self.ascending;
        items.sort_by(|a, b| {
            let cmp = a.compare_by_field(b, field);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });
    }

    /// Arrow appended to a header label
    pub fn indicator(&self, field: &str) -> &'static str {
        if self.is_sorted_by(field) {
            if self.ascending {
                " ▲"
            } else {
                " ▼"
            }
        } else {
            " ⇅"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, u32);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "n" => self.1.cmp(&other.1),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn test_toggle_cycles_through_three_states() {
        let mut s = SortState::none();
        s.toggle("n");
        assert_eq!(s, SortState::by("n", true));
        s.toggle("n");
        assert_eq!(s, SortState::by("n", false));
        s.toggle("n");
        assert_eq!(s.field, None);
    }

    #[test]
    fn test_other_column_starts_ascending() {
        let mut s = SortState::by("a", false);
        s.toggle("n");
        assert_eq!(s, SortState::by("n", true));
    }

    #[test]
    fn test_descending_keeps_insertion_order_for_ties() {
        let mut rows = vec![Row("a", 1), Row("b", 2), Row("c", 1), Row("d", 2)];
        SortState::by("n", false).apply(&mut rows);
        let names: Vec<_> = rows.iter().map(|r| r.0).collect();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_indicator() {
        let s = SortState::by("n", true);
        assert_eq!(s.indicator("n"), " ▲");
        assert_eq!(s.indicator("x"), " ⇅");
    }
}
