use std::collections::HashSet;

/// State of the header checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Selected row ids
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str, checked: bool) {
        if checked {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    /// "Select all" — only the ids of the visible page
    pub fn select_page<'a>(&mut self, page_ids: impl IntoIterator<Item = &'a str>) {
        for id in page_ids {
            self.ids.insert(id.to_string());
        }
    }

    pub fn deselect_page<'a>(&mut self, page_ids: impl IntoIterator<Item = &'a str>) {
        for id in page_ids {
            self.ids.remove(id);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of selected ids among `ids`
    pub fn count_within<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> usize {
        ids.into_iter().filter(|id| self.ids.contains(*id)).count()
    }

    /// Drop ids no longer present in the store
    pub fn retain_existing<'a>(&mut self, existing: impl IntoIterator<Item = &'a str>) {
        let existing: HashSet<&str> = existing.into_iter().collect();
        self.ids.retain(|id| existing.contains(id.as_str()));
    }

    /// Take the selected ids, leaving the selection empty
    pub fn take(&mut self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.drain().collect();
        ids.sort();
        ids
    }

    pub fn header_state<'a>(&self, page_ids: impl IntoIterator<Item = &'a str>) -> HeaderCheckState {
        let mut total = 0;
        let mut selected = 0;
        for id in page_ids {
            total += 1;
            if self.ids.contains(id) {
                selected += 1;
            }
        }
        if total == 0 || selected == 0 {
            HeaderCheckState::Unchecked
        } else if selected == total {
            HeaderCheckState::Checked
        } else {
            HeaderCheckState::Indeterminate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_page_then_deselect_one() {
        let page = ["a", "b", "c"];
        let mut s = Selection::new();
        s.select_page(page);
        assert_eq!(s.header_state(page), HeaderCheckState::Checked);
        s.toggle("b", false);
        assert_eq!(s.len(), 2);
        assert_eq!(s.header_state(page), HeaderCheckState::Indeterminate);
    }

    #[test]
    fn test_take_clears() {
        let mut s = Selection::new();
        s.toggle("y", true);
        s.toggle("x", true);
        assert_eq!(s.take(), vec!["x".to_string(), "y".to_string()]);
        assert!(s.is_empty());
    }

    #[test]
    fn test_retain_existing() {
        let mut s = Selection::new();
        s.select_page(["a", "b"]);
        s.retain_existing(["b", "c"]);
        assert!(!s.contains("a"));
        assert!(s.contains("b"));
    }
}
