use serde::{Deserialize, Serialize};
use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

/// Page index (0-based) and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// `ceil(total / page_size)`; zero for an empty set
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Largest valid page index for `total` rows
    pub fn last_index(&self, total: usize) -> usize {
        self.page_count(total).saturating_sub(1)
    }

    /// Clamp into `[0, ceil(total/page_size) - 1]`
    pub fn clamp(&mut self, total: usize) {
        self.page_index = self.page_index.min(self.last_index(total));
    }

    /// Change page size and go back to the first page
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 0;
    }

    pub fn go_to(&mut self, page_index: usize, total: usize) {
        self.page_index = page_index;
        self.clamp(total);
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, total: usize) -> bool {
        self.page_index + 1 < self.page_count(total)
    }

    /// Row range of the current page (after clamping to `total`)
    pub fn slice_range(&self, total: usize) -> Range<usize> {
        let index = self.page_index.min(self.last_index(total));
        let start = (index * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        let p = Pagination::new(10);
        assert_eq!(p.page_count(0), 0);
        assert_eq!(p.page_count(10), 1);
        assert_eq!(p.page_count(11), 2);
    }

    #[test]
    fn test_clamp_on_shrinking_set() {
        let mut p = Pagination::new(10);
        p.page_index = 4;
        p.clamp(25);
        assert_eq!(p.page_index, 2);
        p.clamp(0);
        assert_eq!(p.page_index, 0);
    }

    #[test]
    fn test_slice_range_last_page() {
        let mut p = Pagination::new(10);
        p.go_to(2, 23);
        assert_eq!(p.slice_range(23), 20..23);
        assert!(!p.can_next(23));
        assert!(p.can_previous());
    }

    #[test]
    fn test_set_page_size_resets_index() {
        let mut p = Pagination::new(10);
        p.go_to(3, 100);
        p.set_page_size(50);
        assert_eq!(p.page_index, 0);
        assert_eq!(p.slice_range(100), 0..50);
    }
}
