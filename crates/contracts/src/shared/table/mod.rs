//! Generic table state shared by every record explorer page.
//!
//! A page owns a `TableState` and a record store; `TableState::derive_view`
//! produces the filtered, sorted and paginated slice that the `DataTable`
//! component renders.

pub mod column;
pub mod filter;
pub mod pagination;
pub mod record;
pub mod selection;
pub mod sort;
pub mod state;

#[cfg(test)]
mod tests;

pub use column::{find_column, ColumnDef, ColumnKind};
pub use filter::{facet_counts, FilterPredicate, FilterSet};
pub use pagination::{Pagination, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use record::{compare_f64, compare_opt, compare_text, Searchable, Sortable, TableRecord};
pub use selection::{HeaderCheckState, Selection};
pub use sort::SortState;
pub use state::{selection_label, TableState, TableView};
