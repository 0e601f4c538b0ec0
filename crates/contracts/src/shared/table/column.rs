//! Column descriptors shared by every record explorer

/// How a column's value is presented and compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
    Date,
    /// Enumerated status, rendered as a badge and filterable by value set
    Status,
}

/// Static description of one table column.
///
/// All fields are `'static` so that each record type can expose its columns
/// as a `const` slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Field key passed to `Searchable::get_field_value` / `Sortable::compare_by_field`
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
    pub sortable: bool,
    /// Participates in the free-text query
    pub searchable: bool,
    /// Can be toggled off in the "Columns" menu
    pub hideable: bool,
    /// Right-aligned in the UI (numeric columns)
    pub align_right: bool,
}

impl ColumnDef {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: ColumnKind::Text,
            sortable: true,
            searchable: true,
            hideable: true,
            align_right: false,
        }
    }

    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: ColumnKind::Number,
            sortable: true,
            searchable: false,
            hideable: true,
            align_right: true,
        }
    }

    pub const fn date(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: ColumnKind::Date,
            sortable: true,
            searchable: false,
            hideable: true,
            align_right: false,
        }
    }

    pub const fn status(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: ColumnKind::Status,
            sortable: true,
            searchable: false,
            hideable: false,
            align_right: false,
        }
    }

    /// Column always shown (identifier / name columns)
    pub const fn pinned(mut self) -> Self {
        self.hideable = false;
        self
    }

    pub const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// Find a column by key
pub fn find_column<'a>(columns: &'a [ColumnDef], key: &str) -> Option<&'a ColumnDef> {
    columns.iter().find(|c| c.key == key)
}
