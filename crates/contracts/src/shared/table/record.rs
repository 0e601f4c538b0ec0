//! Traits a record type implements to be shown in a record explorer
use super::column::ColumnDef;
use std::cmp::Ordering;

/// Records whose fields can be read as text
pub trait Searchable {
    /// Text value of a field (search, filters, export)
    fn get_field_value(&self, field: &str) -> Option<String>;

    /// Whether any of `fields` contains `needle_lower`, case-insensitive.
    /// `needle_lower` must already be lowercased.
    fn matches_in_fields(&self, needle_lower: &str, fields: &[&str]) -> bool {
        fields.iter().any(|field| {
            self.get_field_value(field)
                .map(|v| v.to_lowercase().contains(needle_lower))
                .unwrap_or(false)
        })
    }
}

/// Records orderable by any column
pub trait Sortable {
    /// Compare two records by `field`
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// A record that can back a table: identity plus column layout.
pub trait TableRecord: Searchable + Sortable + Clone {
    const COLUMNS: &'static [ColumnDef];

    /// Unique within one store
    fn row_id(&self) -> &str;

    /// Badge variant for status cells ("success", "warning", "error", ...)
    fn badge_variant(&self, _field: &str) -> Option<&'static str> {
        None
    }

    /// Free-text match over every searchable column
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let fields: Vec<&str> = Self::COLUMNS
            .iter()
            .filter(|c| c.searchable)
            .map(|c| c.key)
            .collect();
        self.matches_in_fields(&needle, &fields)
    }
}

/// Case-insensitive text comparison
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Compare optional values, `None` sorts last
pub fn compare_opt<T: PartialOrd>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compare floats treating NaN as equal
pub fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
