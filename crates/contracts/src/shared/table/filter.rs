//! Per-column filter predicates

use super::record::Searchable;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Predicate applied to the text value of one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterPredicate {
    /// Value equals one of the given values (faceted status filter)
    OneOf(BTreeSet<String>),
    /// Value contains the text, case-insensitive
    Contains(String),
}

impl FilterPredicate {
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            FilterPredicate::OneOf(values) => value.map(|v| values.contains(v)).unwrap_or(false),
            FilterPredicate::Contains(text) => {
                let needle = text.to_lowercase();
                value
                    .map(|v| v.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            }
        }
    }
}

/// Active column filters keyed by field. All must match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSet {
    predicates: BTreeMap<String, FilterPredicate>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict `field` to `values`; an empty set removes the filter
    pub fn set_one_of<I, S>(&mut self, field: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.predicates.remove(field);
        } else {
            self.predicates
                .insert(field.to_string(), FilterPredicate::OneOf(values));
        }
    }

    /// Toggle one value inside a `OneOf` filter
    pub fn toggle_value(&mut self, field: &str, value: &str) {
        let mut values = match self.predicates.get(field) {
            Some(FilterPredicate::OneOf(v)) => v.clone(),
            _ => BTreeSet::new(),
        };
        if !values.remove(value) {
            values.insert(value.to_string());
        }
        self.set_one_of(field, values);
    }

    /// Substring filter; blank text removes the filter
    pub fn set_contains(&mut self, field: &str, text: &str) {
        if text.trim().is_empty() {
            self.predicates.remove(field);
        } else {
            self.predicates.insert(
                field.to_string(),
                FilterPredicate::Contains(text.trim().to_string()),
            );
        }
    }

    pub fn get(&self, field: &str) -> Option<&FilterPredicate> {
        self.predicates.get(field)
    }

    /// Text of a `Contains` filter
    pub fn contains_text(&self, field: &str) -> Option<&str> {
        match self.predicates.get(field) {
            Some(FilterPredicate::Contains(text)) => Some(text),
            _ => None,
        }
    }

    /// Selected values of a `OneOf` filter (empty when none)
    pub fn selected_values(&self, field: &str) -> BTreeSet<String> {
        match self.predicates.get(field) {
            Some(FilterPredicate::OneOf(v)) => v.clone(),
            _ => BTreeSet::new(),
        }
    }

    pub fn clear(&mut self, field: &str) {
        self.predicates.remove(field);
    }

    pub fn clear_all(&mut self) {
        self.predicates.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        self.predicates.iter().all(|(field, predicate)| {
            let value = record.get_field_value(field);
            predicate.matches(value.as_deref())
        })
    }
}

/// Value → row count for a column, in first-seen order (faceted filter menu)
pub fn facet_counts<T: Searchable>(records: &[T], field: &str) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        let Some(value) = record.get_field_value(field) else {
            continue;
        };
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        status: &'static str,
        name: &'static str,
    }

    impl Searchable for Row {
        fn get_field_value(&self, field: &str) -> Option<String> {
            match field {
                "status" => Some(self.status.to_string()),
                "name" => Some(self.name.to_string()),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { status: "Active", name: "Alpha" },
            Row { status: "Pending", name: "Beta" },
            Row { status: "Active", name: "Gamma" },
        ]
    }

    #[test]
    fn test_one_of_and_contains_combine() {
        let mut f = FilterSet::new();
        f.set_one_of("status", ["Active"]);
        f.set_contains("name", "GAM");
        let matched: Vec<_> = rows().into_iter().filter(|r| f.matches(r)).map(|r| r.name).collect();
        assert_eq!(matched, vec!["Gamma"]);
    }

    #[test]
    fn test_toggle_value_removes_empty_filter() {
        let mut f = FilterSet::new();
        f.toggle_value("status", "Active");
        assert_eq!(f.len(), 1);
        f.toggle_value("status", "Active");
        assert!(f.is_empty());
    }

    #[test]
    fn test_unknown_field_never_matches() {
        let mut f = FilterSet::new();
        f.set_contains("missing", "x");
        assert!(!f.matches(&rows()[0]));
    }

    #[test]
    fn test_facet_counts() {
        let counts = facet_counts(&rows(), "status");
        assert_eq!(counts, vec![("Active".to_string(), 2), ("Pending".to_string(), 1)]);
    }
}
