use crate::domain::common::{format_date, RecordStatus};
use crate::shared::forms::{FieldFormat, FormErrors, FormModel, ValidationRules};
use crate::shared::table::{compare_text, ColumnDef, Searchable, Sortable, TableRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const COLLECTION_KEY: &str = "a001_academic_year";
pub const LIST_NAME: &str = "Academic Years";
pub const ELEMENT_NAME: &str = "Academic Year";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcademicYearStatus {
    Active,
    Inactive,
    Pending,
    Planned,
}

impl RecordStatus for AcademicYearStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Inactive, Self::Pending, Self::Planned];
    const LABELS: &'static [&'static str] = &["Active", "Inactive", "Pending", "Planned"];

    fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
            Self::Planned => "Planned",
        }
    }

    fn badge_variant(&self) -> &'static str {
        match self {
            Self::Active => "success",
            Self::Inactive => "neutral",
            Self::Pending => "warning",
            Self::Planned => "primary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicYear {
    pub id: String,
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub department: String,
    pub status: AcademicYearStatus,
}

impl Searchable for AcademicYear {
    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.clone()),
            "label" => Some(self.label.clone()),
            "start_date" => Some(format_date(self.start_date)),
            "end_date" => Some(format_date(self.end_date)),
            "description" => Some(self.description.clone()),
            "department" => Some(self.department.clone()),
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }
}

impl Sortable for AcademicYear {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "label" => compare_text(&self.label, &other.label),
            "start_date" => self.start_date.cmp(&other.start_date),
            "end_date" => self.end_date.cmp(&other.end_date),
            "description" => compare_text(&self.description, &other.description),
            "department" => compare_text(&self.department, &other.department),
            "status" => self.status.label().cmp(other.status.label()),
            _ => Ordering::Equal,
        }
    }
}

impl TableRecord for AcademicYear {
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::text("id", "ID").pinned(),
        ColumnDef::text("label", "Academic Year").pinned(),
        ColumnDef::date("start_date", "Start Date"),
        ColumnDef::date("end_date", "End Date"),
        ColumnDef::text("description", "Description").unsortable(),
        ColumnDef::text("department", "Department"),
        ColumnDef::status("status", "Status"),
    ];

    fn row_id(&self) -> &str {
        &self.id
    }

    fn badge_variant(&self, field: &str) -> Option<&'static str> {
        (field == "status").then(|| self.status.badge_variant())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Form values of the "Add Academic Year" dialog
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AcademicYearDto {
    pub label: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub department: String,
    pub status: String,
}

impl FormModel for AcademicYearDto {
    fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check_string(
            "label",
            "Academic year",
            &self.label,
            &ValidationRules::required().min_length(4).max_length(20),
        );
        errors.check_string(
            "start_date",
            "Start date",
            &self.start_date,
            &ValidationRules::required().format(FieldFormat::Date),
        );
        errors.check_string(
            "end_date",
            "End date",
            &self.end_date,
            &ValidationRules::required().format(FieldFormat::Date),
        );
        errors.check_string(
            "description",
            "Description",
            &self.description,
            &ValidationRules::none().max_length(200),
        );
        errors.check_string(
            "department",
            "Department",
            &self.department,
            &ValidationRules::required().min_length(2),
        );
        errors.check_string(
            "status",
            "Status",
            &self.status,
            &ValidationRules::required().one_of(AcademicYearStatus::LABELS),
        );
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> AcademicYearDto {
        AcademicYearDto {
            label: "2025-2026".into(),
            start_date: "2025-06-01".into(),
            end_date: "2026-03-31".into(),
            description: String::new(),
            department: "Primary".into(),
            status: "Planned".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_status_must_be_known() {
        let dto = AcademicYearDto {
            status: "Archived".into(),
            ..valid()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("status"), Some("Please select a status"));
    }

    #[test]
    fn test_status_labels_round_trip() {
        for status in AcademicYearStatus::ALL {
            assert_eq!(AcademicYearStatus::from_label(status.label()), Some(*status));
        }
    }
}
