use crate::domain::common::{format_date, format_opt_date, RecordStatus};
use crate::shared::forms::{
    inclusive_day_count, parse_date_input, FieldFormat, FormErrors, FormModel, ValidationRules,
};
use crate::shared::table::{compare_opt, compare_text, ColumnDef, Searchable, Sortable, TableRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const COLLECTION_KEY: &str = "a004_leave_request";
pub const LIST_NAME: &str = "Leave Requests";
pub const ELEMENT_NAME: &str = "Leave Request";

pub const LEAVE_TYPES: &[&str] = &[
    "Casual Leave",
    "Sick Leave",
    "Earned Leave",
    "Maternity Leave",
    "Paternity Leave",
    "Unpaid Leave",
];

pub const DURATION_TYPES: &[&str] = &["Full Day", "Half Day"];

pub const DEPARTMENTS: &[&str] = &[
    "Science",
    "Mathematics",
    "Languages",
    "Social Studies",
    "Administration",
    "Sports",
    "Transport",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveStatus {
    Approved,
    Pending,
    Rejected,
}

impl RecordStatus for LeaveStatus {
    const ALL: &'static [Self] = &[Self::Approved, Self::Pending, Self::Rejected];
    const LABELS: &'static [&'static str] = &["Approved", "Pending", "Rejected"];

    fn label(&self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
        }
    }

    fn badge_variant(&self) -> &'static str {
        match self {
            Self::Approved => "success",
            Self::Pending => "warning",
            Self::Rejected => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    pub employee_name: String,
    pub employee_id: String,
    pub department: String,
    pub leave_type: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub number_of_days: u32,
    pub duration_type: String,
    pub status: LeaveStatus,
    pub reason: String,
    pub requested_on: NaiveDate,
    pub approved_by: Option<String>,
    pub approval_date: Option<NaiveDate>,
}

impl Searchable for LeaveRequest {
    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.clone()),
            "employee_name" => Some(self.employee_name.clone()),
            "employee_id" => Some(self.employee_id.clone()),
            "department" => Some(self.department.clone()),
            "leave_type" => Some(self.leave_type.clone()),
            "from" => Some(format_date(self.from)),
            "to" => Some(format_date(self.to)),
            "number_of_days" => Some(self.number_of_days.to_string()),
            "duration_type" => Some(self.duration_type.clone()),
            "status" => Some(self.status.label().to_string()),
            "reason" => Some(self.reason.clone()),
            "requested_on" => Some(format_date(self.requested_on)),
            "approved_by" => Some(self.approved_by.clone().unwrap_or_else(|| "-".to_string())),
            "approval_date" => Some(format_opt_date(self.approval_date)),
            _ => None,
        }
    }
}

impl Sortable for LeaveRequest {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "employee_name" => compare_text(&self.employee_name, &other.employee_name),
            "employee_id" => self.employee_id.cmp(&other.employee_id),
            "department" => compare_text(&self.department, &other.department),
            "leave_type" => compare_text(&self.leave_type, &other.leave_type),
            "from" => self.from.cmp(&other.from),
            "to" => self.to.cmp(&other.to),
            "number_of_days" => self.number_of_days.cmp(&other.number_of_days),
            "duration_type" => self.duration_type.cmp(&other.duration_type),
            "status" => self.status.label().cmp(other.status.label()),
            "reason" => compare_text(&self.reason, &other.reason),
            "requested_on" => self.requested_on.cmp(&other.requested_on),
            "approved_by" => compare_opt(&self.approved_by, &other.approved_by),
            "approval_date" => compare_opt(&self.approval_date, &other.approval_date),
            _ => Ordering::Equal,
        }
    }
}

impl TableRecord for LeaveRequest {
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::text("employee_name", "Employee").pinned(),
        ColumnDef::text("employee_id", "Employee ID"),
        ColumnDef::text("department", "Department"),
        ColumnDef::text("leave_type", "Leave Type"),
        ColumnDef::date("from", "From"),
        ColumnDef::date("to", "To"),
        ColumnDef::number("number_of_days", "Days"),
        ColumnDef::text("duration_type", "Duration"),
        ColumnDef::status("status", "Status"),
        ColumnDef::text("reason", "Reason").unsortable(),
        ColumnDef::date("requested_on", "Requested On"),
        ColumnDef::text("approved_by", "Approved By"),
        ColumnDef::date("approval_date", "Approval Date"),
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

/// Form values of the "New Leave Request" page
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LeaveRequestDto {
    pub employee_name: String,
    pub employee_id: String,
    pub department: String,
    pub leave_type: String,
    pub from: String,
    pub to: String,
    /// Derived from `from`/`to`, read-only in the form
    pub number_of_days: String,
    pub duration_type: String,
    pub reason: String,
}

impl LeaveRequestDto {
    /// Refresh `number_of_days` after either date changed.
    ///
    /// Set to the inclusive day count when both dates parse and
    /// `from <= to`; cleared otherwise.
    pub fn recompute_days(&mut self) {
        self.number_of_days = match (parse_date_input(&self.from), parse_date_input(&self.to)) {
            (Some(from), Some(to)) => inclusive_day_count(from, to)
                .map(|n| n.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        };
    }

    pub fn set_from(&mut self, value: String) {
        self.from = value;
        self.recompute_days();
    }

    pub fn set_to(&mut self, value: String) {
        self.to = value;
        self.recompute_days();
    }
}

impl FormModel for LeaveRequestDto {
    fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check_string(
            "employee_name",
            "Employee name",
            &self.employee_name,
            &ValidationRules::required().min_length(2),
        );
        errors.check_string(
            "employee_id",
            "Employee ID",
            &self.employee_id,
            &ValidationRules::required().min_length(3).max_length(12),
        );
        errors.check_string(
            "department",
            "Department",
            &self.department,
            &ValidationRules::required().one_of(DEPARTMENTS),
        );
        errors.check_string(
            "leave_type",
            "Leave type",
            &self.leave_type,
            &ValidationRules::required().one_of(LEAVE_TYPES),
        );
        errors.check_string(
            "from",
            "Start date",
            &self.from,
            &ValidationRules::required().format(FieldFormat::Date),
        );
        errors.check_string(
            "to",
            "End date",
            &self.to,
            &ValidationRules::required().format(FieldFormat::Date),
        );
        if let (Some(from), Some(to)) = (parse_date_input(&self.from), parse_date_input(&self.to)) {
            if from > to {
                errors.insert("to", "End date must be on or after start date");
            }
        }
        errors.check_string(
            "duration_type",
            "Duration",
            &self.duration_type,
            &ValidationRules::required().one_of(DURATION_TYPES),
        );
        errors.check_string(
            "reason",
            "Reason",
            &self.reason,
            &ValidationRules::required().min_length(10).max_length(500),
        );
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> LeaveRequestDto {
        let mut dto = LeaveRequestDto {
            employee_name: "Sunita Rao".into(),
            employee_id: "EMP-014".into(),
            department: "Science".into(),
            leave_type: "Casual Leave".into(),
            duration_type: "Full Day".into(),
            reason: "Family function out of town".into(),
            ..Default::default()
        };
        dto.set_from("2024-01-01".into());
        dto.set_to("2024-01-05".into());
        dto
    }

    #[test]
    fn test_days_recomputed_inclusive() {
        let dto = valid();
        assert_eq!(dto.number_of_days, "5");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_days_cleared_when_range_reversed() {
        let mut dto = valid();
        dto.set_to("2023-12-31".into());
        assert_eq!(dto.number_of_days, "");
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("to"), Some("End date must be on or after start date"));
    }

    #[test]
    fn test_days_empty_until_both_dates_set() {
        let mut dto = LeaveRequestDto::default();
        dto.set_from("2024-03-10".into());
        assert_eq!(dto.number_of_days, "");
        dto.set_to("2024-03-10".into());
        assert_eq!(dto.number_of_days, "1");
    }

    #[test]
    fn test_reason_too_short() {
        let dto = LeaveRequestDto {
            reason: "sick".into(),
            ..valid()
        };
        assert_eq!(
            dto.validate().unwrap_err().get("reason"),
            Some("Reason must be at least 10 characters")
        );
    }
}
