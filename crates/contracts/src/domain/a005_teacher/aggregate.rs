use crate::domain::common::{format_date, RecordStatus};
use crate::shared::forms::{FieldFormat, FormErrors, FormModel, ValidationRules};
use crate::shared::table::{compare_text, ColumnDef, Searchable, Sortable, TableRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const COLLECTION_KEY: &str = "a005_teacher";
pub const LIST_NAME: &str = "Teachers";
pub const ELEMENT_NAME: &str = "Teacher";

pub const SUBJECTS: &[&str] = &[
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "English",
    "Hindi",
    "History",
    "Geography",
    "Computer Science",
    "Physical Education",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeacherStatus {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Inactive,
}

impl RecordStatus for TeacherStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::OnLeave, Self::Inactive];
    const LABELS: &'static [&'static str] = &["Active", "On Leave", "Inactive"];

    fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
            Self::Inactive => "Inactive",
        }
    }

    fn badge_variant(&self) -> &'static str {
        match self {
            Self::Active => "success",
            Self::OnLeave => "warning",
            Self::Inactive => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub department: String,
    pub joining_date: NaiveDate,
    pub status: TeacherStatus,
}

impl Searchable for Teacher {
    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.clone()),
            "full_name" => Some(self.full_name.clone()),
            "email" => Some(self.email.clone()),
            "phone" => Some(self.phone.clone()),
            "subject" => Some(self.subject.clone()),
            "department" => Some(self.department.clone()),
            "joining_date" => Some(format_date(self.joining_date)),
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }
}

impl Sortable for Teacher {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "full_name" => compare_text(&self.full_name, &other.full_name),
            "email" => compare_text(&self.email, &other.email),
            "phone" => self.phone.cmp(&other.phone),
            "subject" => compare_text(&self.subject, &other.subject),
            "department" => compare_text(&self.department, &other.department),
            "joining_date" => self.joining_date.cmp(&other.joining_date),
            "status" => self.status.label().cmp(other.status.label()),
            _ => Ordering::Equal,
        }
    }
}

impl TableRecord for Teacher {
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::text("id", "Staff ID").pinned(),
        ColumnDef::text("full_name", "Name").pinned(),
        ColumnDef::text("email", "Email"),
        ColumnDef::text("phone", "Phone").unsortable(),
        ColumnDef::text("subject", "Subject"),
        ColumnDef::text("department", "Department"),
        ColumnDef::date("joining_date", "Joined"),
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

/// Form values of the "Add Teacher" page, including the portal login
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TeacherDto {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub department: String,
    pub joining_date: String,
    pub status: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormModel for TeacherDto {
    fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check_string(
            "full_name",
            "Full name",
            &self.full_name,
            &ValidationRules::required().min_length(2).max_length(60),
        );
        errors.check_string(
            "email",
            "Email",
            &self.email,
            &ValidationRules::required().format(FieldFormat::Email),
        );
        errors.check_string(
            "phone",
            "Phone",
            &self.phone,
            &ValidationRules::required().format(FieldFormat::Phone),
        );
        errors.check_string(
            "subject",
            "Subject",
            &self.subject,
            &ValidationRules::required().one_of(SUBJECTS),
        );
        errors.check_string(
            "department",
            "Department",
            &self.department,
            &ValidationRules::required().min_length(2),
        );
        errors.check_string(
            "joining_date",
            "Joining date",
            &self.joining_date,
            &ValidationRules::required().format(FieldFormat::Date),
        );
        errors.check_string(
            "status",
            "Status",
            &self.status,
            &ValidationRules::required().one_of(TeacherStatus::LABELS),
        );
        errors.check_string(
            "password",
            "Password",
            &self.password,
            &ValidationRules::required().min_length(8),
        );
        if self.confirm_password != self.password {
            errors.insert("confirm_password", "Passwords don't match");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> TeacherDto {
        TeacherDto {
            full_name: "Meera Krishnan".into(),
            email: "meera.k@school.edu".into(),
            phone: "+91 98450 12345".into(),
            subject: "Physics".into(),
            department: "Science".into(),
            joining_date: "2024-06-01".into(),
            status: "Active".into(),
            password: "s3cret-pass".into(),
            confirm_password: "s3cret-pass".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_confirm_password_must_match() {
        let dto = TeacherDto {
            confirm_password: "s3cret-pas".into(),
            ..valid()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("confirm_password"), Some("Passwords don't match"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_short_password() {
        let dto = TeacherDto {
            password: "short".into(),
            confirm_password: "short".into(),
            ..valid()
        };
        assert_eq!(
            dto.validate().unwrap_err().get("password"),
            Some("Password must be at least 8 characters")
        );
    }
}
