use crate::domain::common::{format_date, format_opt_date, RecordStatus};
use crate::shared::forms::{FieldFormat, FormErrors, FormModel, ValidationRules};
use crate::shared::table::{compare_opt, compare_text, ColumnDef, Searchable, Sortable, TableRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const COLLECTION_KEY: &str = "a002_admission_inquiry";
pub const LIST_NAME: &str = "Admission Inquiries";
pub const ELEMENT_NAME: &str = "Admission Inquiry";

/// Where the inquiry came from
pub const SOURCES: &[&str] = &["Walk-in", "Website", "Phone", "Referral", "Social Media", "Advertisement"];

pub const CAMPUSES: &[&str] = &["Main Campus", "North Campus", "City Campus"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InquiryStatus {
    New,
    #[serde(rename = "In Process")]
    InProcess,
    Closed,
    #[serde(rename = "Follow-up")]
    FollowUp,
}

impl RecordStatus for InquiryStatus {
    const ALL: &'static [Self] = &[Self::New, Self::InProcess, Self::Closed, Self::FollowUp];
    const LABELS: &'static [&'static str] = &["New", "In Process", "Closed", "Follow-up"];

    fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProcess => "In Process",
            Self::Closed => "Closed",
            Self::FollowUp => "Follow-up",
        }
    }

    fn badge_variant(&self) -> &'static str {
        match self {
            Self::New => "primary",
            Self::InProcess => "warning",
            Self::Closed => "neutral",
            Self::FollowUp => "success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmissionInquiry {
    pub id: String,
    pub student_name: String,
    pub guardian_name: String,
    pub contact: String,
    pub email: String,
    pub date_of_inquiry: NaiveDate,
    pub source: String,
    pub status: InquiryStatus,
    pub follow_up_date: Option<NaiveDate>,
    pub assigned_to: String,
    pub campus: String,
    pub previous_education: String,
}

impl Searchable for AdmissionInquiry {
    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.clone()),
            "student_name" => Some(self.student_name.clone()),
            "guardian_name" => Some(self.guardian_name.clone()),
            "contact" => Some(self.contact.clone()),
            "email" => Some(self.email.clone()),
            "date_of_inquiry" => Some(format_date(self.date_of_inquiry)),
            "source" => Some(self.source.clone()),
            "status" => Some(self.status.label().to_string()),
            "follow_up_date" => Some(format_opt_date(self.follow_up_date)),
            "assigned_to" => Some(self.assigned_to.clone()),
            "campus" => Some(self.campus.clone()),
            "previous_education" => Some(self.previous_education.clone()),
            _ => None,
        }
    }
}

impl Sortable for AdmissionInquiry {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "student_name" => compare_text(&self.student_name, &other.student_name),
            "guardian_name" => compare_text(&self.guardian_name, &other.guardian_name),
            "contact" => self.contact.cmp(&other.contact),
            "email" => compare_text(&self.email, &other.email),
            "date_of_inquiry" => self.date_of_inquiry.cmp(&other.date_of_inquiry),
            "source" => compare_text(&self.source, &other.source),
            "status" => self.status.label().cmp(other.status.label()),
            "follow_up_date" => compare_opt(&self.follow_up_date, &other.follow_up_date),
            "assigned_to" => compare_text(&self.assigned_to, &other.assigned_to),
            "campus" => compare_text(&self.campus, &other.campus),
            "previous_education" => compare_text(&self.previous_education, &other.previous_education),
            _ => Ordering::Equal,
        }
    }
}

impl TableRecord for AdmissionInquiry {
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::text("id", "Inquiry ID").pinned(),
        ColumnDef::text("student_name", "Student Name").pinned(),
        ColumnDef::text("guardian_name", "Guardian"),
        ColumnDef::text("contact", "Contact").unsortable(),
        ColumnDef::text("email", "Email"),
        ColumnDef::date("date_of_inquiry", "Inquiry Date"),
        ColumnDef::text("source", "Source"),
        ColumnDef::status("status", "Status"),
        ColumnDef::date("follow_up_date", "Follow-up"),
        ColumnDef::text("assigned_to", "Assigned To"),
        ColumnDef::text("campus", "Campus"),
        ColumnDef::text("previous_education", "Previous Education"),
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

/// Form values of the "New Inquiry" page
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AdmissionInquiryDto {
    pub student_name: String,
    pub guardian_name: String,
    pub contact: String,
    pub email: String,
    pub date_of_inquiry: String,
    pub source: String,
    pub status: String,
    pub follow_up_date: String,
    pub assigned_to: String,
    pub campus: String,
    pub previous_education: String,
}

impl FormModel for AdmissionInquiryDto {
    fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        let name = ValidationRules::required().min_length(2).max_length(60);
        errors.check_string("student_name", "Student name", &self.student_name, &name);
        errors.check_string("guardian_name", "Guardian name", &self.guardian_name, &name);
        errors.check_string(
            "contact",
            "Contact number",
            &self.contact,
            &ValidationRules::required().format(FieldFormat::Phone),
        );
        errors.check_string(
            "email",
            "Email",
            &self.email,
            &ValidationRules::required().format(FieldFormat::Email),
        );
        errors.check_string(
            "date_of_inquiry",
            "Inquiry date",
            &self.date_of_inquiry,
            &ValidationRules::required().format(FieldFormat::Date),
        );
        errors.check_string(
            "source",
            "Source",
            &self.source,
            &ValidationRules::required().one_of(SOURCES),
        );
        errors.check_string(
            "status",
            "Status",
            &self.status,
            &ValidationRules::required().one_of(InquiryStatus::LABELS),
        );
        errors.check_string(
            "follow_up_date",
            "Follow-up date",
            &self.follow_up_date,
            &ValidationRules::none().format(FieldFormat::Date),
        );
        errors.check_string(
            "assigned_to",
            "Assigned to",
            &self.assigned_to,
            &ValidationRules::required().min_length(2),
        );
        errors.check_string(
            "campus",
            "Campus",
            &self.campus,
            &ValidationRules::required().one_of(CAMPUSES),
        );
        errors.check_string(
            "previous_education",
            "Previous education",
            &self.previous_education,
            &ValidationRules::none().max_length(120),
        );
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> AdmissionInquiryDto {
        AdmissionInquiryDto {
            student_name: "Aarav Mehta".into(),
            guardian_name: "Rohit Mehta".into(),
            contact: "+91 98765 43210".into(),
            email: "rohit.mehta@example.com".into(),
            date_of_inquiry: "2024-05-02".into(),
            source: "Website".into(),
            status: "New".into(),
            follow_up_date: String::new(),
            assigned_to: "Ms. Kapoor".into(),
            campus: "Main Campus".into(),
            previous_education: "Grade 5, Sunrise Public School".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_and_phone() {
        let dto = AdmissionInquiryDto {
            email: "not-an-email".into(),
            contact: "call me".into(),
            ..valid()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Invalid email address"));
        assert_eq!(errors.get("contact"), Some("Invalid phone number"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_serialized_status_uses_display_label() {
        let json = serde_json::to_string(&InquiryStatus::FollowUp).unwrap();
        assert_eq!(json, "\"Follow-up\"");
    }
}
