//! Validation rules for form fields

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

// optional leading "+", then digits with spaces, dashes or parentheses
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9(][0-9\s\-()]{6,18}[0-9]$").expect("valid phone regex"));

/// Shape a text value must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Email,
    Phone,
    /// `YYYY-MM-DD` as produced by `<input type="date">`
    Date,
}

impl FieldFormat {
    pub fn check(&self, value: &str) -> bool {
        match self {
            FieldFormat::Email => EMAIL_RE.is_match(value),
            FieldFormat::Phone => PHONE_RE.is_match(value),
            FieldFormat::Date => parse_date_input(value).is_some(),
        }
    }
}

/// Parse a date input value; blank or malformed → `None`
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub format: Option<FieldFormat>,
    pub one_of: Option<&'static [&'static str]>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            format: None,
            one_of: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        let mut rules = Self::none();
        rules.required = true;
        rules
    }

    pub const fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub const fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub const fn min(mut self, n: f64) -> Self {
        self.min = Some(n);
        self
    }

    pub const fn max(mut self, n: f64) -> Self {
        self.max = Some(n);
        self
    }

    pub const fn format(mut self, format: FieldFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub const fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.one_of = Some(values);
        self
    }

    /// Message used instead of the generic one for format / enum failures
    pub const fn message(mut self, msg: &'static str) -> Self {
        self.custom_error = Some(msg);
        self
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules; first failing rule wins.
    /// Optional blank values pass.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            return Ok(());
        }

        let len = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!(
                    "{} must be at least {} characters",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!(
                    "{} must be at most {} characters",
                    field_label, max
                ));
            }
        }

        if let Some(format) = self.format {
            if !format.check(trimmed) {
                return Err(self.custom_error.map(str::to_string).unwrap_or_else(|| match format {
                    FieldFormat::Email => "Invalid email address".to_string(),
                    FieldFormat::Phone => "Invalid phone number".to_string(),
                    FieldFormat::Date => format!("{} must be a valid date", field_label),
                }));
            }
        }

        if let Some(values) = self.one_of {
            if !values.contains(&trimmed) {
                return Err(self
                    .custom_error
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Please select a {}", field_label.to_lowercase())));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }

    /// Parse and validate a numeric text input
    pub fn validate_number_input(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            return Ok(());
        }
        let number: f64 = trimmed
            .parse()
            .map_err(|_| format!("{} must be a number", field_label))?;
        self.validate_number(number, field_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUSES: &[&str] = &["Active", "Inactive"];

    #[test]
    fn test_required_reported_first() {
        let rules = ValidationRules::required().min_length(3);
        assert_eq!(
            rules.validate_string("  ", "Name"),
            Err("Name is required".to_string())
        );
        assert_eq!(
            rules.validate_string("ab", "Name"),
            Err("Name must be at least 3 characters".to_string())
        );
        assert!(rules.validate_string("abc", "Name").is_ok());
    }

    #[test]
    fn test_optional_blank_passes_other_rules() {
        let rules = ValidationRules::none().format(FieldFormat::Email);
        assert!(rules.validate_string("", "Email").is_ok());
    }

    #[test]
    fn test_email_shape() {
        let rules = ValidationRules::required().format(FieldFormat::Email);
        assert!(rules.validate_string("not-an-email", "Email").is_err());
        assert!(rules.validate_string("a b@c.io", "Email").is_err());
        assert!(rules.validate_string("parent@school.edu", "Email").is_ok());
    }

    #[test]
    fn test_phone_shape() {
        let rules = ValidationRules::required().format(FieldFormat::Phone);
        assert!(rules.validate_string("+1 (555) 123-4567", "Phone").is_ok());
        assert!(rules.validate_string("9876543210", "Phone").is_ok());
        assert!(rules.validate_string("12ab", "Phone").is_err());
    }

    #[test]
    fn test_phone_with_area_code_in_parentheses() {
        let rules = ValidationRules::required().format(FieldFormat::Phone);
        assert!(rules.validate_string("(555) 123-4567", "Phone").is_ok());
        assert!(rules.validate_string("(abc) 123-4567", "Phone").is_err());
        assert_eq!(
            rules.validate_string("(555", "Phone"),
            Err("Invalid phone number".to_string())
        );
        assert!(rules.validate_string("123", "Phone").is_err());
    }

    #[test]
    fn test_one_of_with_custom_message() {
        let rules = ValidationRules::required()
            .one_of(STATUSES)
            .message("Please select a status");
        assert_eq!(
            rules.validate_string("Archived", "Status"),
            Err("Please select a status".to_string())
        );
        assert!(rules.validate_string("Active", "Status").is_ok());
    }

    #[test]
    fn test_date_input() {
        assert_eq!(
            parse_date_input("2024-01-05"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(parse_date_input("05.01.2024"), None);
        let rules = ValidationRules::required().format(FieldFormat::Date);
        assert!(rules.validate_string("2024-02-30", "From").is_err());
    }

    #[test]
    fn test_number_input() {
        let rules = ValidationRules::required().min(1.0);
        assert!(rules.validate_number_input("4", "Capacity").is_ok());
        assert_eq!(
            rules.validate_number_input("0", "Capacity"),
            Err("Capacity must be at least 1".to_string())
        );
        assert_eq!(
            rules.validate_number_input("four", "Capacity"),
            Err("Capacity must be a number".to_string())
        );
    }
}
