use super::rules::ValidationRules;
use std::collections::BTreeMap;

/// Inline validation messages, one per field (the first failing rule)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message; an earlier message for the same field wins
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    pub fn check_string(
        &mut self,
        field: &'static str,
        label: &str,
        value: &str,
        rules: &ValidationRules,
    ) {
        if let Err(msg) = rules.validate_string(value, label) {
            self.insert(field, msg);
        }
    }

    pub fn check_number(
        &mut self,
        field: &'static str,
        label: &str,
        value: &str,
        rules: &ValidationRules,
    ) {
        if let Err(msg) = rules.validate_number_input(value, label) {
            self.insert(field, msg);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed:")?;
        for (field, msg) in &self.fields {
            write!(f, " {}: {};", field, msg)?;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

/// A form DTO that validates itself synchronously on submit
pub trait FormModel {
    fn validate(&self) -> Result<(), FormErrors>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = FormErrors::new();
        errors.insert("email", "Email is required");
        errors.insert("email", "Invalid email address");
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_into_result() {
        assert!(FormErrors::new().into_result().is_ok());
        let mut errors = FormErrors::new();
        errors.check_string("name", "Name", "", &ValidationRules::required());
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.to_string(), "validation failed: name: Name is required;");
    }
}
