//! Field-level validation for create/edit forms.
//!
//! Validation is synchronous and runs before the request is sent. Errors are
//! keyed by field name so the form can render them under the offending input;
//! server-reported field errors are merged into the same map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ошибки валидации по полям формы
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first error reported for a field.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Merges errors from another source (e.g. the server); existing client
    /// messages win for the same field.
    pub fn merge(&mut self, other: &FieldErrors) {
        for (field, message) in &other.0 {
            self.insert(field.clone(), message.clone());
        }
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
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
    pub email: bool,
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
            email: false,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub const fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules.
    /// Length and format rules apply only to non-empty values.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return if self.required {
                Err(format!("{} is required", field_label))
            } else {
                Ok(())
            };
        }

        let length = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                return Err(format!("{} must be at least {} characters", field_label, min));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(format!("{} must not exceed {} characters", field_label, max));
            }
        }

        if self.email && !is_valid_email(trimmed) {
            return Err(format!("{} is not a valid email address", field_label));
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if !value.is_finite() {
            return Err(format!("{} must be a number", field_label));
        }

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
}

/// Minimal shape check: one `@`, non-empty local part, dotted domain.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|part| !part.is_empty())
}

/// Collects field errors for a whole form.
#[derive(Debug, Default)]
pub struct FormValidator {
    errors: FieldErrors,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(
        &mut self,
        field: &str,
        label: &str,
        value: &str,
        rules: ValidationRules,
    ) -> &mut Self {
        if let Err(message) = rules.validate_string(value, label) {
            self.errors.insert(field, message);
        }
        self
    }

    /// Optional text field; `None` is treated as empty.
    pub fn optional_text(
        &mut self,
        field: &str,
        label: &str,
        value: Option<&str>,
        rules: ValidationRules,
    ) -> &mut Self {
        self.text(field, label, value.unwrap_or(""), rules)
    }

    pub fn number(
        &mut self,
        field: &str,
        label: &str,
        value: f64,
        rules: ValidationRules,
    ) -> &mut Self {
        if let Err(message) = rules.validate_number(value, label) {
            self.errors.insert(field, message);
        }
        self
    }

    /// Required selection (e.g. a dropdown id).
    pub fn selected<T>(&mut self, field: &str, label: &str, value: Option<T>) -> &mut Self {
        if value.is_none() {
            self.errors.insert(field, format!("{} is required", label));
        }
        self
    }

    /// Adds an arbitrary rule failure.
    pub fn check(&mut self, field: &str, ok: bool, message: &str) -> &mut Self {
        if !ok {
            self.errors.insert(field, message);
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), FieldErrors> {
        std::mem::take(&mut self.errors).into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_and_length() {
        let rules = ValidationRules::required().min_length(3).max_length(5);
        assert!(rules.validate_string("  ", "Name").is_err());
        assert!(rules.validate_string("ab", "Name").is_err());
        assert!(rules.validate_string("abcdef", "Name").is_err());
        assert!(rules.validate_string("abcd", "Name").is_ok());
    }

    #[test]
    fn test_optional_field_skips_rules_when_empty() {
        let rules = ValidationRules::none().email();
        assert!(rules.validate_string("", "Email").is_ok());
        assert!(rules.validate_string("nope", "Email").is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("jane.doe@example.com"));
        assert!(!is_valid_email("jane@localhost"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("jane@example."));
    }

    #[test]
    fn test_number_range() {
        let rules = ValidationRules::none().range(0.0, 24.0);
        assert!(rules.validate_number(24.0, "Hours").is_ok());
        assert!(rules.validate_number(24.5, "Hours").is_err());
        assert!(rules.validate_number(f64::NAN, "Hours").is_err());
    }

    #[test]
    fn test_validator_collects_first_error_per_field() {
        let mut validator = FormValidator::new();
        let result = validator
            .text("name", "Name", "", ValidationRules::required())
            .check("name", false, "second message")
            .selected::<&str>("organization_id", "Organization", None)
            .finish();
        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn test_merge_keeps_client_message() {
        let mut client = FieldErrors::new();
        client.insert("email", "client says no");
        let mut server = FieldErrors::new();
        server.insert("email", "server says no");
        server.insert("username", "already taken");
        client.merge(&server);
        assert_eq!(client.get("email"), Some("client says no"));
        assert_eq!(client.get("username"), Some("already taken"));
    }
}
