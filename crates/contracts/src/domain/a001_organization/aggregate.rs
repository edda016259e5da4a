use crate::domain::common::{FieldValue, ListRecord, Resource};
use crate::enums::Department;
use crate::shared::notification::ToastCategory;
use crate::shared::validation::{FieldErrors, FormValidator, ValidationRules};
use crate::system::access::AccessSubject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Организация, для которой ведётся учёт времени
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl ListRecord for Organization {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "name" => Some(FieldValue::text(&self.name)),
            "description" => self.description.as_deref().map(FieldValue::text),
            "is_active" => Some(FieldValue::Bool(self.is_active)),
            "created_at" => self.created_at.map(FieldValue::Instant),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.description.as_deref());
        fields
    }
}

impl AccessSubject for Organization {
    fn subject_id(&self) -> &str {
        &self.id
    }

    fn department(&self) -> Option<Department> {
        None
    }

    fn created_by(&self) -> Option<&str> {
        self.created_by.as_deref()
    }
}

impl Resource for Organization {
    fn collection_path() -> &'static str {
        "/organizations"
    }

    fn element_name() -> &'static str {
        "Organization"
    }

    fn list_name() -> &'static str {
        "Organizations"
    }

    fn list_key() -> &'static str {
        "organizations"
    }

    fn item_key() -> &'static str {
        "organization"
    }

    fn toast_category() -> ToastCategory {
        ToastCategory::Customer
    }
}

// ============================================================================
// DTO
// ============================================================================

pub const NAME_RULES: ValidationRules = ValidationRules::required().max_length(100);
pub const DESCRIPTION_RULES: ValidationRules = ValidationRules::none().max_length(500);

/// Тело запроса создания / обновления организации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
}

impl Default for OrganizationDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            is_active: true,
        }
    }
}

impl OrganizationDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        FormValidator::new()
            .text("name", "Name", &self.name, NAME_RULES)
            .optional_text("description", "Description", self.description.as_deref(), DESCRIPTION_RULES)
            .finish()
    }
}

impl From<&Organization> for OrganizationDto {
    fn from(organization: &Organization) -> Self {
        Self {
            name: organization.name.clone(),
            description: organization.description.clone(),
            is_active: organization.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_matches_name_or_description() {
        let organization: Organization = serde_json::from_str(
            r#"{"_id":"o1","name":"Acme","description":"Rocket skates"}"#,
        )
        .unwrap();
        assert!(organization.is_active);
        assert!(organization.matches_search("acme"));
        assert!(organization.matches_search("skates"));
        assert!(!organization.matches_search("globex"));
    }

    #[test]
    fn test_name_is_required() {
        let dto = OrganizationDto::default();
        assert_eq!(dto.validate().unwrap_err().get("name"), Some("Name is required"));

        let dto = OrganizationDto {
            name: "Acme".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }
}
