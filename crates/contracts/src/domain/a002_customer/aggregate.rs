use crate::domain::common::{reference, FieldValue, ListRecord, Lookups, Resource, UNRESOLVED};
use crate::enums::Department;
use crate::shared::notification::ToastCategory;
use crate::shared::validation::{FieldErrors, FormValidator, ValidationRules};
use crate::system::access::AccessSubject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Клиент организации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(alias = "organization", deserialize_with = "reference::deserialize")]
    pub organization_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
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

impl AccessSubject for Customer {
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

impl Resource for Customer {
    fn collection_path() -> &'static str {
        "/customers"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }

    fn list_key() -> &'static str {
        "customers"
    }

    fn item_key() -> &'static str {
        "customer"
    }

    fn toast_category() -> ToastCategory {
        ToastCategory::Customer
    }
}

/// Query string of `GET /customers`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

// ============================================================================
// List row
// ============================================================================

/// Строка списка клиентов с разрешённым наименованием организации
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRow {
    pub customer: Customer,
    pub organization_name: Option<String>,
}

impl CustomerRow {
    pub fn project(customer: &Customer, lookups: &Lookups) -> Self {
        Self {
            organization_name: lookups
                .organization(&customer.organization_id)
                .map(str::to_string),
            customer: customer.clone(),
        }
    }

    pub fn project_all(customers: &[Customer], lookups: &Lookups) -> Vec<Self> {
        customers
            .iter()
            .map(|customer| Self::project(customer, lookups))
            .collect()
    }

    pub fn organization_display(&self) -> &str {
        self.organization_name.as_deref().unwrap_or(UNRESOLVED)
    }
}

impl ListRecord for CustomerRow {
    fn record_id(&self) -> &str {
        &self.customer.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let customer = &self.customer;
        match name {
            "name" => Some(FieldValue::text(&customer.name)),
            "email" => customer.email.as_deref().map(FieldValue::text),
            "phone" => customer.phone.as_deref().map(FieldValue::text),
            "organization" => self.organization_name.as_deref().map(FieldValue::text),
            "organization_id" => Some(FieldValue::keyword(&customer.organization_id)),
            "is_active" => Some(FieldValue::Bool(customer.is_active)),
            "created_at" => customer.created_at.map(FieldValue::Instant),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        let customer = &self.customer;
        let mut fields = vec![customer.name.as_str()];
        fields.extend(customer.email.as_deref());
        fields.extend(customer.phone.as_deref());
        fields.extend(self.organization_name.as_deref());
        fields
    }
}

impl AccessSubject for CustomerRow {
    fn subject_id(&self) -> &str {
        self.customer.subject_id()
    }

    fn department(&self) -> Option<Department> {
        self.customer.department()
    }

    fn created_by(&self) -> Option<&str> {
        self.customer.created_by()
    }
}

// ============================================================================
// DTO
// ============================================================================

pub const NAME_RULES: ValidationRules = ValidationRules::required().max_length(100);
pub const EMAIL_RULES: ValidationRules = ValidationRules::none().email();
pub const PHONE_RULES: ValidationRules = ValidationRules::none().max_length(30);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub name: String,
    pub organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub is_active: bool,
}

impl Default for CustomerDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            organization_id: None,
            email: None,
            phone: None,
            is_active: true,
        }
    }
}

impl CustomerDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        FormValidator::new()
            .text("name", "Name", &self.name, NAME_RULES)
            .selected(
                "organization_id",
                "Organization",
                self.organization_id.as_deref().filter(|id| !id.is_empty()),
            )
            .optional_text("email", "Email", self.email.as_deref(), EMAIL_RULES)
            .optional_text("phone", "Phone", self.phone.as_deref(), PHONE_RULES)
            .finish()
    }
}

impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            organization_id: Some(customer.organization_id.clone()),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            is_active: customer.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_organization::Organization;

    fn lookups() -> Lookups {
        let organizations: Vec<Organization> = serde_json::from_str(
            r#"[{"_id":"o1","name":"Acme"},{"_id":"o2","name":"Globex"}]"#,
        )
        .unwrap();
        Lookups {
            organizations: Lookups::index(&organizations, |o| o.id.as_str(), |o| o.name.as_str()),
            ..Lookups::default()
        }
    }

    fn customers() -> Vec<Customer> {
        serde_json::from_str(
            r#"[
                {"_id":"c1","name":"Road Runner","organization":{"_id":"o1","name":"Acme"}},
                {"_id":"c2","name":"Hank Scorpio","organizationId":"o2","email":"hank@globex.com"},
                {"_id":"c3","name":"Orphan","organizationId":"o9"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_rows_resolve_organization_names() {
        let rows = CustomerRow::project_all(&customers(), &lookups());
        assert_eq!(rows[0].organization_display(), "Acme");
        assert_eq!(rows[1].organization_display(), "Globex");
        assert_eq!(rows[2].organization_display(), UNRESOLVED);
    }

    #[test]
    fn test_search_uses_resolved_name_only() {
        let rows = CustomerRow::project_all(&customers(), &lookups());
        assert!(rows[0].matches_search("acme"));
        assert!(rows[1].matches_search("globex"));
        assert!(!rows[2].matches_search("o9"));
        assert!(!rows[2].matches_search("—"));
    }

    #[test]
    fn test_organization_is_required() {
        let dto = CustomerDto {
            name: "Wile E.".into(),
            organization_id: Some(String::new()),
            email: Some("bad".into()),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.contains("organization_id"));
        assert!(errors.contains("email"));
        assert!(!errors.contains("name"));
    }
}
