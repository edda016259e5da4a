use crate::domain::common::{FieldValue, ListRecord, Resource};
use crate::enums::{Department, Role};
use crate::shared::notification::ToastCategory;
use crate::shared::validation::{FieldErrors, FormValidator, ValidationRules};
use crate::system::access::AccessSubject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    pub department: Department,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl ListRecord for User {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "username" => Some(FieldValue::text(&self.username)),
            "full_name" => self.full_name.as_deref().map(FieldValue::text),
            "email" => self.email.as_deref().map(FieldValue::text),
            "role" => Some(FieldValue::Ranked {
                key: self.role.code(),
                rank: i64::from(self.role.level()),
            }),
            "department" => Some(FieldValue::keyword(self.department.code())),
            "is_active" => Some(FieldValue::Bool(self.is_active)),
            "created_at" => self.created_at.map(FieldValue::Instant),
            "last_login_at" => self.last_login_at.map(FieldValue::Instant),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.username.as_str()];
        fields.extend(self.full_name.as_deref());
        fields.extend(self.email.as_deref());
        fields
    }
}

impl AccessSubject for User {
    fn subject_id(&self) -> &str {
        &self.id
    }

    fn department(&self) -> Option<Department> {
        Some(self.department)
    }

    fn created_by(&self) -> Option<&str> {
        None
    }
}

impl Resource for User {
    fn collection_path() -> &'static str {
        "/users"
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }

    fn list_key() -> &'static str {
        "users"
    }

    fn item_key() -> &'static str {
        "user"
    }

    fn toast_category() -> ToastCategory {
        ToastCategory::User
    }
}

pub const USERNAME_RULES: ValidationRules = ValidationRules::required().min_length(3).max_length(50);
pub const PASSWORD_RULES: ValidationRules = ValidationRules::required().min_length(8);
pub const EMAIL_RULES: ValidationRules = ValidationRules::none().email();

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub role: Role,
    pub department: Option<Department>,
}

impl CreateUserDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        FormValidator::new()
            .text("username", "Username", &self.username, USERNAME_RULES)
            .text("password", "Password", &self.password, PASSWORD_RULES)
            .optional_text("email", "Email", self.email.as_deref(), EMAIL_RULES)
            .selected("department", "Department", self.department)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub role: Role,
    pub department: Department,
    pub is_active: bool,
    /// Password reset by an administrator; unchanged when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UpdateUserDto {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut validator = FormValidator::new();
        validator.optional_text("email", "Email", self.email.as_deref(), EMAIL_RULES);
        if let Some(password) = self.password.as_deref() {
            validator.text("password", "Password", password, PASSWORD_RULES);
        }
        validator.finish()
    }
}

impl From<&User> for UpdateUserDto {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
            department: user.department,
            is_active: user.is_active,
            password: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{FilterSet, FilterValue, ListState, SortSpec};

    fn user(id: &str, username: &str, role: Role, department: Department) -> User {
        User {
            id: id.to_string(),
            username: username.to_string(),
            full_name: None,
            email: Some(format!("{}@example.com", username)),
            role,
            department,
            is_active: true,
            created_at: None,
            last_login_at: None,
        }
    }

    #[test]
    fn test_deserialize_wire_user() {
        let json = r#"{"_id":"u1","username":"jdoe","fullName":"Jane Doe","role":"admin",
            "department":"Finance","isActive":true,"createdAt":"2024-01-02T03:04:05Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(user.department, Department::Finance);
        assert!(user.created_at.is_some());
        assert_eq!(user.last_login_at, None);
    }

    #[test]
    fn test_search_covers_username_name_and_email() {
        let mut record = user("1", "jdoe", Role::User, Department::It);
        record.full_name = Some("Jane Doe".into());
        assert!(record.matches_search("jane"));
        assert!(record.matches_search("example.com"));
        assert!(!record.matches_search("smith"));
    }

    #[test]
    fn test_role_sorts_by_hierarchy_and_filters_by_code() {
        let records = vec![
            user("1", "a", Role::Admin, Department::It),
            user("2", "b", Role::User, Department::It),
            user("3", "c", Role::Manager, Department::Hr),
        ];
        let state = ListState::new(SortSpec::ascending("role"));
        let page = state.derive(&records);
        let ids: Vec<_> = page.items.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);

        let filters = FilterSet::new().with("department", FilterValue::is("HR"));
        assert_eq!(crate::shared::list::filter_records(&records, &filters).len(), 1);
    }

    #[test]
    fn test_create_validation() {
        let dto = CreateUserDto {
            username: "jd".into(),
            password: "short".into(),
            email: Some("not-an-email".into()),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.contains("username"));
        assert!(errors.contains("password"));
        assert!(errors.contains("email"));
        assert!(errors.contains("department"));

        let dto = CreateUserDto {
            username: "jdoe".into(),
            password: "long enough".into(),
            email: None,
            department: Some(Department::Sales),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_update_skips_password_unless_given() {
        let record = user("1", "jdoe", Role::User, Department::It);
        let mut dto = UpdateUserDto::from(&record);
        assert!(dto.validate().is_ok());
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["isActive"], true);

        dto.password = Some("1234".into());
        assert!(dto.validate().unwrap_err().contains("password"));
    }
}
