use crate::enums::{Department, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(alias = "token")]
    pub access_token: String,
    pub user: UserInfo,
}

/// Текущий пользователь сессии. Хранится в session storage под ключом `user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub department: Option<Department>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl UserInfo {
    pub fn has_role(&self, required: Role) -> bool {
        self.role.has_role(required)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Full name when known, otherwise the login.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_normalizes_mongo_id() {
        let json = r#"{"_id":"64f0","username":"jdoe","role":"manager","department":"IT"}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "64f0");
        assert_eq!(user.role, Role::Manager);
        assert_eq!(user.department, Some(Department::It));
        assert!(user.is_active);
        assert_eq!(user.display_name(), "jdoe");
    }

    #[test]
    fn test_login_response_accepts_token_alias() {
        let json = r#"{"token":"abc","user":{"id":"1","username":"root","role":"admin"}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "abc");
        assert!(response.user.is_admin());
    }
}
