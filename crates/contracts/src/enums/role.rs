use serde::{Deserialize, Serialize};

/// Роль пользователя. Порядок вариантов задаёт иерархию: user < manager < admin
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Manager,
    Admin,
}

impl Role {
    /// Уровень в иерархии ролей
    pub fn level(&self) -> u8 {
        match self {
            Role::User => 1,
            Role::Manager => 2,
            Role::Admin => 3,
        }
    }

    /// `true`, если роль не ниже требуемой
    pub fn has_role(&self, required: Role) -> bool {
        self.level() >= required.level()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Manager => "Manager",
            Role::Admin => "Administrator",
        }
    }

    pub fn all() -> Vec<Role> {
        vec![Role::User, Role::Manager, Role::Admin]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "user" => Some(Role::User),
            "manager" => Some(Role::Manager),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_satisfies_every_role() {
        assert!(Role::Admin.has_role(Role::User));
        assert!(Role::Admin.has_role(Role::Manager));
        assert!(Role::Admin.has_role(Role::Admin));
    }

    #[test]
    fn test_user_satisfies_only_user() {
        assert!(Role::User.has_role(Role::User));
        assert!(!Role::User.has_role(Role::Manager));
        assert!(!Role::User.has_role(Role::Admin));
    }

    #[test]
    fn test_manager_sits_between() {
        assert!(Role::Manager.has_role(Role::User));
        assert!(Role::Manager.has_role(Role::Manager));
        assert!(!Role::Manager.has_role(Role::Admin));
        assert!(Role::User < Role::Manager && Role::Manager < Role::Admin);
    }

    #[test]
    fn test_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"manager\"");
        let parsed: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, Role::Admin);
        assert_eq!(Role::from_code("nobody"), None);
    }
}
