use serde::{Deserialize, Serialize};

/// Категория уведомления (toast). Определяет заголовок и иконку
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastCategory {
    Auth,
    Ticket,
    User,
    Customer,
    System,
}

impl ToastCategory {
    pub fn title(&self) -> &'static str {
        match self {
            ToastCategory::Auth => "Authentication",
            ToastCategory::Ticket => "Tickets",
            ToastCategory::User => "Users",
            ToastCategory::Customer => "Customers",
            ToastCategory::System => "System",
        }
    }
}

/// Тип уведомления
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastIntent {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastIntent {
    /// BEM modifier used by the toast host
    pub fn css_modifier(&self) -> &'static str {
        match self {
            ToastIntent::Success => "toast--success",
            ToastIntent::Info => "toast--info",
            ToastIntent::Warning => "toast--warning",
            ToastIntent::Error => "toast--error",
        }
    }
}
