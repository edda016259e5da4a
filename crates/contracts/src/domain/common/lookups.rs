use std::collections::HashMap;

/// Справочники id → наименование для разрешения внешних ключей в строках списков.
///
/// Загружаются вместе с основным списком (организации, клиенты, процессы,
/// активности, пользователи) и используются при построении `*Row`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookups {
    pub organizations: HashMap<String, String>,
    pub customers: HashMap<String, String>,
    pub processes: HashMap<String, String>,
    pub activities: HashMap<String, String>,
    pub users: HashMap<String, String>,
}

/// Placeholder shown for a foreign key that is not present in the lookup.
pub const UNRESOLVED: &str = "—";

impl Lookups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an id → name map from any collection.
    pub fn index<T, I, N>(items: &[T], id: I, name: N) -> HashMap<String, String>
    where
        I: Fn(&T) -> &str,
        N: Fn(&T) -> &str,
    {
        items
            .iter()
            .map(|item| (id(item).to_string(), name(item).to_string()))
            .collect()
    }

    pub fn organization(&self, id: &str) -> Option<&str> {
        self.organizations.get(id).map(String::as_str)
    }

    pub fn customer(&self, id: &str) -> Option<&str> {
        self.customers.get(id).map(String::as_str)
    }

    pub fn process(&self, id: &str) -> Option<&str> {
        self.processes.get(id).map(String::as_str)
    }

    pub fn activity(&self, id: &str) -> Option<&str> {
        self.activities.get(id).map(String::as_str)
    }

    pub fn user(&self, id: &str) -> Option<&str> {
        self.users.get(id).map(String::as_str)
    }
}
