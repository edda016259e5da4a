use serde::{Deserialize, Serialize};

/// Подразделение организации. Используется для department scoping менеджеров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Sales,
    Marketing,
    Operations,
    Support,
}

impl Department {
    pub fn code(&self) -> &'static str {
        match self {
            Department::It => "IT",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
            Department::Operations => "Operations",
            Department::Support => "Support",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Department::It => "Information Technology",
            Department::Hr => "Human Resources",
            Department::Finance => "Finance",
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
            Department::Operations => "Operations",
            Department::Support => "Customer Support",
        }
    }

    pub fn all() -> Vec<Department> {
        vec![
            Department::It,
            Department::Hr,
            Department::Finance,
            Department::Sales,
            Department::Marketing,
            Department::Operations,
            Department::Support,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|d| d.code() == code)
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trips_through_from_code() {
        for department in Department::all() {
            assert_eq!(Department::from_code(department.code()), Some(department));
        }
        assert_eq!(Department::from_code("it"), None);
    }

    #[test]
    fn test_serialized_as_code() {
        assert_eq!(serde_json::to_string(&Department::It).unwrap(), "\"IT\"");
        let hr: Department = serde_json::from_str("\"HR\"").unwrap();
        assert_eq!(hr, Department::Hr);
    }
}
