use serde::{Deserialize, Serialize};

/// Статус тикета
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In progress",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }

    /// Position in the ticket workflow, used for sorting
    pub fn rank(&self) -> i64 {
        match self {
            TicketStatus::Open => 1,
            TicketStatus::InProgress => 2,
            TicketStatus::Resolved => 3,
            TicketStatus::Closed => 4,
        }
    }

    pub fn all() -> Vec<TicketStatus> {
        vec![
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Resolved,
            TicketStatus::Closed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

/// Приоритет тикета
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    pub fn code(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Critical => "critical",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Critical => "Critical",
        }
    }

    pub fn rank(&self) -> i64 {
        match self {
            TicketPriority::Low => 1,
            TicketPriority::Medium => 2,
            TicketPriority::High => 3,
            TicketPriority::Critical => 4,
        }
    }

    pub fn all() -> Vec<TicketPriority> {
        vec![
            TicketPriority::Low,
            TicketPriority::Medium,
            TicketPriority::High,
            TicketPriority::Critical,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.code() == code)
    }
}

/// Категория тикета
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    Hardware,
    Software,
    Network,
    Access,
    Billing,
    #[default]
    General,
}

impl TicketCategory {
    pub fn code(&self) -> &'static str {
        match self {
            TicketCategory::Hardware => "hardware",
            TicketCategory::Software => "software",
            TicketCategory::Network => "network",
            TicketCategory::Access => "access",
            TicketCategory::Billing => "billing",
            TicketCategory::General => "general",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TicketCategory::Hardware => "Hardware",
            TicketCategory::Software => "Software",
            TicketCategory::Network => "Network",
            TicketCategory::Access => "Access",
            TicketCategory::Billing => "Billing",
            TicketCategory::General => "General",
        }
    }

    pub fn all() -> Vec<TicketCategory> {
        vec![
            TicketCategory::Hardware,
            TicketCategory::Software,
            TicketCategory::Network,
            TicketCategory::Access,
            TicketCategory::Billing,
            TicketCategory::General,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_rank_follows_severity() {
        let ranks: Vec<i64> = TicketPriority::all().iter().map(|p| p.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&TicketStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(TicketStatus::from_code("closed"), Some(TicketStatus::Closed));
        assert_eq!(TicketCategory::from_code("unknown"), None);
    }
}
