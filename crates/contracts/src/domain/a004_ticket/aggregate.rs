use crate::domain::common::dates::optional_flexible_date;
use crate::domain::common::{reference, FieldValue, ListRecord, Lookups, Resource};
use crate::enums::{Department, TicketCategory, TicketPriority, TicketStatus};
use crate::shared::notification::ToastCategory;
use crate::shared::validation::{FieldErrors, FormValidator, ValidationRules};
use crate::system::access::AccessSubject;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Заявка (тикет) в службу поддержки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(default)]
    pub priority: TicketPriority,
    #[serde(default)]
    pub category: TicketCategory,
    pub department: Department,
    #[serde(deserialize_with = "reference::deserialize")]
    pub created_by: String,
    #[serde(default, deserialize_with = "reference::optional::deserialize")]
    pub assigned_to: Option<String>,
    #[serde(default, with = "optional_flexible_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_activity: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Past the due date and still not resolved.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        matches!(self.status, TicketStatus::Open | TicketStatus::InProgress)
            && self.due_date.is_some_and(|due| due < today)
    }
}

impl ListRecord for Ticket {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "title" => Some(FieldValue::text(&self.title)),
            "description" => Some(FieldValue::text(&self.description)),
            "status" => Some(FieldValue::Ranked {
                key: self.status.code(),
                rank: self.status.rank(),
            }),
            "priority" => Some(FieldValue::Ranked {
                key: self.priority.code(),
                rank: self.priority.rank(),
            }),
            "category" => Some(FieldValue::keyword(self.category.code())),
            "department" => Some(FieldValue::keyword(self.department.code())),
            "created_by" => Some(FieldValue::keyword(&self.created_by)),
            "assigned_to" => self.assigned_to.as_deref().map(FieldValue::keyword),
            "due_date" => self.due_date.map(FieldValue::Day),
            "created_at" => self.created_at.map(FieldValue::Instant),
            "last_activity" => self.last_activity.map(FieldValue::Instant),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title]
    }
}

impl AccessSubject for Ticket {
    fn subject_id(&self) -> &str {
        &self.id
    }

    fn department(&self) -> Option<Department> {
        Some(self.department)
    }

    fn created_by(&self) -> Option<&str> {
        Some(&self.created_by)
    }

    fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    fn is_assignable(&self) -> bool {
        true
    }
}

// ============================================================================
// List row
// ============================================================================

/// Строка списка тикетов с именами автора и исполнителя
#[derive(Debug, Clone, PartialEq)]
pub struct TicketRow {
    pub ticket: Ticket,
    pub author_name: Option<String>,
    pub assignee_name: Option<String>,
}

impl TicketRow {
    pub fn project(ticket: &Ticket, lookups: &Lookups) -> Self {
        Self {
            author_name: lookups.user(&ticket.created_by).map(str::to_string),
            assignee_name: ticket
                .assigned_to
                .as_deref()
                .and_then(|id| lookups.user(id))
                .map(str::to_string),
            ticket: ticket.clone(),
        }
    }

    pub fn project_all(tickets: &[Ticket], lookups: &Lookups) -> Vec<Self> {
        tickets
            .iter()
            .map(|ticket| Self::project(ticket, lookups))
            .collect()
    }
}

impl ListRecord for TicketRow {
    fn record_id(&self) -> &str {
        &self.ticket.id
    }

    /// `assignee` / `author` сортируются по имени; неразрешённый id идёт в конец
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "assignee" => self.assignee_name.as_deref().map(FieldValue::text),
            "author" => self.author_name.as_deref().map(FieldValue::text),
            _ => self.ticket.field(name),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        self.ticket.search_fields()
    }
}

impl AccessSubject for TicketRow {
    fn subject_id(&self) -> &str {
        self.ticket.subject_id()
    }

    fn department(&self) -> Option<Department> {
        self.ticket.department()
    }

    fn created_by(&self) -> Option<&str> {
        self.ticket.created_by()
    }

    fn assigned_to(&self) -> Option<&str> {
        self.ticket.assigned_to()
    }

    fn is_assignable(&self) -> bool {
        true
    }
}

impl Resource for Ticket {
    fn collection_path() -> &'static str {
        "/tickets"
    }

    fn element_name() -> &'static str {
        "Ticket"
    }

    fn list_name() -> &'static str {
        "Tickets"
    }

    fn list_key() -> &'static str {
        "tickets"
    }

    fn item_key() -> &'static str {
        "ticket"
    }

    fn toast_category() -> ToastCategory {
        ToastCategory::Ticket
    }
}

// ============================================================================
// DTO
// ============================================================================

pub const TITLE_RULES: ValidationRules = ValidationRules::required().max_length(200);
pub const DESCRIPTION_RULES: ValidationRules = ValidationRules::required().max_length(5000);

/// Тело запроса создания / редактирования тикета
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDto {
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub category: TicketCategory,
    pub department: Option<Department>,
    pub assigned_to: Option<String>,
    #[serde(default, with = "optional_flexible_date")]
    pub due_date: Option<NaiveDate>,
}

impl TicketDto {
    /// New ticket defaults to the author's department.
    pub fn for_department(department: Option<Department>) -> Self {
        Self {
            department,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        FormValidator::new()
            .text("title", "Title", &self.title, TITLE_RULES)
            .text("description", "Description", &self.description, DESCRIPTION_RULES)
            .selected("department", "Department", self.department)
            .finish()
    }
}

impl From<&Ticket> for TicketDto {
    fn from(ticket: &Ticket) -> Self {
        Self {
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            status: ticket.status,
            priority: ticket.priority,
            category: ticket.category,
            department: Some(ticket.department),
            assigned_to: ticket.assigned_to.clone(),
            due_date: ticket.due_date,
        }
    }
}

/// Частичное обновление: смена статуса
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TicketStatusChange {
    pub status: TicketStatus,
}

/// Частичное обновление: назначение исполнителя (`None` снимает назначение)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketAssignment {
    pub assigned_to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Role;
    use crate::shared::list::{FilterValue, ListState, Page, SortSpec};
    use crate::system::access::{can_perform, Action};
    use crate::system::auth::UserInfo;

    fn ticket(id: usize, status: TicketStatus, priority: TicketPriority) -> Ticket {
        Ticket {
            id: format!("t-{:02}", id),
            title: format!("Ticket {}", id),
            description: "details".into(),
            status,
            priority,
            category: TicketCategory::General,
            department: Department::It,
            created_by: "u-1".into(),
            assigned_to: None,
            due_date: None,
            created_at: None,
            last_activity: None,
        }
    }

    #[test]
    fn test_open_tickets_by_priority_over_two_pages() {
        let priorities = TicketPriority::all();
        let tickets: Vec<Ticket> = (0..25)
            .map(|i| {
                let status = if i % 2 == 0 && i < 24 {
                    TicketStatus::Open
                } else {
                    TicketStatus::Closed
                };
                ticket(i, status, priorities[i % priorities.len()])
            })
            .collect();
        assert_eq!(tickets.iter().filter(|t| t.status == TicketStatus::Open).count(), 12);

        let mut state = ListState::new(SortSpec::ascending("created_at")).with_page_size(10);
        state.set_filter("status", FilterValue::is("open"));
        state.toggle_sort("priority");
        state.toggle_sort("priority");
        assert_eq!(state.sort, SortSpec::descending("priority"));

        let first = state.derive(&tickets);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_count, 12);
        assert!(first.has_next);
        // Open tickets alternate High and Low; equal priorities keep input order
        let ids = |page: &Page<Ticket>| page.items.iter().map(|t| t.id.clone()).collect::<Vec<_>>();
        assert_eq!(
            ids(&first),
            vec!["t-02", "t-06", "t-10", "t-14", "t-18", "t-22", "t-00", "t-04", "t-08", "t-12"]
        );

        state.go_to_page(2);
        let second = state.derive(&tickets);
        assert_eq!(second.items.len(), 2);
        assert!(!second.has_next);
        assert_eq!(ids(&second), vec!["t-16", "t-20"]);
    }

    #[test]
    fn test_assignee_column_sorts_by_name() {
        let mut lookups = Lookups::new();
        lookups.users.insert("u-a".into(), "Zoe Adams".into());
        lookups.users.insert("u-b".into(), "adam Brown".into());

        let mut tickets: Vec<Ticket> = (0..4)
            .map(|i| ticket(i, TicketStatus::Open, TicketPriority::Medium))
            .collect();
        tickets[0].assigned_to = Some("u-a".into());
        tickets[1].assigned_to = None;
        tickets[2].assigned_to = Some("u-b".into());
        // Id of a user missing from the lookup
        tickets[3].assigned_to = Some("u-0".into());

        let rows = TicketRow::project_all(&tickets, &lookups);
        assert_eq!(rows[2].assignee_name.as_deref(), Some("adam Brown"));
        assert_eq!(rows[3].assignee_name, None);

        let state = ListState::new(SortSpec::ascending("assignee"));
        let order: Vec<String> = state.derive(&rows).items.iter().map(|r| r.ticket.id.clone()).collect();
        assert_eq!(order, vec!["t-02", "t-00", "t-01", "t-03"]);

        let state = ListState::new(SortSpec::descending("assignee"));
        let order: Vec<String> = state.derive(&rows).items.iter().map(|r| r.ticket.id.clone()).collect();
        assert_eq!(order, vec!["t-00", "t-02", "t-01", "t-03"]);
    }

    #[test]
    fn test_it_manager_sees_actions_only_on_it_tickets() {
        let manager = UserInfo {
            id: "m-1".into(),
            username: "it-lead".into(),
            full_name: None,
            email: None,
            role: Role::Manager,
            department: Some(Department::It),
            is_active: true,
        };

        let mut hr_ticket = ticket(1, TicketStatus::Open, TicketPriority::High);
        hr_ticket.department = Department::Hr;
        hr_ticket.assigned_to = Some("u-7".into());
        assert!(!can_perform(Action::Edit, &hr_ticket, &manager));
        assert!(!can_perform(Action::Delete, &hr_ticket, &manager));

        let it_ticket = ticket(2, TicketStatus::Open, TicketPriority::High);
        assert!(can_perform(Action::Edit, &it_ticket, &manager));
        assert!(can_perform(Action::Delete, &it_ticket, &manager));
    }

    #[test]
    fn test_deserialize_wire_ticket() {
        let json = r#"{
            "_id": "65a",
            "title": "Printer jam",
            "description": "Floor 3",
            "status": "in_progress",
            "priority": "critical",
            "category": "hardware",
            "department": "IT",
            "createdBy": {"_id": "u-1", "username": "jdoe"},
            "assignedTo": null,
            "dueDate": "2024-06-01",
            "createdAt": "2024-05-20T08:00:00Z"
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, "65a");
        assert_eq!(ticket.status, TicketStatus::InProgress);
        assert_eq!(ticket.created_by, "u-1");
        assert_eq!(ticket.assigned_to, None);
        assert!(ticket.is_overdue(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()));
        assert!(!ticket.is_overdue(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
    }

    #[test]
    fn test_ticket_validation() {
        let dto = TicketDto {
            title: "x".repeat(201),
            ..TicketDto::default()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("title"), Some("Title must not exceed 200 characters"));
        assert_eq!(errors.get("description"), Some("Description is required"));
        assert!(errors.contains("department"));

        let dto = TicketDto {
            title: "VPN down".into(),
            description: "Since 9am".into(),
            ..TicketDto::for_department(Some(Department::It))
        };
        assert!(dto.validate().is_ok());
    }
}
