use crate::domain::common::dates::{flexible_date, optional_flexible_date};
use crate::domain::common::{reference, FieldValue, ListRecord, Lookups, Resource, UNRESOLVED};
use crate::enums::Department;
use crate::shared::notification::ToastCategory;
use crate::shared::validation::{FieldErrors, FormValidator, ValidationRules};
use crate::system::access::AccessSubject;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Запись табеля: часы пользователя за день по организации, клиенту и активности
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "user", deserialize_with = "reference::deserialize")]
    pub user_id: String,
    #[serde(default)]
    pub department: Option<Department>,
    #[serde(with = "flexible_date")]
    pub date: NaiveDate,
    pub hours: f64,
    #[serde(alias = "organization", deserialize_with = "reference::deserialize")]
    pub organization_id: String,
    #[serde(alias = "customer", deserialize_with = "reference::deserialize")]
    pub customer_id: String,
    #[serde(alias = "process", deserialize_with = "reference::deserialize")]
    pub process_id: String,
    #[serde(alias = "activity", deserialize_with = "reference::deserialize")]
    pub activity_id: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for TimeEntry {
    fn collection_path() -> &'static str {
        "/time-entries"
    }

    fn element_name() -> &'static str {
        "Time entry"
    }

    fn list_name() -> &'static str {
        "Timesheets"
    }

    fn list_key() -> &'static str {
        "timeEntries"
    }

    fn item_key() -> &'static str {
        "timeEntry"
    }

    fn toast_category() -> ToastCategory {
        ToastCategory::System
    }
}

/// Query string of `GET /time-entries`; the date range is evaluated by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeEntryQuery {
    #[serde(skip_serializing_if = "Option::is_none", with = "optional_flexible_date")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none", with = "optional_flexible_date")]
    pub to: Option<NaiveDate>,
}

// ============================================================================
// List row
// ============================================================================

/// Строка табеля с разрешёнными наименованиями справочников
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntryRow {
    pub entry: TimeEntry,
    pub organization: Option<String>,
    pub customer: Option<String>,
    pub process: Option<String>,
    pub activity: Option<String>,
}

impl TimeEntryRow {
    pub fn project(entry: &TimeEntry, lookups: &Lookups) -> Self {
        Self {
            organization: lookups.organization(&entry.organization_id).map(str::to_string),
            customer: lookups.customer(&entry.customer_id).map(str::to_string),
            process: lookups.process(&entry.process_id).map(str::to_string),
            activity: lookups.activity(&entry.activity_id).map(str::to_string),
            entry: entry.clone(),
        }
    }

    pub fn project_all(entries: &[TimeEntry], lookups: &Lookups) -> Vec<Self> {
        entries
            .iter()
            .map(|entry| Self::project(entry, lookups))
            .collect()
    }

    pub fn organization_display(&self) -> &str {
        self.organization.as_deref().unwrap_or(UNRESOLVED)
    }

    pub fn customer_display(&self) -> &str {
        self.customer.as_deref().unwrap_or(UNRESOLVED)
    }

    pub fn process_display(&self) -> &str {
        self.process.as_deref().unwrap_or(UNRESOLVED)
    }

    pub fn activity_display(&self) -> &str {
        self.activity.as_deref().unwrap_or(UNRESOLVED)
    }
}

impl ListRecord for TimeEntryRow {
    fn record_id(&self) -> &str {
        &self.entry.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let entry = &self.entry;
        match name {
            "date" => Some(FieldValue::Day(entry.date)),
            "hours" => Some(FieldValue::Number(entry.hours)),
            "organization" => self.organization.as_deref().map(FieldValue::text),
            "customer" => self.customer.as_deref().map(FieldValue::text),
            "process" => self.process.as_deref().map(FieldValue::text),
            "activity" => self.activity.as_deref().map(FieldValue::text),
            "organization_id" => Some(FieldValue::keyword(&entry.organization_id)),
            "customer_id" => Some(FieldValue::keyword(&entry.customer_id)),
            "process_id" => Some(FieldValue::keyword(&entry.process_id)),
            "activity_id" => Some(FieldValue::keyword(&entry.activity_id)),
            "user_id" => Some(FieldValue::keyword(&entry.user_id)),
            "department" => entry.department.map(|d| FieldValue::keyword(d.code())),
            "notes" => entry.notes.as_deref().map(FieldValue::text),
            "created_at" => entry.created_at.map(FieldValue::Instant),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(5);
        fields.extend(self.process.as_deref());
        fields.extend(self.activity.as_deref());
        fields.extend(self.customer.as_deref());
        fields.extend(self.organization.as_deref());
        fields.extend(self.entry.notes.as_deref());
        fields
    }
}

impl AccessSubject for TimeEntryRow {
    fn subject_id(&self) -> &str {
        &self.entry.id
    }

    fn department(&self) -> Option<Department> {
        self.entry.department
    }

    fn created_by(&self) -> Option<&str> {
        Some(&self.entry.user_id)
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Итоги по видимым записям табеля
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimesheetSummary {
    pub total_hours: f64,
    pub entry_count: usize,
    /// (organization name, hours), by name
    pub by_organization: Vec<(String, f64)>,
    /// (process name, hours), by name
    pub by_process: Vec<(String, f64)>,
}

impl TimesheetSummary {
    pub fn from_rows(rows: &[TimeEntryRow]) -> Self {
        let mut by_organization: BTreeMap<String, f64> = BTreeMap::new();
        let mut by_process: BTreeMap<String, f64> = BTreeMap::new();
        let mut total_hours = 0.0;

        for row in rows {
            total_hours += row.entry.hours;
            *by_organization
                .entry(row.organization_display().to_string())
                .or_default() += row.entry.hours;
            *by_process
                .entry(row.process_display().to_string())
                .or_default() += row.entry.hours;
        }

        Self {
            total_hours,
            entry_count: rows.len(),
            by_organization: by_organization.into_iter().collect(),
            by_process: by_process.into_iter().collect(),
        }
    }
}

/// Hours rendered with at most two decimals ("7.5", "8", "0.25").
pub fn format_hours(hours: f64) -> String {
    let rounded = (hours * 100.0).round() / 100.0;
    let text = format!("{:.2}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

// ============================================================================
// DTO
// ============================================================================

pub const NOTES_RULES: ValidationRules = ValidationRules::none().max_length(1000);
pub const MAX_HOURS_PER_ENTRY: f64 = 24.0;

/// Тело запроса создания / редактирования записи табеля
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryDto {
    #[serde(default, with = "optional_flexible_date")]
    pub date: Option<NaiveDate>,
    pub hours: f64,
    pub organization_id: Option<String>,
    pub customer_id: Option<String>,
    pub process_id: Option<String>,
    pub activity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn selected_id(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|id| !id.trim().is_empty())
}

impl TimeEntryDto {
    pub fn for_day(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        FormValidator::new()
            .selected("date", "Date", self.date)
            .check(
                "hours",
                self.hours.is_finite() && self.hours > 0.0 && self.hours <= MAX_HOURS_PER_ENTRY,
                "Hours must be greater than 0 and at most 24",
            )
            .selected("organization_id", "Organization", selected_id(&self.organization_id))
            .selected("customer_id", "Customer", selected_id(&self.customer_id))
            .selected("process_id", "Process", selected_id(&self.process_id))
            .selected("activity_id", "Activity", selected_id(&self.activity_id))
            .optional_text("notes", "Notes", self.notes.as_deref(), NOTES_RULES)
            .finish()
    }
}

impl From<&TimeEntry> for TimeEntryDto {
    fn from(entry: &TimeEntry) -> Self {
        Self {
            date: Some(entry.date),
            hours: entry.hours,
            organization_id: Some(entry.organization_id.clone()),
            customer_id: Some(entry.customer_id.clone()),
            process_id: Some(entry.process_id.clone()),
            activity_id: Some(entry.activity_id.clone()),
            notes: entry.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{FilterValue, ListState, SortSpec};

    fn lookups() -> Lookups {
        let mut lookups = Lookups::new();
        lookups.organizations.insert("o1".into(), "Acme".into());
        lookups.customers.insert("c1".into(), "Road Runner".into());
        lookups.processes.insert("p1".into(), "Development".into());
        lookups.processes.insert("p2".into(), "Support".into());
        lookups.activities.insert("a1".into(), "Code review".into());
        lookups
    }

    fn entry(id: &str, day: u32, hours: f64, process: &str) -> TimeEntry {
        TimeEntry {
            id: id.into(),
            user_id: "u-1".into(),
            department: Some(Department::It),
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            hours,
            organization_id: "o1".into(),
            customer_id: "c1".into(),
            process_id: process.into(),
            activity_id: "a1".into(),
            notes: None,
            created_at: None,
        }
    }

    #[test]
    fn test_deserialize_populated_references() {
        let json = r#"{"_id":"e1","user":{"_id":"u-1"},"date":"2024-03-04T00:00:00.000Z",
            "hours":7.5,"organization":{"_id":"o1","name":"Acme"},"customerId":"c1",
            "processId":"p1","activity":"a1"}"#;
        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.user_id, "u-1");
        assert_eq!(entry.organization_id, "o1");
        assert_eq!(entry.activity_id, "a1");
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
    }

    #[test]
    fn test_search_matches_resolved_names_and_notes() {
        let mut with_notes = entry("e2", 2, 1.0, "p9");
        with_notes.notes = Some("Sprint planning".into());
        let rows = TimeEntryRow::project_all(&[entry("e1", 1, 2.0, "p1"), with_notes], &lookups());

        assert!(rows[0].matches_search("develop"));
        assert!(rows[0].matches_search("road"));
        assert!(rows[1].matches_search("sprint"));
        assert_eq!(rows[1].process_display(), UNRESOLVED);
        assert!(!rows[1].matches_search("p9"));
    }

    #[test]
    fn test_date_range_filter_and_sort_by_hours() {
        let rows = TimeEntryRow::project_all(
            &[
                entry("e1", 1, 2.0, "p1"),
                entry("e2", 5, 8.0, "p1"),
                entry("e3", 9, 4.0, "p2"),
            ],
            &lookups(),
        );
        let mut state = ListState::new(SortSpec::descending("hours")).with_server_fields(&["date"]);
        state.set_filter(
            "date",
            FilterValue::Between {
                from: NaiveDate::from_ymd_opt(2024, 3, 1),
                to: NaiveDate::from_ymd_opt(2024, 3, 5),
            },
        );
        let page = state.derive(&rows);
        let ids: Vec<_> = page.items.iter().map(|r| r.entry.id.as_str()).collect();
        assert_eq!(ids, vec!["e2", "e1"]);
    }

    #[test]
    fn test_summary_groups_hours() {
        let rows = TimeEntryRow::project_all(
            &[
                entry("e1", 1, 2.0, "p1"),
                entry("e2", 2, 6.5, "p1"),
                entry("e3", 3, 1.5, "p2"),
                entry("e4", 4, 1.0, "missing"),
            ],
            &lookups(),
        );
        let summary = TimesheetSummary::from_rows(&rows);
        assert_eq!(summary.total_hours, 11.0);
        assert_eq!(summary.entry_count, 4);
        assert_eq!(summary.by_organization, vec![("Acme".to_string(), 11.0)]);
        assert_eq!(
            summary.by_process,
            vec![
                ("Development".to_string(), 8.5),
                ("Support".to_string(), 1.5),
                (UNRESOLVED.to_string(), 1.0),
            ]
        );
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(7.5), "7.5");
        assert_eq!(format_hours(8.0), "8");
        assert_eq!(format_hours(0.25), "0.25");
        assert_eq!(format_hours(1.0 / 3.0), "0.33");
    }

    #[test]
    fn test_hours_bounds() {
        let valid = TimeEntryDto {
            hours: 24.0,
            organization_id: Some("o1".into()),
            customer_id: Some("c1".into()),
            process_id: Some("p1".into()),
            activity_id: Some("a1".into()),
            ..TimeEntryDto::for_day(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        };
        assert!(valid.validate().is_ok());

        let zero = TimeEntryDto { hours: 0.0, ..valid.clone() };
        assert!(zero.validate().unwrap_err().contains("hours"));
        let too_many = TimeEntryDto { hours: 24.5, ..valid.clone() };
        assert!(too_many.validate().unwrap_err().contains("hours"));

        let empty = TimeEntryDto::default();
        let errors = empty.validate().unwrap_err();
        for field in ["date", "hours", "organization_id", "customer_id", "process_id", "activity_id"] {
            assert!(errors.contains(field), "missing error for {}", field);
        }
    }
}
