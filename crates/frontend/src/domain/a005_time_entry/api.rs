use contracts::domain::a001_organization::Organization;
use contracts::domain::a003_process::Process;
use contracts::domain::a005_time_entry::{TimeEntry, TimeEntryDto, TimeEntryQuery};
use contracts::domain::common::Lookups;
use contracts::shared::api::ApiError;

use crate::domain::a001_organization::api as organization_api;
use crate::domain::a002_customer::api as customer_api;
use crate::domain::a003_process::api as process_api;
use crate::shared::api_utils::{create_item, delete_item, fetch_list_with, update_item};

/// `GET /time-entries?from=&to=`
pub async fn fetch_time_entries(query: TimeEntryQuery) -> Result<Vec<TimeEntry>, ApiError> {
    fetch_list_with::<TimeEntry, _>(&query).await
}

pub async fn create_time_entry(dto: TimeEntryDto) -> Result<(), ApiError> {
    create_item::<TimeEntry, _>(&dto).await
}

pub async fn update_time_entry(id: String, dto: TimeEntryDto) -> Result<(), ApiError> {
    update_item::<TimeEntry, _>(&id, &dto).await
}

pub async fn delete_time_entry(id: String) -> Result<(), ApiError> {
    delete_item::<TimeEntry>(&id).await
}

/// Справочники табеля: организации и процессы для форм, плюс карты имён
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimesheetCatalog {
    pub organizations: Vec<Organization>,
    pub processes: Vec<Process>,
    pub lookups: Lookups,
}

impl TimesheetCatalog {
    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty() && self.processes.is_empty()
    }
}

/// Все справочники последовательно; активности запрашиваются по каждому процессу
pub async fn fetch_catalog() -> Result<TimesheetCatalog, ApiError> {
    let organizations = organization_api::fetch_organizations().await?;
    let customers = customer_api::fetch_customers().await?;
    let processes = process_api::fetch_processes().await?;
    let activities = process_api::fetch_all_activities(&processes).await?;

    let lookups = Lookups {
        organizations: Lookups::index(&organizations, |o| o.id.as_str(), |o| o.name.as_str()),
        customers: Lookups::index(&customers, |c| c.id.as_str(), |c| c.name.as_str()),
        processes: Lookups::index(&processes, |p| p.id.as_str(), |p| p.name.as_str()),
        activities: Lookups::index(&activities, |a| a.id.as_str(), |a| a.name.as_str()),
        ..Lookups::default()
    };
    log::debug!(
        "Timesheet catalog: {} organizations, {} customers, {} processes, {} activities",
        organizations.len(),
        customers.len(),
        processes.len(),
        activities.len()
    );

    Ok(TimesheetCatalog {
        organizations,
        processes,
        lookups,
    })
}
