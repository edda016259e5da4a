use chrono::NaiveDate;
use contracts::domain::a002_customer::Customer;
use contracts::domain::a003_process::Activity;
use contracts::domain::a005_time_entry::{TimeEntry, TimeEntryDto};
use contracts::shared::api::ApiError;
use contracts::shared::cascade::DependentSelect;
use contracts::shared::notification::ToastCategory;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::domain::a002_customer::api as customer_api;
use crate::domain::a003_process::api as process_api;
use crate::domain::a005_time_entry::api;
use crate::shared::form_state::{optional_text, FormMode, FormState};

fn customer_id(customer: &Customer) -> &str {
    &customer.id
}

fn activity_id(activity: &Activity) -> &str {
    &activity.id
}

/// Fetch options for a dependent select. The response is applied only if the
/// parent did not change meanwhile; `sync` receives the surviving selection.
fn load_options<T, F, Fut, S>(
    select: RwSignal<DependentSelect<T>>,
    request: Option<(u64, String)>,
    fetch: F,
    id_of: fn(&T) -> &str,
    sync: S,
) where
    T: Send + Sync + 'static,
    F: FnOnce(String) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    S: FnOnce(Option<String>) + 'static,
{
    let Some((generation, parent)) = request else {
        return;
    };
    spawn_local(async move {
        let accepted = match fetch(parent).await {
            Ok(options) => select.try_update(|s| s.receive(generation, options, id_of)),
            Err(err) => {
                log::warn!("Dependent options failed: {}", err);
                select.try_update(|s| s.fail(generation, err.message.clone()))
            }
        };
        if accepted == Some(true) {
            if let Some(selected) = select.try_with_untracked(|s| s.selected().map(str::to_string)) {
                sync(selected);
            }
        } else {
            log::debug!("Dropped options for a superseded parent (generation {})", generation);
        }
    });
}

#[derive(Clone)]
pub struct TimeEntryDetailsViewModel {
    pub state: FormState<TimeEntryDto>,
    pub editing_id: Option<String>,
    pub customers: RwSignal<DependentSelect<Customer>>,
    pub activities: RwSignal<DependentSelect<Activity>>,
}

impl TimeEntryDetailsViewModel {
    pub fn new(mode: &FormMode<TimeEntry>, default_day: NaiveDate) -> Self {
        let (dto, editing_id, customers, activities) = match mode {
            FormMode::Create => (
                TimeEntryDto::for_day(default_day),
                None,
                DependentSelect::new(),
                DependentSelect::new(),
            ),
            FormMode::Edit(entry) => (
                TimeEntryDto::from(entry),
                Some(entry.id.clone()),
                DependentSelect::preset(&entry.organization_id, &entry.customer_id),
                DependentSelect::preset(&entry.process_id, &entry.activity_id),
            ),
        };
        let vm = Self {
            state: FormState::new(dto, ToastCategory::System),
            editing_id,
            customers: RwSignal::new(customers),
            activities: RwSignal::new(activities),
        };
        if vm.editing_id.is_some() {
            vm.load_customers(vm.customers.try_update(|c| c.reload()).flatten());
            vm.load_activities(vm.activities.try_update(|a| a.reload()).flatten());
        }
        vm
    }

    pub fn title(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Edit time entry"
        } else {
            "New time entry"
        }
    }

    fn load_customers(&self, request: Option<(u64, String)>) {
        let form = self.state.form;
        load_options(self.customers, request, customer_api::fetch_customers_of, customer_id, move |selected| {
            form.update(|f| f.customer_id = selected);
        });
    }

    fn load_activities(&self, request: Option<(u64, String)>) {
        let form = self.state.form;
        load_options(self.activities, request, process_api::fetch_activities, activity_id, move |selected| {
            form.update(|f| f.activity_id = selected);
        });
    }

    /// Новая организация сбрасывает клиента и перезагружает список клиентов
    pub fn select_organization(&self, id: String) {
        let request = self.customers.try_update(|c| c.select_parent(&id)).flatten();
        self.state.update("organization_id", |f| {
            f.organization_id = optional_text(id);
            f.customer_id = None;
        });
        self.load_customers(request);
    }

    pub fn select_customer(&self, id: String) {
        self.customers.update(|c| c.select(&id));
        self.state.update("customer_id", |f| f.customer_id = optional_text(id));
    }

    pub fn select_process(&self, id: String) {
        let request = self.activities.try_update(|a| a.select_parent(&id)).flatten();
        self.state.update("process_id", |f| {
            f.process_id = optional_text(id);
            f.activity_id = None;
        });
        self.load_activities(request);
    }

    pub fn select_activity(&self, id: String) {
        self.activities.update(|a| a.select(&id));
        self.state.update("activity_id", |f| f.activity_id = optional_text(id));
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let editing_id = self.editing_id.clone();
        let message = if editing_id.is_some() {
            "Time entry updated"
        } else {
            "Time entry created"
        };
        self.state.submit(
            TimeEntryDto::validate,
            move |dto| async move {
                match editing_id {
                    Some(id) => api::update_time_entry(id, dto).await,
                    None => api::create_time_entry(dto).await,
                }
            },
            message.to_string(),
            on_saved,
        );
    }
}
